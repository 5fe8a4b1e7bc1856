// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tools: git configuration, cleanup, integrity checks, hooks, aliases and
//! archives.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::git::exec::GitExecutor;
use crate::git::files::hooks;

use super::Session;

/// Archive formats `git archive` is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    TarGz,
}

impl ArchiveFormat {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "zip" => Some(Self::Zip),
            "tar.gz" => Some(Self::TarGz),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::TarGz => "tar.gz",
        }
    }

    /// Output file used when the user gives none.
    #[must_use]
    pub fn default_file(self, repo_name: &str) -> String {
        format!("{repo_name}.{}", self.as_str())
    }
}

const ALIAS_EXAMPLES: [&str; 5] = [
    "git config --global alias.co checkout",
    "git config --global alias.br branch",
    "git config --global alias.ci commit",
    "git config --global alias.st status",
    "git config --global alias.last 'log -1 HEAD'",
];

impl<R: BufRead, W: Write, G: GitExecutor> Session<R, W, G> {
    pub(crate) async fn tools_menu(&mut self) -> io::Result<()> {
        if !self.require_repository()? {
            return Ok(());
        }
        while !self.input_closed() {
            self.clear()?;
            self.banner("🔧 TOOLS AND CONFIGURATION", 35)?;
            self.options(&[
                "Git configuration",
                "Clean up the repository",
                "Check the repository",
                "Git hooks",
                "Git aliases",
                "Archive",
            ])?;

            match self.choice()?.as_deref() {
                Some("1") => self.config_menu().await?,
                Some("2") => self.cleanup_menu().await?,
                Some("3") => self.check_menu().await?,
                Some("4") => self.hooks_menu().await?,
                Some("5") => self.aliases()?,
                Some("6") => self.archive().await?,
                Some("0") | None => break,
                Some(_) => self.invalid_option()?,
            }
        }
        Ok(())
    }

    // --- configuration ---

    async fn config_menu(&mut self) -> io::Result<()> {
        while !self.input_closed() {
            self.clear()?;
            self.banner("⚙️  GIT CONFIGURATION", 25)?;
            self.options(&[
                "Show configuration",
                "Set user name",
                "Set user email",
                "Quick settings",
            ])?;

            match self.choice()?.as_deref() {
                Some("1") => {
                    let output = self.run(&["config", "--list"]).await;
                    if output.succeeded() {
                        self.say(self.theme.info("⚙️  Current configuration:"))?;
                        self.say(output.text())?;
                    } else {
                        self.error_output(output.text())?;
                    }
                    self.pause()?;
                }
                Some("2") => self.set_config("user.name", "User name: ").await?,
                Some("3") => self.set_config("user.email", "Email: ").await?,
                Some("4") => self.quick_settings().await?,
                Some("0") | None => break,
                Some(_) => self.invalid_option()?,
            }
        }
        Ok(())
    }

    async fn set_config(&mut self, key: &str, label: &str) -> io::Result<()> {
        let value = self.prompt(label)?;
        if !value.is_empty() {
            let output = self.run(&["config", key, value.as_str()]).await;
            self.report(&output, &format!("{key} set!"))?;
        }
        self.pause()
    }

    async fn quick_settings(&mut self) -> io::Result<()> {
        self.say("a. Enable colors (color.ui = auto)")?;
        self.say("b. Set the default editor (core.editor)")?;
        self.say("c. Push the current branch by default (push.default = simple)")?;
        let choice = self.prompt("Choose: ")?;

        let (key, value) = match choice.to_ascii_lowercase().as_str() {
            "a" => ("color.ui", "auto".to_string()),
            "b" => {
                let editor = self.prompt("Editor (nano, vim, code, ...): ")?;
                if editor.is_empty() {
                    return self.pause();
                }
                ("core.editor", editor)
            }
            "c" => ("push.default", "simple".to_string()),
            _ => return self.pause(),
        };
        let output = self.run(&["config", key, value.as_str()]).await;
        self.report(&output, &format!("{key} set to {value}!"))?;
        self.pause()
    }

    // --- cleanup ---

    async fn cleanup_menu(&mut self) -> io::Result<()> {
        while !self.input_closed() {
            self.clear()?;
            self.banner("🧹 REPOSITORY CLEANUP", 25)?;
            self.options(&[
                "Remove untracked files (clean)",
                "Prune unreachable objects",
                "Optimize the repository (gc)",
                "Full cleanup",
            ])?;

            match self.choice()?.as_deref() {
                Some("1") => self.clean_untracked().await?,
                Some("2") => {
                    self.say(self.theme.warn("Pruning unreachable objects..."))?;
                    let output = self.run(&["gc", "--prune=now"]).await;
                    self.report(&output, "Unreachable objects pruned!")?;
                    self.pause()?;
                }
                Some("3") => {
                    self.say(self.theme.warn("Optimizing the repository..."))?;
                    let output = self.run(&["gc", "--aggressive", "--prune=now"]).await;
                    self.report(&output, "Repository optimized!")?;
                    self.pause()?;
                }
                Some("4") => self.full_cleanup().await?,
                Some("0") | None => break,
                Some(_) => self.invalid_option()?,
            }
        }
        Ok(())
    }

    async fn clean_untracked(&mut self) -> io::Result<()> {
        let preview = self.run(&["clean", "-n"]).await;
        if !preview.succeeded() {
            self.error_output(preview.text())?;
            return self.pause();
        }
        if preview.text().is_empty() {
            self.success("Nothing to clean!")?;
            return self.pause();
        }

        self.say(self.theme.error("Files that will be removed:"))?;
        self.say(preview.text())?;
        if !self.confirm("Remove these files?")? {
            return Ok(());
        }
        let output = self.run(&["clean", "-f"]).await;
        self.report(&output, "Untracked files removed!")?;
        self.pause()
    }

    async fn full_cleanup(&mut self) -> io::Result<()> {
        if !self.confirm("Full cleanup (may take a while). Continue?")? {
            return Ok(());
        }
        self.say(self.theme.warn("Cleaning up..."))?;
        let steps: [&[&str]; 3] = [
            &["clean", "-f", "-d"],
            &["gc", "--aggressive", "--prune=now"],
            &["reflog", "expire", "--expire=now", "--all"],
        ];
        let mut failed = false;
        for args in steps {
            let output = self.run(args).await;
            if !output.succeeded() {
                warn!(args = ?args, "cleanup step failed");
                self.error_output(output.text())?;
                failed = true;
            }
        }
        if !failed {
            info!("full cleanup finished");
            self.success("Full cleanup finished!")?;
        }
        self.pause()
    }

    // --- checks ---

    async fn check_menu(&mut self) -> io::Result<()> {
        while !self.input_closed() {
            self.clear()?;
            self.banner("🔍 REPOSITORY CHECK", 30)?;
            self.options(&["Check integrity (fsck)", "Object statistics"])?;

            match self.choice()?.as_deref() {
                Some("1") => {
                    self.say(self.theme.warn("Checking integrity..."))?;
                    let output = self.run(&["fsck", "--full"]).await;
                    if output.succeeded() && output.text().is_empty() {
                        self.success("Integrity verified, no problems found.")?;
                    } else {
                        self.failure("Problems detected:")?;
                        self.say(output.text())?;
                    }
                    self.pause()?;
                }
                Some("2") => {
                    let output = self.run(&["count-objects", "-vH"]).await;
                    self.say(self.theme.info("📊 Object statistics:"))?;
                    self.say(output.text())?;
                    self.pause()?;
                }
                Some("0") | None => break,
                Some(_) => self.invalid_option()?,
            }
        }
        Ok(())
    }

    // --- hooks ---

    async fn hooks_menu(&mut self) -> io::Result<()> {
        let repo = self.ctx.dir().to_path_buf();
        while !self.input_closed() {
            self.clear()?;
            self.banner("🪝 GIT HOOKS", 25)?;

            let list = match hooks::list_hooks(&repo).await {
                Ok(list) => list,
                Err(e) => {
                    warn!(error = %e, "cannot read hooks directory");
                    self.failure("Cannot read the hooks directory")?;
                    return self.pause();
                }
            };
            self.say(self.theme.info("📋 Available hooks:"))?;
            for hook in &list {
                let line = if hook.active {
                    self.theme.ok(&format!("✅ {} (active)", hook.name))
                } else {
                    self.theme.warn(&format!("⚪ {} (sample)", hook.name))
                };
                self.say(line)?;
            }
            self.blank()?;
            self.options(&[
                "Enable a sample hook",
                "Disable a hook",
                "Show a hook",
                "Create a custom hook",
            ])?;

            let choice = self.choice()?;
            let label = match choice.as_deref() {
                Some("1") => "Hook to enable (without .sample): ",
                Some("2") => "Hook to disable: ",
                Some("3") => "Hook to show: ",
                Some("4") => "Name of the new hook: ",
                Some("0") | None => break,
                Some(_) => {
                    self.invalid_option()?;
                    continue;
                }
            };
            let name = self.prompt(label)?;
            if !name.is_empty() {
                match choice.as_deref() {
                    Some("1") => match hooks::enable_sample(&repo, &name).await {
                        Ok(()) => self.success(&format!("Hook '{name}' enabled!"))?,
                        Err(e) => self.error_output(&e.to_string())?,
                    },
                    Some("2") => match hooks::disable(&repo, &name).await {
                        Ok(()) => self.success(&format!("Hook '{name}' disabled!"))?,
                        Err(e) => self.error_output(&e.to_string())?,
                    },
                    Some("3") => match hooks::read_hook(&repo, &name).await {
                        Ok(content) => {
                            self.say(self.theme.info(&format!("📄 Hook '{name}':")))?;
                            self.say(content.trim_end())?;
                        }
                        Err(e) => self.error_output(&e.to_string())?,
                    },
                    _ => match hooks::create_hook(&repo, &name).await {
                        Ok(()) => self.success(&format!("Hook '{name}' created!"))?,
                        Err(e) => self.error_output(&e.to_string())?,
                    },
                }
            }
            self.pause()?;
        }
        Ok(())
    }

    // --- aliases and archives ---

    fn aliases(&mut self) -> io::Result<()> {
        self.say(self.theme.warn(
            "Git aliases live in your git configuration file (~/.gitconfig).",
        ))?;
        self.say("Useful examples:")?;
        for example in ALIAS_EXAMPLES {
            self.say(format!("  {example}"))?;
        }
        self.pause()
    }

    async fn archive(&mut self) -> io::Result<()> {
        let Some(format) = ArchiveFormat::parse(&self.prompt("Archive format (zip, tar.gz): ")?)
        else {
            self.failure("Invalid format. Use 'zip' or 'tar.gz'.")?;
            return self.pause();
        };
        let default_file = format.default_file(&self.ctx.name());
        let file = self.prompt(&format!("Output file (default: {default_file}): "))?;
        let file = if file.is_empty() { default_file } else { file };

        let format_arg = format!("--format={}", format.as_str());
        let output = self
            .run(&["archive", format_arg.as_str(), "-o", file.as_str(), "HEAD"])
            .await;
        self.report(&output, &format!("Archive '{file}' created!"))?;
        self.pause()
    }
}
