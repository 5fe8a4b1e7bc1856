// gitman: menu-driven terminal front-end for git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> Command Dispatch
//!   (none) menu | status | version
//! ```

use std::io::IsTerminal;
use std::process::ExitCode;

use gitman::cli::global::GlobalOptions;
use gitman::cli::{self, Command};
use gitman::cmd::menu::run_menu_command;
use gitman::cmd::status::run_status_command;
use gitman::config::loader::ConfigLoader;
use gitman::config::{Config, ENV_PREFIX, LOCAL_CONFIG_FILE};
use gitman::git::context::RepoContext;
use gitman::git::exec::ShellGit;
use gitman::logging::init_logging;
use gitman::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(|level| LogLevel::new(level).ok())
        .unwrap_or(LogLevel::WARN);

    let file_level = global
        .file_log_level
        .and_then(|level| LogLevel::new(level).ok())
        .unwrap_or(LogLevel::TRACE);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .with_ansi(std::io::stderr().is_terminal())
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Status(args)) => match prepare(&cli.global) {
            Ok((config, ctx)) => {
                let git = ShellGit::new(&config.git);
                run_status_command(args, &config, &ctx, &git).await
            }
            Err(e) => Err(e),
        },
        None => match prepare(&cli.global) {
            Ok((config, ctx)) => run_menu_command(config, ctx).await,
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

/// Start directory and the configuration layered on top of it.
fn prepare(global: &GlobalOptions) -> gitman::error::Result<(Config, RepoContext)> {
    let ctx = start_context(global)?;
    let config = load_config(global, &ctx)?;
    Ok((config, ctx))
}

fn start_context(global: &GlobalOptions) -> gitman::error::Result<RepoContext> {
    let ctx = RepoContext::current()?;
    match &global.directory {
        Some(dir) => Ok(ctx.change_dir(&dir.to_string_lossy())?),
        None => Ok(ctx),
    }
}

fn build_config_loader(global: &GlobalOptions, ctx: &RepoContext) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional(ctx.dir().join(LOCAL_CONFIG_FILE));
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions, ctx: &RepoContext) -> gitman::error::Result<Config> {
    global
        .apply_overrides(build_config_loader(global, ctx))?
        .build()
}
