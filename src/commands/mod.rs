//! Command dispatch and handlers.

pub mod generate;
pub mod info;
pub mod validate;

use std::env;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, Command};
use crate::config::{Config, REFERENCE};
use crate::context::ServiceContext;

/// Env var naming a default YAML config file.
pub const CONFIG_ENV: &str = "UUPID_CONFIG";

/// Dispatch a parsed command to its handler.
///
/// Only `generate` draws random bytes, so only it consults
/// `UUPID_RECORD=<path>` (record every byte draw to a cassette) and
/// `UUPID_REPLAY=<path>` (serve byte draws from one).
///
/// # Errors
///
/// Returns an error string if the config cannot be loaded or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = resolve_config(cli.config.as_deref())?;

    match &cli.command {
        Command::Generate { count } => {
            let ctx = ServiceContext::from_env()?;
            let result = generate::run_with_context(&ctx, &config, *count);

            // Write the cassette even when the command failed.
            if ctx.is_recording() {
                finish_recording(ctx)?;
            }
            result
        }
        Command::Validate { json, candidates } => validate::run(&config, candidates, *json),
        Command::Info => info::run(&config),
    }
}

/// Load the config from `--config`, then `UUPID_CONFIG`, then the reference.
fn resolve_config(flag: Option<&Path>) -> Result<Config, String> {
    let path = flag.map(Path::to_path_buf).or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
    match path {
        Some(path) => Config::load(&path).map_err(|e| e.to_string()),
        None => Ok(REFERENCE.clone()),
    }
}

/// Finish a recording context and print the cassette path.
fn finish_recording(ctx: ServiceContext) -> Result<(), String> {
    if let Some(path) = ctx.finish()? {
        eprintln!("Recording saved to: {}", path.display());
    }
    Ok(())
}
