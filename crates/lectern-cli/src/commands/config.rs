use anyhow::{bail, Result};
use lectern_config::LecternConfig;
use std::path::Path;

use crate::cli::ConfigCommands;

pub fn execute(cmd: ConfigCommands, config: &LecternConfig, explicit: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommands::Show { format } => show(config, &format),
        ConfigCommands::Path => path(explicit),
    }
}

/// Show the effective configuration, overrides applied
fn show(config: &LecternConfig, format: &str) -> Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(config)?),
        "toml" => print!("{}", config.to_toml_string()?),
        other => bail!("Unknown config format: {other} (expected toml or json)"),
    }
    Ok(())
}

fn path(explicit: Option<&Path>) -> Result<()> {
    match explicit.map(Path::to_path_buf).or_else(LecternConfig::discover) {
        Some(path) => println!("{}", path.display()),
        None => println!("No config file found; using defaults"),
    }
    Ok(())
}
