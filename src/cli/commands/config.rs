//! Config command - manage configuration

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use crate::config::{Config, CONFIG_KEYS};

#[derive(clap::Args)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
}

pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(ConfigCommand::Show) | None => show_config(),
        Some(ConfigCommand::Get { key }) => get_config(&key),
        Some(ConfigCommand::Set { key, value }) => set_config(&key, &value),
    }
}

fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Quotable Configuration".bold());
    println!();
    println!("  {}  {}", "File:".dimmed(), Config::config_path()?.display());
    println!();

    for key in CONFIG_KEYS {
        // get() covers every listed key
        let value = config.get(key).unwrap_or_default();
        println!("  {}  {}", format!("{key}:").dimmed(), value);
    }

    Ok(())
}

fn get_config(key: &str) -> Result<()> {
    let config = Config::load()?;

    match config.get(key) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => anyhow::bail!(
            "Unknown config key '{}'. Valid keys: {}",
            key,
            CONFIG_KEYS.join(", ")
        ),
    }
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    println!("{} Set {} = {}", "Success:".green(), key, value);
    Ok(())
}
