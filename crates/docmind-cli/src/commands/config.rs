//! Config command - inspect and initialize configuration files.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use docmind_core::DocmindConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as JSON
    Show,

    /// Write a default configuration file
    Init {
        /// Where to write the file
        #[arg(default_value = "docmind.json")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the config file path in effect
    Path,
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.action {
        ConfigAction::Show => {
            let config = super::extract::load_config(config_path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigAction::Init { path, force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            DocmindConfig::default().save(&path)?;
            println!(
                "{} Default config written to {}",
                style("✓").green(),
                path.display()
            );
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", config_path.unwrap_or("docmind.json"));
            Ok(())
        }
    }
}
