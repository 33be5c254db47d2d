pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "greater-number")]
#[command(about = "Reads two integers and reports which one is greater")]
pub struct CliConfig {
    /// Path to a TOML file overriding prompts and pause behavior
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit right after printing the result instead of waiting for Enter
    #[arg(long)]
    pub no_pause: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn settings(&self) -> Result<settings::Settings> {
        settings::Settings::resolve(self.config.as_deref(), self.no_pause)
    }
}
