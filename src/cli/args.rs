use std::path::PathBuf;

use clap::Parser;

use crate::error::{Error, Result};
use crate::models::{Config, OutputFormat};
use crate::utils::normalize_locale;

/// List the family, full name, style and weight of TrueType/OpenType fonts
#[derive(Parser, Debug)]
#[command(name = "fontmeta", version, about, long_about = None)]
pub struct Cli {
    /// Font files or directories to scan (prompted for when omitted)
    pub paths: Vec<PathBuf>,

    /// Descend into sub-directories
    #[arg(short, long)]
    pub recursive: bool,

    /// Preferred locale for display names
    #[arg(long, default_value = "en")]
    pub locale: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Process the directories listed in FILE, one per line
    #[arg(long, value_name = "FILE")]
    pub batch: Option<PathBuf>,

    /// Number of worker threads used for parsing
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Build the scan configuration from the parsed arguments
    pub fn to_config(&self) -> Result<Config> {
        let locale = normalize_locale(&self.locale);
        if locale.is_empty() {
            return Err(Error::Config(format!("invalid locale '{}'", self.locale)));
        }
        if self.threads == Some(0) {
            return Err(Error::Config("--threads must be at least 1".to_string()));
        }

        let mut config = Config::new(self.debug, locale);
        config.recursive = self.recursive;
        config.output_format = self.format;
        config.threads = self.threads;
        Ok(config)
    }
}
