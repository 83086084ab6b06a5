use std::fmt;

use clap::ValueEnum;

/// Configuration for a font scan
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// Locale used to pick display names, e.g. `"en"` or `"zh"`
    pub locale: String,
    /// Descend into sub-directories
    pub recursive: bool,
    /// How results are printed
    pub output_format: OutputFormat,
    /// Worker threads for parsing; `None` uses rayon's global pool
    pub threads: Option<usize>,
}

/// How scan results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per font
    #[default]
    Summary,
    /// Every extracted field
    Full,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Summary => write!(f, "summary"),
            OutputFormat::Full => write!(f, "full"),
        }
    }
}

impl Config {
    /// Create a new configuration with default settings
    pub fn new(debug_mode: bool, locale: impl Into<String>) -> Self {
        Self {
            debug_mode,
            locale: locale.into(),
            recursive: false,
            output_format: OutputFormat::Summary,
            threads: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(false, "en")
    }
}
