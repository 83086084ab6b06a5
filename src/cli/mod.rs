//! Command-line interface handling and user interaction

mod args;
mod interaction;
mod output;

pub use args::Cli;
pub use interaction::prompt_for_directory;
pub use output::{format_summary, write_full, write_fonts};
