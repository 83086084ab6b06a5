//! Data types shared by the parser, the catalog and the CLI

pub mod config;
pub mod font;

pub use config::{Config, OutputFormat};
pub use font::{FontInfo, FontMetadata};
