//! Reads identification metadata from TrueType and OpenType font files.
//!
//! The parser decodes the sfnt table directory and the `name` and `OS/2`
//! tables directly, without any platform font API. [`parse_font`] is the
//! stateless core; [`catalog`] adds directory scanning, parallel parsing and
//! caching on top of it.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod font;
pub mod models;
pub mod utils;

pub use catalog::{Catalog, MetadataCache};
pub use error::{Error, Result};
pub use font::{is_font_file, parse_font, parse_font_file, parse_font_reader};
pub use models::{Config, FontInfo, FontMetadata, OutputFormat};
