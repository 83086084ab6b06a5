//! sfnt parsing and metadata extraction

pub mod cursor;
pub mod directory;
pub mod metadata;
pub mod name;
pub mod weight;

pub use cursor::Cursor;
pub use directory::{TableDirectory, TableEntry, TableKey, Tag};
pub use metadata::{is_font_file, parse_font, parse_font_file, parse_font_reader};
pub use name::NameTable;
pub use weight::{estimate_weight, is_italic_style, weight_name};
