//! Directory scanning, batch lists and metadata caching on top of the parser

pub mod batch;
pub mod cache;
pub mod scan;

pub use batch::{batch_scan, parse_batch_list, read_batch_file, BatchResult};
pub use cache::{FileKey, MetadataCache};
pub use scan::{find_font_files, Catalog};
