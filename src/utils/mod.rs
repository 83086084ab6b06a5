pub mod logging;
pub mod naming;

pub use logging::init_logging;
pub use naming::{display_name, normalize_locale};
