//! Display module: presentation of parsed entries in a terminal.

pub mod render;
pub mod style;
pub mod timestamp;

pub use render::{render_entry, render_page_summary, EMPTY_LIST};
pub use style::LevelStyle;
pub use timestamp::format_timestamp;
