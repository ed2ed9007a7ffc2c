pub mod document;
pub mod item;
pub mod line_reader;
pub mod settings;

pub use document::{is_section, parse_document};
pub use item::parse_item;
pub use line_reader::LineReader;
pub use settings::ParseSettings;
