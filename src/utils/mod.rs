pub mod string;

// Re-export common utilities
pub use string::{parse_bool, unescape, ParseBoolError};
