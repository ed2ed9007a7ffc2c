//! Read, query, modify and write INI configuration data
//!
//! ```rust
//! use ini_config::Config;
//!
//! let config: Config = "[server]\nhost = localhost\nport = 8080".parse().unwrap();
//! assert_eq!(config.get("server", "host").unwrap(), "localhost");
//! assert_eq!(config.get_int("server", "port").unwrap(), 8080);
//! ```

pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod utils;

// Re-export the main types for easier access
pub use error::{Error, ParseError, Result};
pub use models::{Config, Item, Section};

// Re-export parser entry points
pub use parser::{parse_document, parse_item, LineReader, ParseSettings};
