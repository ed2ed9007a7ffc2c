//! Core data models
//!
//! [`Config`] owns its sections and each [`Section`] owns its properties.
//! [`Item`] is only a view used when listing or parsing single assignments.
//!
//! # Usage
//!
//! ```rust
//! use ini_config::Config;
//!
//! let mut config = Config::new();
//! config.add_section("server").unwrap();
//! config.set("server", "port", "8080").unwrap();
//!
//! assert_eq!(config.get_int("server", "port").unwrap(), 8080);
//! assert_eq!(config.to_string(), "[server]\nport = 8080");
//! ```

mod config;

pub use config::*;
