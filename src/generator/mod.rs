pub mod ini;

pub use ini::{render_config, write_config};
