//! Canonical INI output for a [`Config`]

use std::fmt;
use std::io::{self, Write};

use crate::models::Config;

/// Render a config in its canonical textual form
///
/// Every section becomes a `[name]` line followed by one
/// `property = value` line per item. Sections and items come out in no
/// particular order. The result is trimmed, so it never ends with a newline
/// and an empty config renders as the empty string.
pub fn render_config(config: &Config) -> String {
    let mut output = String::new();

    for section in config.sections() {
        output.push_str(&format!("[{}]\n", section));

        // The section was just listed, so it has items to return
        for item in config.items(section).unwrap_or_default() {
            output.push_str(&format!("{} = {}\n", item.property, item.value));
        }
    }

    output.trim().to_string()
}

/// Write the canonical form of `config` to `writer`
pub fn write_config<W: Write>(config: &Config, mut writer: W) -> io::Result<()> {
    writer.write_all(render_config(config).as_bytes())?;
    writer.flush()
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_config(self))
    }
}
