use std::io::{BufReader, Read};
use std::str::FromStr;

use log::{debug, trace};

use crate::error::{Error, ParseError};
use crate::models::Config;
use crate::parser::item::parse_item;
use crate::parser::line_reader::LineReader;
use crate::parser::settings::ParseSettings;
use crate::utils::string::trim_brackets;

/// What a single trimmed line turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    Comment,
    Blank,
    Section(&'a str),
    Assignment,
}

fn classify<'a>(trimmed: &'a str, settings: &ParseSettings) -> LineKind<'a> {
    if trimmed.starts_with(';') || trimmed.starts_with('#') {
        LineKind::Comment
    } else if is_section(trimmed) {
        LineKind::Section(trim_brackets(trimmed))
    } else if settings.skip_blank_lines && trimmed.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Assignment
    }
}

/// A section header starts with `[`, ends with `]` and has at least one
/// character in between.
pub fn is_section(line: &str) -> bool {
    line.starts_with('[') && line.ends_with(']') && line.len() > 2
}

/// Build a [`Config`] from every line `reader` produces
///
/// Parsing stops successfully once the reader returns an empty line, which
/// only happens at the end of the input. Assignments before the first
/// section header, broken assignments and read failures abort the parse;
/// the returned [`ParseError`] still holds everything parsed up to that
/// point.
pub fn parse_document<R: Read>(
    mut reader: LineReader<R>,
    settings: &ParseSettings,
) -> Result<Config, ParseError> {
    let mut config = Config::new();
    let mut current_section = None::<String>;
    let mut line_number = 0;

    loop {
        line_number += 1;

        let line = match reader.read_line() {
            Ok(line) => line,
            Err(e) => return Err(abort(Error::Io(e), line_number, config)),
        };
        if line.is_empty() {
            break;
        }

        match classify(line.trim(), settings) {
            LineKind::Comment | LineKind::Blank => {
                trace!("Skipping line {}", line_number);
            }
            LineKind::Section(name) => {
                if config.has_section(name) {
                    debug!("Re-entering section {:?} on line {}", name, line_number);
                } else {
                    debug!("Opening section {:?} on line {}", name, line_number);
                }
                config.open_section(name);
                current_section = if name.is_empty() {
                    None
                } else {
                    Some(name.to_string())
                };
            }
            LineKind::Assignment => {
                let item = match parse_item(&line) {
                    Ok(item) => item,
                    Err(e) => return Err(abort(e, line_number, config)),
                };

                let Some(section) = current_section.as_deref() else {
                    return Err(abort(Error::AssignmentOutsideSection, line_number, config));
                };

                trace!(
                    "Setting {:?} in section {:?} on line {}",
                    item.property,
                    section,
                    line_number
                );
                config
                    .open_section(section)
                    .insert(item.property, item.value);
            }
        }
    }

    Ok(config)
}

fn abort(error: Error, line: usize, partial: Config) -> ParseError {
    debug!("Parsing stopped on line {}: {}", line, error);
    ParseError::new(error, line, partial)
}

impl Config {
    /// Parse INI text with the default settings
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        Self::parse_with(content, &ParseSettings::default())
    }

    pub fn parse_with(content: &str, settings: &ParseSettings) -> Result<Self, ParseError> {
        parse_document(LineReader::new(content.as_bytes()), settings)
    }

    /// Parse INI data from any byte source
    ///
    /// The source is read exactly once and is neither opened nor closed
    /// here; pass a `File` the caller already owns, a socket, or a buffer.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ParseError> {
        Self::from_reader_with(reader, &ParseSettings::default())
    }

    pub fn from_reader_with<R: Read>(
        reader: R,
        settings: &ParseSettings,
    ) -> Result<Self, ParseError> {
        parse_document(LineReader::new(BufReader::new(reader)), settings)
    }
}

impl FromStr for Config {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Config::parse(s)
    }
}
