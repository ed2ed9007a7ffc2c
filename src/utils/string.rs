//! String helpers for escape handling and typed value conversion

use thiserror::Error;

/// Escape character used in assignment lines
pub const ESCAPE: char = '\\';

/// Separator between property and value
pub const SEPARATOR: char = '=';

/// Resolve the escape sequences understood in assignment lines
///
/// `\r`, `\n`, `\t`, `\=` and `\\` are replaced by the character they
/// stand for. Any other backslash sequence is copied unchanged, backslash
/// included, and so is a backslash at the very end of the input.
///
/// # Arguments
///
/// * `s` - The raw text taken from the line
///
/// # Returns
///
/// The text with all known escapes resolved
pub fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != ESCAPE {
            result.push(c);
            continue;
        }

        let replacement = match chars.peek() {
            Some('r') => '\r',
            Some('n') => '\n',
            Some('t') => '\t',
            Some('=') => SEPARATOR,
            Some('\\') => ESCAPE,
            // Unknown escape or trailing backslash
            _ => {
                result.push(c);
                continue;
            }
        };
        _ = chars.next();
        result.push(replacement);
    }

    result
}

/// Byte offsets of every separator not directly preceded by a backslash
///
/// A separator at the start of the line counts as unescaped.
pub fn unescaped_separators(s: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut previous = None::<char>;

    for (i, c) in s.char_indices() {
        if c == SEPARATOR && previous != Some(ESCAPE) {
            positions.push(i);
        }
        previous = Some(c);
    }

    positions
}

/// Strip every leading and trailing bracket character
///
/// `[[name]]` becomes `name`, and so would `[name]]]`.
pub fn trim_brackets(s: &str) -> &str {
    s.trim_matches(|c| c == '[' || c == ']')
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid boolean value {0:?}")]
pub struct ParseBoolError(pub String);

/// Parse a boolean from its canonical textual tokens
///
/// Accepted: `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(s: &str) -> Result<bool, ParseBoolError> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseBoolError(s.to_string())),
    }
}
