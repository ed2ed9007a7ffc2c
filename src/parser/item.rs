use crate::error::{Error, Result};
use crate::models::Item;
use crate::utils::string::{unescaped_separators, unescape, SEPARATOR};

/// Parse an assignment of the form `property = value`
///
/// Whitespace around the property and the value is ignored. Only a single
/// unescaped `=` is allowed; an equal sign inside the value must be written
/// as `\=`. Escape sequences are resolved after the line has been split.
pub fn parse_item(line: &str) -> Result<Item> {
    let separators = unescaped_separators(line);

    let position = match separators.as_slice() {
        [] => return Err(Error::MissingSeparator),
        [position] => *position,
        _ => return Err(Error::TooManySeparators),
    };

    let property = line[..position].trim();
    let value = line[position + SEPARATOR.len_utf8()..].trim();

    Ok(Item::new(unescape(property), unescape(value)))
}
