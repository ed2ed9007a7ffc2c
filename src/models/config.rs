use std::collections::HashMap;
use std::io::{self, Write};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::string::parse_bool;

/// Properties of one section, keyed by property name
pub type Section = HashMap<String, String>;

/// A single property/value pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub property: String,
    pub value: String,
}

impl Item {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Item {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// In-memory INI document: section name to properties
///
/// Neither sections nor properties keep any order. Two configs compare equal
/// when they hold the same sections with the same properties and values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    sections: HashMap<String, Section>,
}

impl Config {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Check if a section exists
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Check if a property exists in the given section
    ///
    /// Returns false when the section itself is missing.
    pub fn has_property(&self, section: &str, property: &str) -> bool {
        self.sections
            .get(section)
            .map(|items| items.contains_key(property))
            .unwrap_or(false)
    }

    /// Get all section names. The order is not deterministic.
    pub fn sections(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    /// Borrow the properties of a section
    pub fn section(&self, section: &str) -> Option<&Section> {
        self.sections.get(section)
    }

    /// Get all items of a section. The order is not deterministic.
    pub fn items(&self, section: &str) -> Result<Vec<Item>> {
        let items = self.section_ref(section)?;

        Ok(items
            .iter()
            .map(|(property, value)| Item::new(property.as_str(), value.as_str()))
            .collect())
    }

    /// Get the value of a property
    ///
    /// Fails with [`Error::NoSection`] if the section is missing, then with
    /// [`Error::NoProperty`] if the section has no such property.
    pub fn get(&self, section: &str, property: &str) -> Result<&str> {
        self.section_ref(section)?
            .get(property)
            .map(String::as_str)
            .ok_or_else(|| Error::NoProperty(property.to_string()))
    }

    /// Get the value of a property, or `default` if it cannot be found
    pub fn get_or<'a>(&'a self, section: &str, property: &str, default: &'a str) -> &'a str {
        self.get(section, property).unwrap_or(default)
    }

    /// Get the value of a property passed through `convert`
    ///
    /// Lookup errors are returned before `convert` is ever called. Whatever
    /// `convert` returns, success or error, is handed back untouched.
    ///
    /// # Arguments
    ///
    /// * `section` - The section to look in
    /// * `property` - The property to read
    /// * `convert` - Turns the raw value into a `T`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_config::{Config, Error};
    ///
    /// let config: Config = "[section]\nfruits = apples, pears".parse().unwrap();
    /// let fruits: Vec<String> = config
    ///     .get_transformed("section", "fruits", |s| {
    ///         Ok::<_, Error>(s.split(',').map(|v| v.trim().to_string()).collect())
    ///     })
    ///     .unwrap();
    /// assert_eq!(fruits, vec!["apples", "pears"]);
    /// ```
    pub fn get_transformed<T, E, F>(&self, section: &str, property: &str, convert: F) -> Result<T, E>
    where
        F: FnOnce(&str) -> Result<T, E>,
        E: From<Error>,
    {
        let value = self.get(section, property)?;
        convert(value)
    }

    /// Get a property as a boolean
    ///
    /// Accepted values: 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False.
    pub fn get_bool(&self, section: &str, property: &str) -> Result<bool> {
        self.get_transformed(section, property, |s| {
            parse_bool(s).map_err(|e| Error::convert(property, e))
        })
    }

    /// Get a property as a signed integer
    pub fn get_int(&self, section: &str, property: &str) -> Result<i64> {
        self.get_transformed(section, property, |s| {
            s.parse::<i64>().map_err(|e| Error::convert(property, e))
        })
    }

    pub fn get_f32(&self, section: &str, property: &str) -> Result<f32> {
        self.get_transformed(section, property, |s| {
            s.parse::<f32>().map_err(|e| Error::convert(property, e))
        })
    }

    pub fn get_f64(&self, section: &str, property: &str) -> Result<f64> {
        self.get_transformed(section, property, |s| {
            s.parse::<f64>().map_err(|e| Error::convert(property, e))
        })
    }

    /// Add a new, empty section
    ///
    /// Fails with [`Error::DuplicateSection`] and leaves the config unchanged
    /// if the section already exists.
    pub fn add_section(&mut self, section: &str) -> Result<()> {
        if self.has_section(section) {
            return Err(Error::DuplicateSection(section.to_string()));
        }

        trace!("Adding section {:?}", section);
        self.sections.insert(section.to_string(), Section::new());
        Ok(())
    }

    /// Remove a section together with all of its properties
    pub fn remove_section(&mut self, section: &str) -> Result<()> {
        match self.sections.remove(section) {
            Some(_) => {
                trace!("Removed section {:?}", section);
                Ok(())
            }
            None => Err(Error::NoSection(section.to_string())),
        }
    }

    /// Remove a single property from a section
    pub fn remove_property(&mut self, section: &str, property: &str) -> Result<()> {
        self.section_mut(section)?
            .remove(property)
            .map(|_| ())
            .ok_or_else(|| Error::NoProperty(property.to_string()))
    }

    /// Set a property, creating it or overwriting its current value
    ///
    /// The section must already exist.
    pub fn set(&mut self, section: &str, property: &str, value: &str) -> Result<()> {
        self.section_mut(section)?
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    /// Write the canonical form to `writer`
    pub fn write_to<W: Write>(&self, writer: W) -> io::Result<()> {
        crate::generator::ini::write_config(self, writer)
    }

    /// Select a section while parsing, creating it if needed
    ///
    /// Unlike [`Config::add_section`] an existing section is not an error.
    pub(crate) fn open_section(&mut self, section: &str) -> &mut Section {
        self.sections.entry(section.to_string()).or_default()
    }

    fn section_ref(&self, section: &str) -> Result<&Section> {
        self.sections
            .get(section)
            .ok_or_else(|| Error::NoSection(section.to_string()))
    }

    fn section_mut(&mut self, section: &str) -> Result<&mut Section> {
        self.sections
            .get_mut(section)
            .ok_or_else(|| Error::NoSection(section.to_string()))
    }
}
