//! Error types shared by the parser and the config store

use std::io;

use thiserror::Error;

use crate::models::Config;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure the crate can report
///
/// The first three variants only come out of parsing and always abort it.
/// The store variants are local to a single call and leave the config
/// untouched.
#[derive(Error, Debug)]
pub enum Error {
    #[error("missing equal sign")]
    MissingSeparator,

    #[error("too many equal signs")]
    TooManySeparators,

    #[error("attempted to use an assignment before a section definition")]
    AssignmentOutsideSection,

    #[error("No such section {0:?}")]
    NoSection(String),

    #[error("No such property {0:?}")]
    NoProperty(String),

    #[error("Section {0:?} already exists")]
    DuplicateSection(String),

    #[error("Failed to convert property {property:?}: {source}")]
    Convert {
        property: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn convert<E>(property: &str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Convert {
            property: property.to_string(),
            source: Box::new(source),
        }
    }
}

/// A failed parse
///
/// Keeps whatever was built before the failing line so callers can inspect
/// it for diagnostics.
#[derive(Error, Debug)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    #[source]
    kind: Error,
    line: usize,
    partial: Config,
}

impl ParseError {
    pub(crate) fn new(kind: Error, line: usize, partial: Config) -> Self {
        ParseError {
            kind,
            line,
            partial,
        }
    }

    pub fn kind(&self) -> &Error {
        &self.kind
    }

    /// 1-based number of the line that failed
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn partial(&self) -> &Config {
        &self.partial
    }

    pub fn into_partial(self) -> Config {
        self.partial
    }

    pub fn into_kind(self) -> Error {
        self.kind
    }
}
