//! Identifier validation.
//!
//! Validation is total: any candidate, including values that are not text at
//! all, yields a verdict rather than an error.

use std::fmt;

use crate::config::Config;

/// A value offered for validation.
///
/// Only text can ever be an identifier; every other shape collapses into
/// [`Candidate::Other`] and is rejected without further inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// A string to check.
    Text(&'a str),
    /// Anything that is not a string: absent values, numbers, objects, lists.
    Other,
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl<'a> From<Option<&'a str>> for Candidate<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::Other, Self::Text)
    }
}

impl<'a> From<&'a serde_json::Value> for Candidate<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::Text(s),
            _ => Self::Other,
        }
    }
}

/// The first reason a candidate is not an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalid {
    /// The candidate is not text.
    NotText,
    /// Wrong number of separator-delimited segments.
    SegmentCount {
        /// Units the configuration requires.
        expected: usize,
        /// Segments found.
        found: usize,
    },
    /// A segment is not an exact dictionary unit.
    UnknownUnit {
        /// Zero-based segment position.
        position: usize,
        /// The offending segment.
        unit: String,
    },
}

impl fmt::Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotText => write!(f, "not a string"),
            Self::SegmentCount { expected, found } => {
                write!(f, "expected {expected} segments, found {found}")
            }
            Self::UnknownUnit { position, unit } => {
                write!(f, "segment {position} ({unit:?}) is not a dictionary unit")
            }
        }
    }
}

/// Checks candidates against a configuration.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    config: &'a Config,
}

impl<'a> Validator<'a> {
    /// Creates a validator for `config`.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Whether `candidate` is a well-formed identifier.
    pub fn is_valid<'c>(&self, candidate: impl Into<Candidate<'c>>) -> bool {
        self.explain(candidate).is_ok()
    }

    /// Returns the first reason `candidate` is not a well-formed identifier.
    ///
    /// # Errors
    ///
    /// Returns the [`Invalid`] reason when the candidate is rejected.
    pub fn explain<'c>(&self, candidate: impl Into<Candidate<'c>>) -> Result<(), Invalid> {
        let Candidate::Text(text) = candidate.into() else {
            return Err(Invalid::NotText);
        };

        let expected = self.config.num_units();
        let found = text.split(self.config.separator()).count();
        if found != expected {
            return Err(Invalid::SegmentCount { expected, found });
        }

        let dictionary = self.config.dictionary();
        for (position, unit) in text.split(self.config.separator()).enumerate() {
            if !dictionary.contains(unit) {
                return Err(Invalid::UnknownUnit { position, unit: unit.to_string() });
            }
        }
        Ok(())
    }
}
