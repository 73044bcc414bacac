//! Parse outcome - records which path produced a parsed value.
//!
//! Parsers never fail. The outcome keeps the distinction between a clean
//! parse, a pattern-based recovery and a plain default observable for
//! logging and tests, while callers that only want the value use
//! [`ParseOutcome::into_value`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a value was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseSource {
    Parsed,
    FallbackExtracted,
    Defaulted,
}

impl fmt::Display for ParseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ParseSource::Parsed => "parsed",
            ParseSource::FallbackExtracted => "fallback_extracted",
            ParseSource::Defaulted => "defaulted",
        };
        write!(f, "{}", label)
    }
}

/// Tagged parse result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    /// The input was read by the primary parser
    Parsed(T),
    /// The primary parser failed, but some fields were recovered by pattern
    FallbackExtracted(T),
    /// Nothing could be read; the value is the type's default
    Defaulted,
}

impl<T: Default> ParseOutcome<T> {
    /// The plain value, substituting the default for `Defaulted`
    pub fn into_value(self) -> T {
        match self {
            ParseOutcome::Parsed(value) | ParseOutcome::FallbackExtracted(value) => value,
            ParseOutcome::Defaulted => T::default(),
        }
    }
}

impl<T> ParseOutcome<T> {
    pub fn source(&self) -> ParseSource {
        match self {
            ParseOutcome::Parsed(_) => ParseSource::Parsed,
            ParseOutcome::FallbackExtracted(_) => ParseSource::FallbackExtracted,
            ParseOutcome::Defaulted => ParseSource::Defaulted,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, ParseOutcome::Defaulted)
    }
}
