//! Match failures, locations and the progress metric that ranks them.

use std::fmt;

use serde::Serialize;

/// JSON-pointer-like breadcrumb: `$`, `$.key`, `$[3]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location(String);

impl Location {
    pub fn root() -> Self {
        Self("$".to_string())
    }

    pub fn key(&self, key: &str) -> Self {
        Self(format!("{}.{}", self.0, key))
    }

    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `(terms_consumed, elements_consumed)` within one container match.
///
/// Ranking is lexicographic: more pattern entries resolved wins, then more
/// JSON elements consumed. Used only to choose among competing failures of
/// the same container; it never crosses container boundaries.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Progress {
    pub terms: u64,
    pub elements: u64,
}

impl Progress {
    pub fn term_consumed(self) -> Self {
        Self {
            terms: self.terms + 1,
            ..self
        }
    }

    pub fn element_consumed(self) -> Self {
        Self {
            elements: self.elements + 1,
            ..self
        }
    }
}

/// A well-formed pattern did not match a valid JSON value.
///
/// Returned, never raised; exactly one survives ranking and reaches the
/// caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub location: String,
    pub message: String,
    pub progress: Progress,
}

impl Failure {
    pub fn new(location: &Location, message: impl Into<String>) -> Self {
        Self {
            location: location.as_str().to_string(),
            message: message.into(),
            progress: Progress::default(),
        }
    }

    pub fn with_progress(location: &Location, message: impl Into<String>, progress: Progress) -> Self {
        Self {
            location: location.as_str().to_string(),
            message: message.into(),
            progress,
        }
    }

    /// The one-line reason string surfaced by `check`.
    pub fn reason(&self) -> String {
        format!("At location {} - {}", self.location, self.message)
    }

    /// Keep the failure that made more progress; `self` wins ties, so
    /// earlier branches take precedence.
    pub fn better(self, other: Failure) -> Failure {
        if other.progress > self.progress { other } else { self }
    }
}

/// Hard matching errors, distinct from any match failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MatchError {
    /// The pattern holds a construct the matcher does not support, such as a
    /// programmatically built conditional with no operands. Programmer
    /// facing.
    #[error("invalid JSPEC pattern: {0}")]
    InvalidPattern(String),

    /// Matching recursed past the configured limit; guards against stack
    /// exhaustion on maliciously deep input.
    #[error("matching recursion limit of {limit} exceeded")]
    RecursionLimitExceeded { limit: u32 },
}
