//! JSPEC: a pattern language for validating JSON documents.
//!
//! A JSPEC document mixes regex-matched strings, typed placeholders with
//! numeric inequalities, logical conditionals, negation, wildcards and
//! variable-length captures over arrays and objects. This crate scans such a
//! document into a [`Pattern`] and checks JSON values against it, producing a
//! single ranked diagnostic on mismatch.
//!
//! # Example
//!
//! ```
//! use jspec_lib::{EnvResolver, check, parse};
//!
//! let pattern = parse(r#"{"id": int >= 0, "name": string, ...}"#).expect("valid JSPEC");
//! let value = serde_json::json!({"id": 7, "name": "x", "extra": null});
//!
//! let verdict = check(&pattern, &value, &EnvResolver).expect("well-formed pattern");
//! assert!(verdict.matched);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod matcher;
pub mod scanner;

#[cfg(test)]
mod lib_tests;

pub use ast::{Multiplier, Pattern, Term};
pub use matcher::{
    EnvResolver, Failure, MacroResolver, MatchError, Matcher, Verdict, check,
};
pub use scanner::{PrettyError, ScanError, pretty};

/// Scan a JSPEC document into a [`Pattern`].
pub fn parse(document: &str) -> Result<Pattern, ScanError> {
    scanner::scan(document)
}

/// Canonical, comment-free rendering of a pattern.
///
/// `parse(&render(&pattern))` reproduces an equal pattern.
pub fn render(pattern: &Pattern) -> String {
    pattern.to_string()
}
