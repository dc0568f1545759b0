//! The JSPEC pattern tree.
//!
//! A [`Pattern`] wraps a single root [`Term`]. Terms form a sum type covering
//! every construct of the language: JSON-like literals, kind placeholders
//! (optionally bounded by an inequality), the wildcard, negation, macros,
//! conditionals, and object/array containers whose entries may be capture
//! groups.
//!
//! Rendering is canonical: `parse(pattern.to_string())` reproduces an equal
//! pattern. Capture groups cache their rendering at construction and reduced
//! copies keep it, so failure messages always show the source form.

mod capture;
mod op;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod capture_tests;

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexSet;

pub use capture::{ArrayCapture, ELLIPSIS, Multiplier, ObjectCapture, ObjectPair};
pub use op::{Bound, Ineq, LogicalOp, fold};

/// A parsed JSPEC document: one root term.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    pub root: Term,
}

impl Pattern {
    pub fn new(root: Term) -> Self {
        Self { root }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}

/// A single pattern node, matchable against exactly one JSON value.
#[derive(Clone, Debug, PartialEq)]
pub enum Term {
    Null,
    Bool(bool),
    Int(i64),
    Real(f64),
    /// Regex source; a JSON string matches when the whole string matches.
    String(String),
    /// Matches any JSON value.
    Wildcard,
    ObjectAny,
    ArrayAny,
    StringAny,
    BoolAny,
    /// `int`, optionally `int < 5` and friends.
    IntBound(Option<Bound>),
    /// `real`, optionally bounded.
    RealBound(Option<Bound>),
    /// `number`: int or real, optionally bounded.
    NumberBound(Option<Bound>),
    /// `!term`: matches exactly when the inner term does not.
    Negation(Box<Term>),
    /// `<NAME>`: resolved through the macro lookup at match time.
    Macro(String),
    /// `(a | b & c)`: alternating operand/operator sequence, no precedence.
    Conditional(Conditional),
    Object(ObjectTerm),
    Array(ArrayTerm),
}

/// Alternating term/operator sequence evaluated strictly left to right.
#[derive(Clone, Debug, PartialEq)]
pub struct Conditional {
    pub terms: Vec<Term>,
    pub ops: Vec<LogicalOp>,
}

impl Conditional {
    pub fn new(terms: Vec<Term>, ops: Vec<LogicalOp>) -> Self {
        debug_assert_eq!(terms.len(), ops.len() + 1);
        Self { terms, ops }
    }
}

impl fmt::Display for Conditional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", self.ops[i - 1])?;
            }
            term.fmt(f)?;
        }
        f.write_str(")")
    }
}

/// One entry of an object term: a simple pair or a capture group.
#[derive(Clone, Debug)]
pub enum ObjectEntry {
    Pair(ObjectPair),
    Capture(ObjectCapture),
}

impl PartialEq for ObjectEntry {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ObjectEntry::Pair(a), ObjectEntry::Pair(b)) => a == b,
            (ObjectEntry::Capture(a), ObjectEntry::Capture(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ObjectEntry {}

impl Hash for ObjectEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            ObjectEntry::Pair(pair) => {
                state.write_u8(0);
                pair.rendering().hash(state);
            }
            ObjectEntry::Capture(capture) => {
                state.write_u8(1);
                capture.rendering().hash(state);
            }
        }
    }
}

impl fmt::Display for ObjectEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectEntry::Pair(pair) => pair.fmt(f),
            ObjectEntry::Capture(capture) => capture.fmt(f),
        }
    }
}

/// An object pattern: an insertion-ordered set of pairs and capture groups.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTerm {
    pub entries: IndexSet<ObjectEntry>,
}

impl ObjectTerm {
    pub fn new(entries: IndexSet<ObjectEntry>) -> Self {
        Self { entries }
    }
}

impl fmt::Display for ObjectTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            entry.fmt(f)?;
        }
        f.write_str("}")
    }
}

/// One entry of an array pattern: a positional term or a capture group.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayEntry {
    Term(Term),
    Capture(ArrayCapture),
}

impl fmt::Display for ArrayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayEntry::Term(term) => term.fmt(f),
            ArrayEntry::Capture(capture) => capture.fmt(f),
        }
    }
}

/// An array pattern: positional entries interleaved with capture groups.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayTerm {
    pub entries: Vec<ArrayEntry>,
}

impl ArrayTerm {
    pub fn new(entries: Vec<ArrayEntry>) -> Self {
        Self { entries }
    }
}

impl fmt::Display for ArrayTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            entry.fmt(f)?;
        }
        f.write_str("]")
    }
}

/// Render a real so it always re-parses as a real (`1000.0`, never `1000`).
pub(crate) fn render_real(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn bounded(f: &mut fmt::Formatter<'_>, keyword: &str, bound: &Option<Bound>) -> fmt::Result {
    match bound {
        None => f.write_str(keyword),
        Some(bound) => write!(f, "{keyword} {bound}"),
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Null => f.write_str("null"),
            Term::Bool(true) => f.write_str("true"),
            Term::Bool(false) => f.write_str("false"),
            Term::Int(n) => write!(f, "{n}"),
            Term::Real(x) => f.write_str(&render_real(*x)),
            Term::String(pattern) => write!(f, "\"{pattern}\""),
            Term::Wildcard => f.write_str("*"),
            Term::ObjectAny => f.write_str("object"),
            Term::ArrayAny => f.write_str("array"),
            Term::StringAny => f.write_str("string"),
            Term::BoolAny => f.write_str("bool"),
            Term::IntBound(bound) => bounded(f, "int", bound),
            Term::RealBound(bound) => bounded(f, "real", bound),
            Term::NumberBound(bound) => bounded(f, "number", bound),
            Term::Negation(inner) => write!(f, "!{inner}"),
            Term::Macro(name) => write!(f, "<{name}>"),
            Term::Conditional(conditional) => conditional.fmt(f),
            Term::Object(object) => object.fmt(f),
            Term::Array(array) => array.fmt(f),
        }
    }
}