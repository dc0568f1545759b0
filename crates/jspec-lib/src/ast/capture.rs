//! Capture groups, object pairs and multiplicity ranges.
//!
//! A capture group matches a variable number of consecutive array elements
//! (or unordered object pairs) against a logical body, bounded by a
//! [`Multiplier`]. Canonical renderings are computed once at construction and
//! carried through [`reduced`](Multiplier::reduced) copies, so diagnostics
//! always show the group as it was written.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::Term;
use super::op::LogicalOp;

/// Rendering of both ellipsis forms.
pub const ELLIPSIS: &str = "...";

/// Inclusive `(min, max)` bound on how many elements a capture absorbs.
///
/// `None` stands for the `?` written in the source: an absent minimum is
/// zero, an absent maximum is unbounded. An unmarked group is `(1, 1)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Multiplier {
    pub minimum: Option<u64>,
    pub maximum: Option<u64>,
}

impl Multiplier {
    /// The default for a group without a multiplier suffix.
    pub const ONE: Multiplier = Multiplier {
        minimum: Some(1),
        maximum: Some(1),
    };

    /// `x?`: zero or more.
    pub const ANY: Multiplier = Multiplier {
        minimum: None,
        maximum: None,
    };

    pub fn new(minimum: Option<u64>, maximum: Option<u64>) -> Self {
        Self { minimum, maximum }
    }

    /// False when the range is inverted (`min > max`); the scanner rejects
    /// such multipliers.
    pub fn is_valid(&self) -> bool {
        match (self.minimum, self.maximum) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }

    /// Both bounds decremented by one, floored at zero, `?` preserved.
    /// `ANY` is a fixed point.
    pub fn reduced(self) -> Self {
        Self {
            minimum: self.minimum.map(|min| min.saturating_sub(1)),
            maximum: self.maximum.map(|max| max.saturating_sub(1)),
        }
    }

    /// The capture has absorbed enough elements to be complete.
    pub fn satisfied(self) -> bool {
        self.minimum.is_none_or(|min| min == 0)
    }

    /// The capture cannot absorb another element.
    pub fn exhausted(self) -> bool {
        self.maximum == Some(0)
    }

    /// How many more elements the capture still requires.
    pub fn remaining_minimum(self) -> u64 {
        self.minimum.unwrap_or(0)
    }

    /// Rendering suffix for a capture group; the default `(1, 1)` is
    /// unmarked in canonical form.
    pub fn suffix(&self) -> String {
        if *self == Multiplier::ONE {
            String::new()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |b: Option<u64>| b.map_or_else(|| "?".to_string(), |n| n.to_string());
        let min = bound(self.minimum);
        let max = bound(self.maximum);
        if min == max {
            write!(f, "x{min}")
        } else {
            write!(f, "x{min}-{max}")
        }
    }
}

/// A key-value pair inside an object term or object capture body.
///
/// The key term is restricted to `String` or `StringAny` by the scanner.
#[derive(Clone, Debug)]
pub struct ObjectPair {
    pub key: Term,
    pub value: Term,
    rendering: String,
}

impl ObjectPair {
    pub fn new(key: Term, value: Term) -> Self {
        let rendering = format!("{key}: {value}");
        Self {
            key,
            value,
            rendering,
        }
    }

    pub fn rendering(&self) -> &str {
        &self.rendering
    }
}

impl PartialEq for ObjectPair {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl fmt::Display for ObjectPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendering)
    }
}

fn body_rendering<T: fmt::Display>(operands: &[T], ops: &[LogicalOp], multiplier: Multiplier) -> String {
    let mut out = String::from("(");
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            out.push_str(&format!(" {} ", ops[i - 1]));
        }
        out.push_str(&operand.to_string());
    }
    out.push(')');
    out.push_str(&multiplier.suffix());
    out
}

/// Capture over consecutive array elements: a logical body of terms plus a
/// multiplicity range.
#[derive(Clone, Debug)]
pub struct ArrayCapture {
    pub terms: Vec<Term>,
    pub ops: Vec<LogicalOp>,
    pub multiplier: Multiplier,
    rendering: String,
}

impl ArrayCapture {
    pub fn new(terms: Vec<Term>, ops: Vec<LogicalOp>, multiplier: Multiplier) -> Self {
        debug_assert_eq!(terms.len(), ops.len() + 1);
        let rendering = body_rendering(&terms, &ops, multiplier);
        Self {
            terms,
            ops,
            multiplier,
            rendering,
        }
    }

    /// `...` sugar: a wildcard body with multiplicity `(0, inf)`.
    pub fn ellipsis() -> Self {
        Self {
            terms: vec![Term::Wildcard],
            ops: Vec::new(),
            multiplier: Multiplier::ANY,
            rendering: ELLIPSIS.to_string(),
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        self.rendering == ELLIPSIS
    }

    pub fn rendering(&self) -> &str {
        &self.rendering
    }

    pub fn satisfied(&self) -> bool {
        self.multiplier.satisfied()
    }

    pub fn exhausted(&self) -> bool {
        self.multiplier.exhausted()
    }
}

/// Group equality is canonical-string plus multiplier equality; the hash
/// uses the canonical string alone, so equal groups hash alike.
impl PartialEq for ArrayCapture {
    fn eq(&self, other: &Self) -> bool {
        self.rendering == other.rendering && self.multiplier == other.multiplier
    }
}

impl Eq for ArrayCapture {}

impl Hash for ArrayCapture {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rendering.hash(state);
    }
}

impl fmt::Display for ArrayCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendering)
    }
}

/// Capture over unordered object pairs: a logical body of pairs plus a
/// multiplicity range.
#[derive(Clone, Debug)]
pub struct ObjectCapture {
    pub pairs: Vec<ObjectPair>,
    pub ops: Vec<LogicalOp>,
    pub multiplier: Multiplier,
    rendering: String,
}

impl ObjectCapture {
    pub fn new(pairs: Vec<ObjectPair>, ops: Vec<LogicalOp>, multiplier: Multiplier) -> Self {
        debug_assert_eq!(pairs.len(), ops.len() + 1);
        let rendering = body_rendering(&pairs, &ops, multiplier);
        Self {
            pairs,
            ops,
            multiplier,
            rendering,
        }
    }

    /// `...` sugar: any string key to any value, multiplicity `(0, inf)`.
    pub fn ellipsis() -> Self {
        Self {
            pairs: vec![ObjectPair::new(Term::StringAny, Term::Wildcard)],
            ops: Vec::new(),
            multiplier: Multiplier::ANY,
            rendering: ELLIPSIS.to_string(),
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        self.rendering == ELLIPSIS
    }

    pub fn rendering(&self) -> &str {
        &self.rendering
    }

    pub fn satisfied(&self) -> bool {
        self.multiplier.satisfied()
    }

    pub fn exhausted(&self) -> bool {
        self.multiplier.exhausted()
    }
}

impl PartialEq for ObjectCapture {
    fn eq(&self, other: &Self) -> bool {
        self.rendering == other.rendering && self.multiplier == other.multiplier
    }
}

impl Eq for ObjectCapture {}

impl Hash for ObjectCapture {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rendering.hash(state);
    }
}

impl fmt::Display for ObjectCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendering)
    }
}
