//! Logical operators and numeric inequalities.

use std::fmt;

use serde_json::Number;

/// Logical operator joining operands in conditionals and capture bodies.
///
/// All three operators share one precedence level; sequences are folded
/// strictly left to right.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
    Xor,
}

impl LogicalOp {
    pub fn symbol(self) -> &'static str {
        match self {
            LogicalOp::And => "&",
            LogicalOp::Or => "|",
            LogicalOp::Xor => "^",
        }
    }

    /// Combine two already-evaluated operands. Both sides are always
    /// evaluated before this is called; there is no short-circuiting.
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            LogicalOp::And => lhs && rhs,
            LogicalOp::Or => lhs || rhs,
            LogicalOp::Xor => lhs != rhs,
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Fold an alternating sequence `v0 op0 v1 op1 ... vn` left to right.
///
/// `values` must hold one more entry than `ops`; every operand has already
/// been evaluated, so XOR and failure reporting see all of them.
pub fn fold(values: &[bool], ops: &[LogicalOp]) -> bool {
    debug_assert_eq!(values.len(), ops.len() + 1);
    let mut acc = values[0];
    for (op, value) in ops.iter().zip(&values[1..]) {
        acc = op.apply(acc, *value);
    }
    acc
}

/// Inequality symbol usable on `int`, `real` and `number` placeholders.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ineq {
    LessThan,
    LessThanOrEqual,
    MoreThan,
    MoreThanOrEqual,
}

impl Ineq {
    pub fn symbol(self) -> &'static str {
        match self {
            Ineq::LessThan => "<",
            Ineq::LessThanOrEqual => "<=",
            Ineq::MoreThan => ">",
            Ineq::MoreThanOrEqual => ">=",
        }
    }

    pub fn compare(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Ineq::LessThan => lhs < rhs,
            Ineq::LessThanOrEqual => lhs <= rhs,
            Ineq::MoreThan => lhs > rhs,
            Ineq::MoreThanOrEqual => lhs >= rhs,
        }
    }
}

impl fmt::Display for Ineq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Numeric predicate attached to a placeholder, e.g. the `< 5` in `int < 5`.
///
/// The bound keeps its source number form so `int < 5` and `real < 5.0`
/// render back faithfully.
#[derive(Clone, Debug, PartialEq)]
pub struct Bound {
    pub op: Ineq,
    pub value: Number,
}

impl Bound {
    pub fn new(op: Ineq, value: Number) -> Self {
        Self { op, value }
    }

    pub fn holds(&self, candidate: f64) -> bool {
        self.value
            .as_f64()
            .is_some_and(|bound| self.op.compare(candidate, bound))
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.op, self.value)
    }
}
