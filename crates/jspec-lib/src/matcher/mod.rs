//! Backtracking matcher: decides whether a JSON value conforms to a pattern.
//!
//! Dispatch is explicit per term variant. Containers are the hard part:
//! arrays are matched positionally with backtracking at capture boundaries,
//! objects by a depth-first search over pair assignments with pruning and
//! memoised failures. Competing failures are ranked by the
//! [`Progress`] metric so exactly one diagnostic survives.
//!
//! The matcher borrows the pattern immutably; reduced captures are
//! lightweight `(group, remaining)` views, never mutations of the tree.

mod failure;
mod macros;
mod regex;


use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::ast::{
    ArrayCapture, ArrayEntry, ArrayTerm, Bound, Conditional, Multiplier, ObjectCapture,
    ObjectEntry, ObjectPair, ObjectTerm, Pattern, Term, fold,
};

pub use failure::{Failure, Location, MatchError, Progress};
pub use macros::{EnvResolver, MacroResolver};
pub use regex::fullmatch;

/// Default bound on matcher recursion: pattern nesting plus container search
/// depth. Backtracking recurses once per element a capture absorbs, so this
/// also caps how long an array a single capture can swallow.
pub const DEFAULT_RECURSION_LIMIT: u32 = 4096;

/// Outcome of matching one term: conformance or a ranked failure.
type Outcome = Result<(), Failure>;

/// Result of a `check` call.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Verdict {
    pub matched: bool,
    /// `At location LOC - MSG` when `matched` is false, empty otherwise.
    pub reason: String,
}

/// Check a JSON value against a pattern.
pub fn check(
    pattern: &Pattern,
    value: &Value,
    macros: &dyn MacroResolver,
) -> Result<Verdict, MatchError> {
    Matcher::new(macros).check(pattern, value)
}

pub struct Matcher<'m> {
    macros: &'m dyn MacroResolver,
    depth: u32,
    limit: u32,
}

/// A pattern array entry plus how much of its multiplicity remains.
#[derive(Clone, Copy)]
enum ArraySlot<'p> {
    Term(&'p Term),
    Capture {
        group: &'p ArrayCapture,
        remaining: Multiplier,
    },
}

impl ArraySlot<'_> {
    fn rendering(&self) -> String {
        match self {
            ArraySlot::Term(term) => term.to_string(),
            ArraySlot::Capture { group, .. } => group.rendering().to_string(),
        }
    }
}

/// A pattern object entry; capture multiplicity is tracked in [`SlotState`].
#[derive(Clone, Copy)]
enum ObjectSlot<'p> {
    Pair(&'p ObjectPair),
    Capture(&'p ObjectCapture),
}

/// Search state for one object entry: its index plus remaining multiplicity
/// (simple pairs carry the `(1, 1)` default and are removed when matched).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct SlotState {
    index: usize,
    remaining: Multiplier,
}

type SearchKey = (Vec<SlotState>, Vec<usize>);

fn render_json_pair((key, value): (&String, &Value)) -> String {
    format!("\"{key}\": {value}")
}

impl<'m> Matcher<'m> {
    pub fn new(macros: &'m dyn MacroResolver) -> Self {
        Self::with_limit(macros, DEFAULT_RECURSION_LIMIT)
    }

    pub fn with_limit(macros: &'m dyn MacroResolver, limit: u32) -> Self {
        Self {
            macros,
            depth: 0,
            limit,
        }
    }

    pub fn check(&mut self, pattern: &Pattern, value: &Value) -> Result<Verdict, MatchError> {
        self.depth = 0;
        Ok(match self.term(&Location::root(), &pattern.root, value)? {
            Ok(()) => Verdict {
                matched: true,
                reason: String::new(),
            },
            Err(failure) => Verdict {
                matched: false,
                reason: failure.reason(),
            },
        })
    }

    fn enter(&mut self) -> Result<(), MatchError> {
        if self.depth >= self.limit {
            return Err(MatchError::RecursionLimitExceeded { limit: self.limit });
        }
        self.depth += 1;
        Ok(())
    }

    fn exit(&mut self) {
        self.depth -= 1;
    }

    /// Match one term against one JSON value.
    fn term(&mut self, loc: &Location, term: &Term, value: &Value) -> Result<Outcome, MatchError> {
        self.enter()?;
        let outcome = self.term_inner(loc, term, value);
        self.exit();
        outcome
    }

    fn term_inner(
        &mut self,
        loc: &Location,
        term: &Term,
        value: &Value,
    ) -> Result<Outcome, MatchError> {
        Ok(match term {
            Term::Null => match value {
                Value::Null => Ok(()),
                _ => Err(Failure::new(loc, format!("expected 'null', got '{value}'"))),
            },
            Term::Bool(expected) => match value {
                Value::Bool(actual) if actual == expected => Ok(()),
                Value::Bool(_) => Err(Failure::new(loc, format!("expected '{term}', got '{value}'"))),
                _ => Err(Failure::new(loc, format!("expected a boolean, got '{value}'"))),
            },
            Term::Int(expected) => match value {
                Value::Number(number) if number.is_i64() || number.is_u64() => {
                    if number.as_i64() == Some(*expected) {
                        Ok(())
                    } else {
                        Err(Failure::new(loc, format!("expected '{term}', got '{value}'")))
                    }
                }
                _ => Err(Failure::new(loc, format!("expected an int, got '{value}'"))),
            },
            Term::Real(expected) => match value {
                Value::Number(number) if number.is_f64() => {
                    if number.as_f64() == Some(*expected) {
                        Ok(())
                    } else {
                        Err(Failure::new(loc, format!("expected '{term}', got '{value}'")))
                    }
                }
                _ => Err(Failure::new(loc, format!("expected a real, got '{value}'"))),
            },
            Term::String(pattern) => match value {
                Value::String(text) => {
                    if fullmatch(pattern, text) {
                        Ok(())
                    } else {
                        Err(Failure::new(
                            loc,
                            format!("regex pattern '{pattern}' failed to match '{value}'"),
                        ))
                    }
                }
                _ => Err(Failure::new(loc, format!("expected a string, got '{value}'"))),
            },
            Term::Wildcard => Ok(()),
            Term::ObjectAny => match value {
                Value::Object(_) => Ok(()),
                _ => Err(Failure::new(loc, format!("expected an object, got '{value}'"))),
            },
            Term::ArrayAny => match value {
                Value::Array(_) => Ok(()),
                _ => Err(Failure::new(loc, format!("expected an array, got '{value}'"))),
            },
            Term::StringAny => match value {
                Value::String(_) => Ok(()),
                _ => Err(Failure::new(loc, format!("expected a string, got '{value}'"))),
            },
            Term::BoolAny => match value {
                Value::Bool(_) => Ok(()),
                _ => Err(Failure::new(loc, format!("expected a boolean, got '{value}'"))),
            },
            Term::IntBound(bound) => match value {
                Value::Number(number) if number.is_i64() || number.is_u64() => {
                    self.bounded(loc, term, bound, number.as_f64(), value)
                }
                _ => Err(Failure::new(loc, format!("expected an int, got '{value}'"))),
            },
            Term::RealBound(bound) => match value {
                Value::Number(number) if number.is_f64() => {
                    self.bounded(loc, term, bound, number.as_f64(), value)
                }
                _ => Err(Failure::new(loc, format!("expected a real, got '{value}'"))),
            },
            Term::NumberBound(bound) => match value {
                Value::Number(number) => self.bounded(loc, term, bound, number.as_f64(), value),
                _ => Err(Failure::new(loc, format!("expected a number, got '{value}'"))),
            },
            Term::Negation(inner) => match self.term(loc, inner, value)? {
                Ok(()) => Err(Failure::new(
                    loc,
                    format!("expected an element not matching '{inner}', got '{value}'"),
                )),
                Err(_) => Ok(()),
            },
            Term::Macro(name) => self.macro_term(loc, name, value)?,
            Term::Conditional(conditional) => self.conditional(loc, conditional, value)?,
            Term::Object(object) => match value {
                Value::Object(map) => self.object(loc, object, map)?,
                _ => Err(Failure::new(loc, format!("expected an object, got '{value}'"))),
            },
            Term::Array(array) => match value {
                Value::Array(values) => self.array(loc, array, values)?,
                _ => Err(Failure::new(loc, format!("expected an array, got '{value}'"))),
            },
        })
    }

    fn bounded(
        &self,
        loc: &Location,
        term: &Term,
        bound: &Option<Bound>,
        actual: Option<f64>,
        value: &Value,
    ) -> Outcome {
        match bound {
            None => Ok(()),
            Some(bound) => {
                if actual.is_some_and(|actual| bound.holds(actual)) {
                    Ok(())
                } else {
                    Err(Failure::new(loc, format!("expected '{term}', got '{value}'")))
                }
            }
        }
    }

    fn macro_term(
        &mut self,
        loc: &Location,
        name: &str,
        value: &Value,
    ) -> Result<Outcome, MatchError> {
        Ok(match self.macros.lookup(name) {
            None => Err(Failure::new(loc, format!("macro '<{name}>' not found"))),
            Some(text) => match serde_json::from_str::<Value>(&text) {
                Err(_) => Err(Failure::new(
                    loc,
                    format!("macro '<{name}>' did not evaluate to valid JSON"),
                )),
                Ok(expected) => {
                    if &expected == value {
                        Ok(())
                    } else {
                        Err(Failure::new(
                            loc,
                            format!("expected '{expected}', got '{value}'"),
                        ))
                    }
                }
            },
        })
    }

    /// Evaluate every operand, then fold left to right. No short-circuiting:
    /// each operand is also evaluated for failure reporting.
    fn conditional(
        &mut self,
        loc: &Location,
        conditional: &Conditional,
        value: &Value,
    ) -> Result<Outcome, MatchError> {
        if conditional.terms.is_empty() {
            return Err(MatchError::InvalidPattern(
                "conditional with no operands".to_string(),
            ));
        }
        let mut evaluations = Vec::with_capacity(conditional.terms.len());
        for term in &conditional.terms {
            evaluations.push(self.term(loc, term, value)?.is_ok());
        }
        Ok(if fold(&evaluations, &conditional.ops) {
            Ok(())
        } else {
            Err(Failure::new(
                loc,
                format!("conditional elements '{conditional}' do not match the element '{value}'"),
            ))
        })
    }

    // --- Arrays ---

    fn array(
        &mut self,
        loc: &Location,
        array: &ArrayTerm,
        values: &[Value],
    ) -> Result<Outcome, MatchError> {
        let slots: Vec<ArraySlot<'_>> = array
            .entries
            .iter()
            .map(|entry| match entry {
                ArrayEntry::Term(term) => ArraySlot::Term(term),
                ArrayEntry::Capture(group) => ArraySlot::Capture {
                    group,
                    remaining: group.multiplier,
                },
            })
            .collect();
        self.traverse(loc, slots, values, 0, Progress::default())
    }

    fn traverse<'p>(
        &mut self,
        loc: &Location,
        slots: Vec<ArraySlot<'p>>,
        values: &[Value],
        index: usize,
        progress: Progress,
    ) -> Result<Outcome, MatchError> {
        self.enter()?;
        let result = self.traverse_inner(loc, slots, values, index, progress);
        self.exit();
        result
    }

    fn traverse_inner<'p>(
        &mut self,
        loc: &Location,
        mut slots: Vec<ArraySlot<'p>>,
        mut values: &[Value],
        mut index: usize,
        mut progress: Progress,
    ) -> Result<Outcome, MatchError> {
        loop {
            if values.is_empty() {
                // Conformance requires every leftover entry to be a
                // satisfied capture.
                let blocker = slots.iter().find(|slot| match slot {
                    ArraySlot::Term(_) => true,
                    ArraySlot::Capture { remaining, .. } => !remaining.satisfied(),
                });
                return Ok(match blocker {
                    None => Ok(()),
                    Some(slot) => Err(Failure::with_progress(
                        loc,
                        format!(
                            "exhausted JSON array, no JSON element left to match '{}'",
                            slot.rendering()
                        ),
                        progress,
                    )),
                });
            }
            if slots.is_empty() {
                return Ok(Err(Failure::with_progress(
                    loc,
                    format!(
                        "exhausted JSPEC array, no JSPEC term left to match '{}'",
                        values[0]
                    ),
                    progress,
                )));
            }
            match slots[0] {
                ArraySlot::Term(term) => {
                    match self.term(&loc.index(index), term, &values[0])? {
                        Ok(()) => {
                            slots.remove(0);
                            values = &values[1..];
                            index += 1;
                            progress = progress.term_consumed().element_consumed();
                        }
                        Err(mut failure) => {
                            failure.progress = progress;
                            return Ok(Err(failure));
                        }
                    }
                }
                ArraySlot::Capture { group, remaining } => {
                    if remaining.exhausted() {
                        slots.remove(0);
                        progress = progress.term_consumed();
                        continue;
                    }
                    let body = self.array_capture_body(loc, group, &values[0])?;
                    if remaining.satisfied() {
                        let mut best: Option<Failure> = None;
                        match body {
                            Ok(()) => {
                                // (a) absorb the element and close the group
                                let closed = slots[1..].to_vec();
                                match self.traverse(
                                    loc,
                                    closed,
                                    &values[1..],
                                    index + 1,
                                    progress.term_consumed().element_consumed(),
                                )? {
                                    Ok(()) => return Ok(Ok(())),
                                    Err(failure) => best = Some(failure),
                                }
                                // (b) absorb the element and keep the reduced group
                                let mut kept = slots.clone();
                                kept[0] = ArraySlot::Capture {
                                    group,
                                    remaining: remaining.reduced(),
                                };
                                match self.traverse(
                                    loc,
                                    kept,
                                    &values[1..],
                                    index + 1,
                                    progress.element_consumed(),
                                )? {
                                    Ok(()) => return Ok(Ok(())),
                                    Err(failure) => {
                                        best = Some(match best {
                                            None => failure,
                                            Some(current) => current.better(failure),
                                        });
                                    }
                                }
                            }
                            Err(mut body_failure) => {
                                body_failure.progress = progress;
                                best = Some(body_failure);
                            }
                        }
                        // (c) skip the group without consuming
                        let skipped = slots[1..].to_vec();
                        let skip_failure = match self.traverse(
                            loc,
                            skipped,
                            values,
                            index,
                            progress.term_consumed(),
                        )? {
                            Ok(()) => return Ok(Ok(())),
                            Err(failure) => failure,
                        };
                        let failure = match best {
                            None => skip_failure,
                            Some(current) => current.better(skip_failure),
                        };
                        return Ok(Err(failure));
                    }
                    // Unsatisfied group: it must absorb the element or the
                    // array cannot conform.
                    match body {
                        Ok(()) => {
                            slots[0] = ArraySlot::Capture {
                                group,
                                remaining: remaining.reduced(),
                            };
                            values = &values[1..];
                            index += 1;
                            progress = progress.element_consumed();
                        }
                        Err(_) => {
                            return Ok(Err(Failure::with_progress(
                                loc,
                                format!(
                                    "exhausted JSON array, no JSON element left to match '{}'",
                                    group.rendering()
                                ),
                                progress,
                            )));
                        }
                    }
                }
            }
        }
    }

    /// Evaluate a capture body against one element: every operand, folded.
    fn array_capture_body(
        &mut self,
        loc: &Location,
        group: &ArrayCapture,
        value: &Value,
    ) -> Result<Outcome, MatchError> {
        if group.terms.is_empty() {
            return Err(MatchError::InvalidPattern(
                "array capture with no operands".to_string(),
            ));
        }
        let mut evaluations = Vec::with_capacity(group.terms.len());
        for term in &group.terms {
            evaluations.push(self.term(loc, term, value)?.is_ok());
        }
        Ok(if fold(&evaluations, &group.ops) {
            Ok(())
        } else {
            Err(Failure::new(
                loc,
                format!("'{value}' failed to match '{}'", group.rendering()),
            ))
        })
    }

    // --- Objects ---

    fn object(
        &mut self,
        loc: &Location,
        object: &ObjectTerm,
        map: &Map<String, Value>,
    ) -> Result<Outcome, MatchError> {
        let slots: Vec<ObjectSlot<'_>> = object
            .entries
            .iter()
            .map(|entry| match entry {
                ObjectEntry::Pair(pair) => ObjectSlot::Pair(pair),
                ObjectEntry::Capture(group) => ObjectSlot::Capture(group),
            })
            .collect();
        let pairs: Vec<(&String, &Value)> = map.iter().collect();
        let state_slots: Vec<SlotState> = slots
            .iter()
            .enumerate()
            .map(|(index, slot)| SlotState {
                index,
                remaining: match slot {
                    ObjectSlot::Capture(group) => group.multiplier,
                    ObjectSlot::Pair(_) => Multiplier::ONE,
                },
            })
            .collect();
        let state_pairs: Vec<usize> = (0..pairs.len()).collect();
        let mut visited = HashMap::new();
        self.object_search(
            loc,
            &slots,
            &pairs,
            state_slots,
            state_pairs,
            Progress::default(),
            &mut visited,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn object_search(
        &mut self,
        loc: &Location,
        slots: &[ObjectSlot<'_>],
        pairs: &[(&String, &Value)],
        state_slots: Vec<SlotState>,
        state_pairs: Vec<usize>,
        progress: Progress,
        visited: &mut HashMap<SearchKey, Failure>,
    ) -> Result<Outcome, MatchError> {
        self.enter()?;
        let result =
            self.object_search_inner(loc, slots, pairs, state_slots, state_pairs, progress, visited);
        self.exit();
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn object_search_inner(
        &mut self,
        loc: &Location,
        slots: &[ObjectSlot<'_>],
        pairs: &[(&String, &Value)],
        state_slots: Vec<SlotState>,
        state_pairs: Vec<usize>,
        progress: Progress,
        visited: &mut HashMap<SearchKey, Failure>,
    ) -> Result<Outcome, MatchError> {
        // JSON exhausted: conformance requires every leftover entry to be a
        // satisfied capture.
        if state_pairs.is_empty() {
            let mut unmatched_keys = Vec::new();
            let mut unsatisfied = Vec::new();
            for state in &state_slots {
                match slots[state.index] {
                    ObjectSlot::Pair(pair) => unmatched_keys.push(pair.key.to_string()),
                    ObjectSlot::Capture(group) => {
                        if !state.remaining.satisfied() {
                            unsatisfied.push(format!(
                                "'{}' requires at least {} more pair(s)",
                                group.rendering(),
                                state.remaining.remaining_minimum()
                            ));
                        }
                    }
                }
            }
            if unmatched_keys.is_empty() && unsatisfied.is_empty() {
                return Ok(Ok(()));
            }
            let mut clauses = Vec::new();
            if !unmatched_keys.is_empty() {
                clauses.push(format!(
                    "the following JSPEC keys are unmatched: {}",
                    unmatched_keys.join(", ")
                ));
            }
            if !unsatisfied.is_empty() {
                clauses.push(format!(
                    "unsatisfied captures remain: {}",
                    unsatisfied.join(", ")
                ));
            }
            return Ok(Err(Failure::with_progress(
                loc,
                format!("exhausted JSON object, {}", clauses.join("; ")),
                progress,
            )));
        }

        // Pattern out of capacity: nothing left that could absorb a pair.
        let out_of_capacity = state_slots.iter().all(|state| {
            matches!(slots[state.index], ObjectSlot::Capture(_)) && state.remaining.exhausted()
        });
        if out_of_capacity {
            let listed: Vec<String> = state_pairs
                .iter()
                .map(|&index| render_json_pair(pairs[index]))
                .collect();
            return Ok(Err(Failure::with_progress(
                loc,
                format!(
                    "exhausted JSPEC object, the following JSON pairs are unmatched: {}",
                    listed.join(", ")
                ),
                progress,
            )));
        }

        // The same residual state is reached along every assignment order;
        // replay its failure instead of re-searching.
        let key: SearchKey = (state_slots.clone(), state_pairs.clone());
        if let Some(cached) = visited.get(&key) {
            return Ok(Err(cached.clone()));
        }

        let mut best: Option<Failure> = None;
        let mut tied = 0usize;
        let consider = |failure: Failure, best: &mut Option<Failure>, tied: &mut usize| {
            match best {
                None => {
                    *best = Some(failure);
                    *tied = 1;
                }
                Some(current) => {
                    if failure.progress > current.progress {
                        *best = Some(failure);
                        *tied = 1;
                    } else if failure.progress == current.progress && failure != *current {
                        // The same residual failure reached along another
                        // assignment order is not a competing diagnosis.
                        *tied += 1;
                    }
                }
            }
        };

        // Branch on which slot absorbs the first matchable element. Every
        // conforming assignment matches that element somewhere, so later
        // elements only need exploring when this one fits nothing (then it
        // is already evidence of failure and the walk continues for depth).
        for (pair_position, &pair_index) in state_pairs.iter().enumerate() {
            let element = pairs[pair_index];
            let mut absorbed = false;
            for (slot_position, state) in state_slots.iter().enumerate() {
                match slots[state.index] {
                    ObjectSlot::Pair(pattern_pair) => {
                        match self.object_pair(loc, pattern_pair, element)? {
                            Ok(()) => {
                                absorbed = true;
                                let mut rest_slots = state_slots.clone();
                                rest_slots.remove(slot_position);
                                let mut rest_pairs = state_pairs.clone();
                                rest_pairs.remove(pair_position);
                                match self.object_search(
                                    loc,
                                    slots,
                                    pairs,
                                    rest_slots,
                                    rest_pairs,
                                    progress.term_consumed().element_consumed(),
                                    visited,
                                )? {
                                    Ok(()) => return Ok(Ok(())),
                                    Err(failure) => consider(failure, &mut best, &mut tied),
                                }
                            }
                            Err(mut failure) => {
                                failure.progress = progress;
                                consider(failure, &mut best, &mut tied);
                            }
                        }
                    }
                    ObjectSlot::Capture(group) => {
                        if state.remaining.exhausted() {
                            continue;
                        }
                        match self.object_capture_body(loc, group, element)? {
                            Ok(()) => {
                                absorbed = true;
                                let mut rest_slots = state_slots.clone();
                                rest_slots[slot_position].remaining = state.remaining.reduced();
                                let mut rest_pairs = state_pairs.clone();
                                rest_pairs.remove(pair_position);
                                match self.object_search(
                                    loc,
                                    slots,
                                    pairs,
                                    rest_slots,
                                    rest_pairs,
                                    progress.element_consumed(),
                                    visited,
                                )? {
                                    Ok(()) => return Ok(Ok(())),
                                    Err(failure) => consider(failure, &mut best, &mut tied),
                                }
                            }
                            Err(mut failure) => {
                                failure.progress = progress;
                                consider(failure, &mut best, &mut tied);
                            }
                        }
                    }
                }
            }
            if absorbed {
                break;
            }
        }

        let failure = match best {
            // Unreachable past the capacity check, but stay total.
            None => Failure::with_progress(
                loc,
                format!(
                    "exhausted JSPEC object, the following JSON pairs are unmatched: {}",
                    state_pairs
                        .iter()
                        .map(|&index| render_json_pair(pairs[index]))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                progress,
            ),
            Some(top) => {
                if tied > 1 {
                    // Competing failures at equal depth: report the residue.
                    let listed: Vec<String> = state_pairs
                        .iter()
                        .map(|&index| render_json_pair(pairs[index]))
                        .collect();
                    Failure::with_progress(
                        loc,
                        format!(
                            "the following JSON object pairs are unmatched: {}",
                            listed.join(", ")
                        ),
                        top.progress,
                    )
                } else {
                    top
                }
            }
        };
        visited.insert(key, failure.clone());
        Ok(Err(failure))
    }

    /// Match one pattern pair against one JSON pair: key regex first, then
    /// the value term at the pair's location.
    fn object_pair(
        &mut self,
        loc: &Location,
        pair: &ObjectPair,
        (key, value): (&String, &Value),
    ) -> Result<Outcome, MatchError> {
        match &pair.key {
            Term::String(pattern) => {
                if !fullmatch(pattern, key) {
                    return Ok(Err(Failure::new(
                        loc,
                        format!("regex pattern '{pattern}' failed to match key '\"{key}\"'"),
                    )));
                }
            }
            Term::StringAny => {}
            other => {
                return Err(MatchError::InvalidPattern(format!(
                    "object pair key '{other}' is not a string term"
                )));
            }
        }
        self.term(&loc.key(key), &pair.value, value)
    }

    fn object_capture_body(
        &mut self,
        loc: &Location,
        group: &ObjectCapture,
        element: (&String, &Value),
    ) -> Result<Outcome, MatchError> {
        if group.pairs.is_empty() {
            return Err(MatchError::InvalidPattern(
                "object capture with no operands".to_string(),
            ));
        }
        let mut evaluations = Vec::with_capacity(group.pairs.len());
        for pair in &group.pairs {
            evaluations.push(self.object_pair(loc, pair, element)?.is_ok());
        }
        Ok(if fold(&evaluations, &group.ops) {
            Ok(())
        } else {
            Err(Failure::new(
                loc,
                format!(
                    "'{}' failed to match '{}'",
                    render_json_pair(element),
                    group.rendering()
                ),
            ))
        })
    }
}
