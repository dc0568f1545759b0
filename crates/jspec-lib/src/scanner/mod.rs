//! Scanner for JSPEC documents.
//!
//! A position-driven recursive-descent scanner over the byte-indexed
//! document. Fixed tokens are matched directly; strings, numbers, macros and
//! capture multipliers are extracted by anchored regex searches at the
//! current offset. Whitespace and comments are free between tokens; comments
//! are recorded against the serial index of the whitespace gap they occupy so
//! the pretty-printer can put them back.
//!
//! The scanner aborts at the first error, reporting the precise byte offset.

mod error;
mod pretty;

#[cfg(test)]
mod pretty_tests;

use std::ops::Range;
use std::sync::LazyLock;

use indexmap::IndexSet;
use regex_automata::meta::Regex;
use regex_automata::{Anchored, Input};

use crate::ast::{
    ArrayCapture, ArrayEntry, ArrayTerm, Bound, Conditional, Ineq, LogicalOp, Multiplier,
    ObjectCapture, ObjectEntry, ObjectPair, ObjectTerm, Pattern, Term,
};

pub use error::{PrettyError, ScanError};
pub use pretty::{DEFAULT_INDENT, pretty};

/// Nesting limit for the recursive descent; exceeding it is a scan error
/// rather than a stack overflow.
const MAX_DEPTH: u32 = 512;

/// A JSPEC string: the shortest run of non-newline characters in quotes.
static STRING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"\n]*""#).expect("string token pattern"));

/// A JSPEC number: signed digit string with no leading zeroes, optional
/// fraction and exponent.
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?")
        .expect("number token pattern")
});

/// A macro: the shortest run of non-newline characters in angle brackets.
static MACRO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>\n]*>").expect("macro token pattern"));

/// A capture multiplier: `x` then a positive decimal or `?`, optionally a
/// range. Must be adjacent to the closing parenthesis of its group.
static MULTIPLIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"x(?:[1-9][0-9]*|\?)(?:-(?:[1-9][0-9]*|\?))?").expect("multiplier token pattern")
});

fn find_at(re: &Regex, doc: &str, pos: usize) -> Option<Range<usize>> {
    let input = Input::new(doc).range(pos..).anchored(Anchored::Yes);
    re.find(input).map(|m| m.range())
}

/// Scan a JSPEC document into a [`Pattern`].
pub fn scan(doc: &str) -> Result<Pattern, ScanError> {
    Scanner::new(doc).scan_document().map(|(pattern, _)| pattern)
}

/// Scan, additionally returning the comments keyed by whitespace-gap serial
/// index. Used by the pretty-printer.
pub(crate) fn scan_recording(doc: &str) -> Result<(Pattern, Vec<(usize, String)>), ScanError> {
    Scanner::new(doc).scan_document()
}

struct Scanner<'doc> {
    doc: &'doc str,
    pos: usize,
    /// Count of tokens consumed so far; doubles as the serial index of the
    /// whitespace gap currently open.
    tokens: usize,
    /// `(gap index, comment text)` in document order.
    comments: Vec<(usize, String)>,
    depth: u32,
}

impl<'doc> Scanner<'doc> {
    fn new(doc: &'doc str) -> Self {
        Self {
            doc,
            pos: 0,
            tokens: 0,
            comments: Vec::new(),
            depth: 0,
        }
    }

    fn scan_document(mut self) -> Result<(Pattern, Vec<(usize, String)>), ScanError> {
        self.skip_trivia()?;
        let root = self.scan_term("Expecting JSPEC term")?;
        self.skip_trivia()?;
        if self.pos != self.doc.len() {
            return Err(self.error("Extra data", self.pos));
        }
        Ok((Pattern::new(root), self.comments))
    }

    fn error(&self, message: impl Into<String>, pos: usize) -> ScanError {
        ScanError::new(message, self.doc, pos)
    }

    fn peek(&self) -> Option<u8> {
        self.doc.as_bytes().get(self.pos).copied()
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.doc[self.pos..].starts_with(prefix)
    }

    /// Consume `len` bytes as one token, closing the current whitespace gap.
    fn bump_token(&mut self, len: usize) {
        self.pos += len;
        self.tokens += 1;
    }

    /// Skip whitespace and comments. Comments are recorded against the
    /// current gap index. An unterminated block comment is a scan error.
    fn skip_trivia(&mut self) -> Result<(), ScanError> {
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\n' | b'\r') => self.pos += 1,
                Some(b'/') => {
                    let start = self.pos;
                    match self.doc.as_bytes().get(self.pos + 1) {
                        Some(b'/') => {
                            let end = self.doc[self.pos..]
                                .find('\n')
                                .map_or(self.doc.len(), |i| self.pos + i);
                            let text = self.doc[start..end].trim_end_matches('\r');
                            self.comments.push((self.tokens, text.to_string()));
                            self.pos = end;
                        }
                        Some(b'*') => match self.doc[self.pos + 2..].find("*/") {
                            Some(i) => {
                                let end = self.pos + 2 + i + 2;
                                self.comments.push((self.tokens, self.doc[start..end].to_string()));
                                self.pos = end;
                            }
                            None => return Err(self.error("Unterminated comment", start)),
                        },
                        // A lone '/' is not trivia; the caller reports it.
                        _ => return Ok(()),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn scan_term(&mut self, expecting: &str) -> Result<Term, ScanError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("JSPEC document is nested too deeply", self.pos));
        }
        self.depth += 1;
        let term = self.scan_term_inner(expecting);
        self.depth -= 1;
        term
    }

    fn scan_term_inner(&mut self, expecting: &str) -> Result<Term, ScanError> {
        let Some(ch) = self.peek() else {
            return Err(self.error(expecting, self.pos));
        };
        match ch {
            b'{' => self.scan_object(),
            b'[' => self.scan_array(),
            b'"' => self.scan_string().map(Term::String),
            b'-' | b'0'..=b'9' => self.scan_number(),
            b'!' => self.scan_negation(),
            b'(' => self.scan_conditional(),
            b'<' => self.scan_macro(),
            b'*' => {
                self.bump_token(1);
                Ok(Term::Wildcard)
            }
            b't' if self.starts_with("true") => {
                self.bump_token(4);
                Ok(Term::Bool(true))
            }
            b'f' if self.starts_with("false") => {
                self.bump_token(5);
                Ok(Term::Bool(false))
            }
            b'n' if self.starts_with("number") => {
                self.bump_token(6);
                Ok(Term::NumberBound(self.scan_bound()?))
            }
            b'n' if self.starts_with("null") => {
                self.bump_token(4);
                Ok(Term::Null)
            }
            b'o' if self.starts_with("object") => {
                self.bump_token(6);
                Ok(Term::ObjectAny)
            }
            b'a' if self.starts_with("array") => {
                self.bump_token(5);
                Ok(Term::ArrayAny)
            }
            b's' if self.starts_with("string") => {
                self.bump_token(6);
                Ok(Term::StringAny)
            }
            b'b' if self.starts_with("bool") => {
                self.bump_token(4);
                Ok(Term::BoolAny)
            }
            b'i' if self.starts_with("int") => {
                self.bump_token(3);
                Ok(Term::IntBound(self.scan_bound()?))
            }
            b'r' if self.starts_with("real") => {
                self.bump_token(4);
                Ok(Term::RealBound(self.scan_bound()?))
            }
            _ => Err(self.error(expecting, self.pos)),
        }
    }

    /// Regex source of a JSPEC string, quotes stripped.
    fn scan_string(&mut self) -> Result<String, ScanError> {
        let Some(range) = find_at(&STRING_RE, self.doc, self.pos) else {
            return Err(self.error("Unterminated string", self.pos));
        };
        let text = self.doc[range.start + 1..range.end - 1].to_string();
        self.bump_token(range.len());
        Ok(text)
    }

    fn scan_number(&mut self) -> Result<Term, ScanError> {
        let start = self.pos;
        let Some(range) = find_at(&NUMBER_RE, self.doc, self.pos) else {
            return Err(self.error("Invalid number", self.pos));
        };
        let text = &self.doc[range.clone()];
        let is_real = text.contains(['.', 'e', 'E']);
        self.bump_token(range.len());
        if is_real {
            let value: f64 = text
                .parse()
                .map_err(|_| self.error("Invalid number", start))?;
            if !value.is_finite() {
                return Err(self.error("Invalid number", start));
            }
            Ok(Term::Real(value))
        } else {
            match text.parse::<i64>() {
                Ok(value) => Ok(Term::Int(value)),
                // Out of integer range: fall back to a real.
                Err(_) => {
                    let value: f64 = text
                        .parse()
                        .map_err(|_| self.error("Invalid number", start))?;
                    Ok(Term::Real(value))
                }
            }
        }
    }

    fn scan_negation(&mut self) -> Result<Term, ScanError> {
        self.bump_token(1);
        self.skip_trivia()?;
        let inner = self.scan_term("Expecting JSPEC term in negation")?;
        Ok(Term::Negation(Box::new(inner)))
    }

    fn scan_macro(&mut self) -> Result<Term, ScanError> {
        let Some(range) = find_at(&MACRO_RE, self.doc, self.pos) else {
            return Err(self.error("Unterminated macro", self.pos));
        };
        let name = self.doc[range.start + 1..range.end - 1].to_string();
        self.bump_token(range.len());
        Ok(Term::Macro(name))
    }

    /// Optional inequality after `int`, `real` or `number`.
    fn scan_bound(&mut self) -> Result<Option<Bound>, ScanError> {
        self.skip_trivia()?;
        let bytes = self.doc.as_bytes();
        let op = match self.peek() {
            Some(b'<') => {
                if bytes.get(self.pos + 1) == Some(&b'=') {
                    self.bump_token(2);
                    Ineq::LessThanOrEqual
                } else {
                    self.bump_token(1);
                    Ineq::LessThan
                }
            }
            Some(b'>') => {
                if bytes.get(self.pos + 1) == Some(&b'=') {
                    self.bump_token(2);
                    Ineq::MoreThanOrEqual
                } else {
                    self.bump_token(1);
                    Ineq::MoreThan
                }
            }
            _ => return Ok(None),
        };
        self.skip_trivia()?;
        let start = self.pos;
        let Some(range) = find_at(&NUMBER_RE, self.doc, self.pos) else {
            return Err(self.error("Invalid number", self.pos));
        };
        let text = &self.doc[range.clone()];
        let is_real = text.contains(['.', 'e', 'E']);
        self.bump_token(range.len());
        let value = if is_real {
            let real: f64 = text
                .parse()
                .map_err(|_| self.error("Invalid number", start))?;
            serde_json::Number::from_f64(real).ok_or_else(|| self.error("Invalid number", start))?
        } else {
            match text.parse::<i64>() {
                Ok(int) => serde_json::Number::from(int),
                Err(_) => {
                    let real: f64 = text
                        .parse()
                        .map_err(|_| self.error("Invalid number", start))?;
                    serde_json::Number::from_f64(real)
                        .ok_or_else(|| self.error("Invalid number", start))?
                }
            }
        };
        Ok(Some(Bound::new(op, value)))
    }

    fn scan_conditional(&mut self) -> Result<Term, ScanError> {
        self.bump_token(1);
        self.skip_trivia()?;
        if self.peek() == Some(b')') {
            return Err(self.error("Empty conditional", self.pos));
        }
        let mut terms = Vec::new();
        let mut ops = Vec::new();
        loop {
            terms.push(self.scan_term("Expecting JSPEC term in conditional")?);
            self.skip_trivia()?;
            match self.scan_logical_op() {
                Some(op) => {
                    ops.push(op);
                    self.skip_trivia()?;
                }
                None => break,
            }
        }
        if self.peek() != Some(b')') {
            return Err(self.error("Expecting conditional termination ')'", self.pos));
        }
        self.bump_token(1);
        Ok(Term::Conditional(Conditional::new(terms, ops)))
    }

    fn scan_logical_op(&mut self) -> Option<LogicalOp> {
        let op = match self.peek() {
            Some(b'&') => LogicalOp::And,
            Some(b'|') => LogicalOp::Or,
            Some(b'^') => LogicalOp::Xor,
            _ => return None,
        };
        self.bump_token(1);
        Some(op)
    }

    /// Capture multiplier, adjacent to the group's closing parenthesis.
    /// Absent means `(1, 1)`.
    fn scan_multiplier(&mut self, kind: &str) -> Result<Multiplier, ScanError> {
        let Some(range) = find_at(&MULTIPLIER_RE, self.doc, self.pos) else {
            return Ok(Multiplier::ONE);
        };
        let text = &self.doc[range.start + 1..range.end];
        let (min_text, max_text) = match text.split_once('-') {
            Some((min, max)) => (min, Some(max)),
            None => (text, None),
        };
        let parse = |digits: &str| -> Result<u64, ScanError> {
            digits
                .parse()
                .map_err(|_| self.error(format!("Invalid {kind} multiplier"), range.start))
        };
        let minimum = match min_text {
            "?" => None,
            digits => Some(parse(digits)?),
        };
        let maximum = match max_text {
            None => minimum,
            Some("?") => None,
            Some(digits) => Some(parse(digits)?),
        };
        let multiplier = Multiplier::new(minimum, maximum);
        if !multiplier.is_valid() {
            return Err(self.error(
                format!("Minimum for {kind} multiplier is larger than the maximum"),
                range.end,
            ));
        }
        if multiplier == Multiplier::ONE {
            // An explicit x1 normalises away in canonical form; it must not
            // close a whitespace gap or comments after it would shift.
            self.pos += range.len();
        } else {
            self.bump_token(range.len());
        }
        Ok(multiplier)
    }

    fn scan_ellipsis(&mut self, message: &str) -> Result<(), ScanError> {
        if self.starts_with("...") {
            self.bump_token(3);
            Ok(())
        } else {
            Err(self.error(message, self.pos))
        }
    }

    /// Key of an object pair: a string term or the `string` placeholder.
    fn scan_pair_key(&mut self, context: &str) -> Result<Term, ScanError> {
        match self.peek() {
            Some(b's') if self.starts_with("string") => {
                self.bump_token(6);
                Ok(Term::StringAny)
            }
            Some(b'"') => self.scan_string().map(Term::String),
            _ => Err(self.error(
                format!("Expecting property name enclosed in double quotes as key in {context}"),
                self.pos,
            )),
        }
    }

    fn scan_object(&mut self) -> Result<Term, ScanError> {
        self.bump_token(1);
        self.skip_trivia()?;
        let mut entries: IndexSet<ObjectEntry> = IndexSet::new();
        match self.peek() {
            Some(b'}') => {
                self.bump_token(1);
                return Ok(Term::Object(ObjectTerm::new(entries)));
            }
            None => return Err(self.error("Unterminated object", self.pos)),
            _ => {}
        }
        loop {
            let entry = match self.peek() {
                Some(b'.') => {
                    self.scan_ellipsis("Expecting object ellipsis with 3 dots '...'")?;
                    ObjectEntry::Capture(ObjectCapture::ellipsis())
                }
                Some(b'(') => ObjectEntry::Capture(self.scan_object_capture()?),
                _ => ObjectEntry::Pair(self.scan_object_pair(&entries)?),
            };
            // Pair keys are deduplicated in scan_object_pair before the pair
            // exists; the set membership check covers capture groups.
            if let ObjectEntry::Capture(capture) = &entry
                && entries.contains(&entry)
            {
                let message = if capture.is_ellipsis() {
                    "Redundant object ellipsis"
                } else {
                    "Redundant object pair capture"
                };
                return Err(self.error(message, self.pos));
            }
            entries.insert(entry);
            self.skip_trivia()?;
            match self.peek() {
                Some(b'}') => {
                    self.bump_token(1);
                    return Ok(Term::Object(ObjectTerm::new(entries)));
                }
                None => return Err(self.error("Unterminated object", self.pos)),
                Some(b',') => {
                    self.bump_token(1);
                    self.skip_trivia()?;
                }
                _ => return Err(self.error("Expecting object pair delimiter ','", self.pos)),
            }
        }
    }

    fn scan_object_pair(&mut self, entries: &IndexSet<ObjectEntry>) -> Result<ObjectPair, ScanError> {
        let key = self.scan_pair_key("object pair")?;
        if entries
            .iter()
            .any(|entry| matches!(entry, ObjectEntry::Pair(pair) if pair.key == key))
        {
            return Err(self.error("Repeated object key for pair in object", self.pos));
        }
        self.skip_trivia()?;
        if self.peek() != Some(b':') {
            return Err(self.error("Expecting key-value delimiter ':' in object", self.pos));
        }
        self.bump_token(1);
        self.skip_trivia()?;
        let value = self.scan_term("Expecting JSPEC term as value in object pair")?;
        Ok(ObjectPair::new(key, value))
    }

    fn scan_object_capture(&mut self) -> Result<ObjectCapture, ScanError> {
        self.bump_token(1);
        self.skip_trivia()?;
        if self.peek() == Some(b')') {
            return Err(self.error("Empty capture", self.pos));
        }
        let mut pairs = Vec::new();
        let mut ops = Vec::new();
        loop {
            let key = self.scan_pair_key("object capture pair")?;
            self.skip_trivia()?;
            if self.peek() != Some(b':') {
                return Err(self.error("Expecting key-value delimiter ':' in object capture", self.pos));
            }
            self.bump_token(1);
            self.skip_trivia()?;
            let value = self.scan_term("Expecting JSPEC term as value in object capture pair")?;
            pairs.push(ObjectPair::new(key, value));
            self.skip_trivia()?;
            match self.scan_logical_op() {
                Some(op) => {
                    ops.push(op);
                    self.skip_trivia()?;
                }
                None => break,
            }
        }
        if self.peek() != Some(b')') {
            return Err(self.error("Expecting object capture termination ')'", self.pos));
        }
        self.bump_token(1);
        let multiplier = self.scan_multiplier("object capture")?;
        Ok(ObjectCapture::new(pairs, ops, multiplier))
    }

    fn scan_array(&mut self) -> Result<Term, ScanError> {
        self.bump_token(1);
        self.skip_trivia()?;
        let mut entries: Vec<ArrayEntry> = Vec::new();
        match self.peek() {
            Some(b']') => {
                self.bump_token(1);
                return Ok(Term::Array(ArrayTerm::new(entries)));
            }
            None => return Err(self.error("Unterminated array", self.pos)),
            _ => {}
        }
        loop {
            let entry = match self.peek() {
                Some(b'.') => {
                    self.scan_ellipsis("Expecting array ellipsis with 3 dots '...'")?;
                    ArrayEntry::Capture(ArrayCapture::ellipsis())
                }
                Some(b'(') => ArrayEntry::Capture(self.scan_array_capture()?),
                _ => ArrayEntry::Term(self.scan_term("Expecting JSPEC term in array")?),
            };
            if let (ArrayEntry::Capture(capture), Some(ArrayEntry::Capture(last))) =
                (&entry, entries.last())
                && capture == last
            {
                return Err(self.error("Redundant array capture", self.pos));
            }
            entries.push(entry);
            self.skip_trivia()?;
            match self.peek() {
                Some(b']') => {
                    self.bump_token(1);
                    return Ok(Term::Array(ArrayTerm::new(entries)));
                }
                None => return Err(self.error("Unterminated array", self.pos)),
                Some(b',') => {
                    self.bump_token(1);
                    self.skip_trivia()?;
                }
                _ => return Err(self.error("Expecting array element delimiter ','", self.pos)),
            }
        }
    }

    fn scan_array_capture(&mut self) -> Result<ArrayCapture, ScanError> {
        self.bump_token(1);
        self.skip_trivia()?;
        if self.peek() == Some(b')') {
            return Err(self.error("Empty array capture", self.pos));
        }
        let mut terms = Vec::new();
        let mut ops = Vec::new();
        loop {
            terms.push(self.scan_term("Expecting JSPEC term in array capture")?);
            self.skip_trivia()?;
            match self.scan_logical_op() {
                Some(op) => {
                    ops.push(op);
                    self.skip_trivia()?;
                }
                None => break,
            }
        }
        if self.peek() != Some(b')') {
            return Err(self.error("Expecting array capture termination ')'", self.pos));
        }
        self.bump_token(1);
        let multiplier = self.scan_multiplier("array capture")?;
        Ok(ArrayCapture::new(terms, ops, multiplier))
    }
}
