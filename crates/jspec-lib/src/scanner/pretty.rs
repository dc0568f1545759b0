//! Comment-preserving pretty-printer.
//!
//! Pretty-printing is a second scanner mode: the document is scanned once,
//! recording each comment against the serial index of the whitespace gap it
//! occupies; the canonical token stream of the parsed tree (which has no
//! comments) is then re-emitted with the comments restored at the gaps of the
//! same index, injecting newlines and indentation around non-adjacent
//! brackets and container commas.
//!
//! Output is idempotent: pretty-printing already-pretty text reproduces it.

use std::collections::HashMap;

use crate::ast::{ArrayEntry, Bound, ObjectEntry, ObjectPair, Term};

use super::error::PrettyError;
use super::scan_recording;

/// Default indentation for the pretty-printer.
pub const DEFAULT_INDENT: &str = "\t";

/// Re-format a JSPEC document, preserving comments.
///
/// `indent` may contain only spaces and tabs.
pub fn pretty(doc: &str, indent: &str) -> Result<String, PrettyError> {
    if !indent.chars().all(|ch| ch == ' ' || ch == '\t') {
        return Err(PrettyError::Indent(indent.to_string()));
    }
    let (pattern, comments) = scan_recording(doc)?;
    let mut tokens = Vec::new();
    push_term(&pattern.root, &mut tokens);

    let mut by_gap: HashMap<usize, Vec<String>> = HashMap::new();
    for (gap, text) in comments {
        by_gap.entry(gap).or_default().push(text);
    }
    Ok(Emitter::new(indent, by_gap).emit(&tokens))
}

/// One canonical token. The emitter decides spacing and line breaks from the
/// token kind alone.
#[derive(Debug)]
enum Tok {
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    Comma,
    Colon,
    Bang,
    /// Logical or inequality operator, spaced on both sides.
    Op(&'static str),
    /// Literal, keyword, string, macro, ellipsis or multiplier text.
    Atom(String),
}

fn push_term(term: &Term, out: &mut Vec<Tok>) {
    match term {
        Term::Object(object) => {
            out.push(Tok::OpenBrace);
            for (i, entry) in object.entries.iter().enumerate() {
                if i > 0 {
                    out.push(Tok::Comma);
                }
                match entry {
                    ObjectEntry::Pair(pair) => push_pair(pair, out),
                    ObjectEntry::Capture(capture) => {
                        if capture.is_ellipsis() {
                            out.push(Tok::Atom(capture.rendering().to_string()));
                        } else {
                            out.push(Tok::OpenParen);
                            for (i, pair) in capture.pairs.iter().enumerate() {
                                if i > 0 {
                                    out.push(Tok::Op(capture.ops[i - 1].symbol()));
                                }
                                push_pair(pair, out);
                            }
                            out.push(Tok::CloseParen);
                            let suffix = capture.multiplier.suffix();
                            if !suffix.is_empty() {
                                out.push(Tok::Atom(suffix));
                            }
                        }
                    }
                }
            }
            out.push(Tok::CloseBrace);
        }
        Term::Array(array) => {
            out.push(Tok::OpenBracket);
            for (i, entry) in array.entries.iter().enumerate() {
                if i > 0 {
                    out.push(Tok::Comma);
                }
                match entry {
                    ArrayEntry::Term(term) => push_term(term, out),
                    ArrayEntry::Capture(capture) => {
                        if capture.is_ellipsis() {
                            out.push(Tok::Atom(capture.rendering().to_string()));
                        } else {
                            out.push(Tok::OpenParen);
                            for (i, term) in capture.terms.iter().enumerate() {
                                if i > 0 {
                                    out.push(Tok::Op(capture.ops[i - 1].symbol()));
                                }
                                push_term(term, out);
                            }
                            out.push(Tok::CloseParen);
                            let suffix = capture.multiplier.suffix();
                            if !suffix.is_empty() {
                                out.push(Tok::Atom(suffix));
                            }
                        }
                    }
                }
            }
            out.push(Tok::CloseBracket);
        }
        Term::Conditional(conditional) => {
            out.push(Tok::OpenParen);
            for (i, term) in conditional.terms.iter().enumerate() {
                if i > 0 {
                    out.push(Tok::Op(conditional.ops[i - 1].symbol()));
                }
                push_term(term, out);
            }
            out.push(Tok::CloseParen);
        }
        Term::Negation(inner) => {
            out.push(Tok::Bang);
            push_term(inner, out);
        }
        Term::IntBound(bound) => push_bounded("int", bound, out),
        Term::RealBound(bound) => push_bounded("real", bound, out),
        Term::NumberBound(bound) => push_bounded("number", bound, out),
        atom => out.push(Tok::Atom(atom.to_string())),
    }
}

fn push_pair(pair: &ObjectPair, out: &mut Vec<Tok>) {
    out.push(Tok::Atom(pair.key.to_string()));
    out.push(Tok::Colon);
    push_term(&pair.value, out);
}

fn push_bounded(keyword: &str, bound: &Option<Bound>, out: &mut Vec<Tok>) {
    out.push(Tok::Atom(keyword.to_string()));
    if let Some(bound) = bound {
        out.push(Tok::Op(bound.op.symbol()));
        out.push(Tok::Atom(bound.value.to_string()));
    }
}

struct Emitter<'a> {
    indent: &'a str,
    comments: HashMap<usize, Vec<String>>,
    out: String,
    depth: usize,
    /// Set after a line comment; forces a break before the next token.
    pending_newline: bool,
}

impl<'a> Emitter<'a> {
    fn new(indent: &'a str, comments: HashMap<usize, Vec<String>>) -> Self {
        Self {
            indent,
            comments,
            out: String::new(),
            depth: 0,
            pending_newline: false,
        }
    }

    fn emit(mut self, tokens: &[Tok]) -> String {
        for (i, tok) in tokens.iter().enumerate() {
            self.flush_comments(i);
            match tok {
                Tok::CloseBrace | Tok::CloseBracket => {
                    let compact = i > 0
                        && matches!(
                            (&tokens[i - 1], tok),
                            (Tok::OpenBrace, Tok::CloseBrace)
                                | (Tok::OpenBracket, Tok::CloseBracket)
                        );
                    if !compact {
                        self.depth -= 1;
                        self.newline();
                    } else if self.pending_newline {
                        self.newline();
                    }
                    self.out
                        .push(if matches!(tok, Tok::CloseBrace) { '}' } else { ']' });
                }
                _ => {
                    if self.pending_newline {
                        self.newline();
                    }
                    match tok {
                        Tok::OpenBrace | Tok::OpenBracket => {
                            let open = if matches!(tok, Tok::OpenBrace) { '{' } else { '[' };
                            self.out.push(open);
                            let compact = matches!(
                                (tok, tokens.get(i + 1)),
                                (Tok::OpenBrace, Some(Tok::CloseBrace))
                                    | (Tok::OpenBracket, Some(Tok::CloseBracket))
                            );
                            if !compact {
                                self.depth += 1;
                                self.newline();
                            }
                        }
                        Tok::Comma => {
                            self.out.push(',');
                            self.newline();
                        }
                        Tok::Colon => self.out.push_str(": "),
                        Tok::Op(symbol) => {
                            self.out.push(' ');
                            self.out.push_str(symbol);
                            self.out.push(' ');
                        }
                        Tok::Bang => self.out.push('!'),
                        Tok::OpenParen => self.out.push('('),
                        Tok::CloseParen => self.out.push(')'),
                        Tok::Atom(text) => self.out.push_str(text),
                        Tok::CloseBrace | Tok::CloseBracket => unreachable!("handled above"),
                    }
                }
            }
        }
        self.flush_comments(tokens.len());
        while self.out.ends_with(' ') || self.out.ends_with('\t') {
            self.out.pop();
        }
        self.out
    }

    /// Re-insert the comments recorded for whitespace gap `gap`.
    fn flush_comments(&mut self, gap: usize) {
        let Some(list) = self.comments.remove(&gap) else {
            return;
        };
        for comment in list {
            if !self.out.is_empty() && !self.out.ends_with([' ', '\t', '\n']) {
                self.out.push(' ');
            }
            let is_line = comment.starts_with("//");
            self.out.push_str(&comment);
            if is_line {
                self.pending_newline = true;
            } else {
                self.out.push(' ');
            }
        }
    }

    fn newline(&mut self) {
        while self.out.ends_with(' ') || self.out.ends_with('\t') {
            self.out.pop();
        }
        self.out.push('\n');
        for _ in 0..self.depth {
            self.out.push_str(self.indent);
        }
        self.pending_newline = false;
    }
}
