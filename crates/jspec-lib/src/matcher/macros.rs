//! Pluggable macro resolution.
//!
//! A `<NAME>` term is resolved at match time through a [`MacroResolver`];
//! the resolved text is decoded as JSON and compared for structural
//! equality. The matcher never touches ambient state directly.

use std::collections::HashMap;

/// Resolve a macro name to its raw JSON text, if defined.
pub trait MacroResolver {
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Resolves macros from process environment variables.
pub struct EnvResolver;

impl MacroResolver for EnvResolver {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed table of macros; convenient for tests and embedding.
impl MacroResolver for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
