//! Scan error type and rendering utilities.

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use serde::Serialize;

/// A JSPEC document failed to scan.
///
/// Carries the unformatted message plus the line, column and byte offset of
/// the first offending character. The scanner aborts at the first error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}: line {line} column {column} (char {offset})")]
pub struct ScanError {
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl ScanError {
    /// Build an error at `offset` within `doc`, deriving line and column.
    pub fn new(message: impl Into<String>, doc: &str, offset: usize) -> Self {
        let offset = offset.min(doc.len());
        let line = doc[..offset].matches('\n').count() + 1;
        let column = match doc[..offset].rfind('\n') {
            Some(newline) => offset - newline,
            None => offset + 1,
        };
        Self {
            message: message.into(),
            line,
            column,
            offset,
        }
    }

    /// Render the error as an annotated snippet of the source document.
    pub fn render(&self, doc: &str, path: Option<&str>) -> String {
        let renderer = Renderer::plain();

        // Zero-width spans get extended to one character for visibility.
        let start = self.offset.min(doc.len());
        let end = (start + 1).min(doc.len());

        let mut snippet = Snippet::source(doc)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(start..end).label(&self.message));
        if let Some(path) = path {
            snippet = snippet.path(path);
        }

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&self.message).element(snippet)];
        renderer.render(&report).to_string()
    }
}

/// A pretty-print request failed: either the document did not scan, or the
/// indent string is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrettyError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Indent strings may contain only spaces and tabs.
    #[error("invalid indent {0:?}: only spaces and tabs are allowed")]
    Indent(String),
}
