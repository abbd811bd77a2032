//! Diagnostics produced while reading CSS.

use std::fmt;

use crate::Span;

/// Something the reader skipped. Never fatal: the stylesheet is still
/// returned, minus the unreadable part.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
    /// Source text (or token name) the reader stumbled on.
    pub found: Option<String>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            found: None,
        }
    }

    pub fn with_found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }

    /// Input ended where `expected` was required.
    pub fn unexpected_eof(span: Span, expected: &str) -> Self {
        Self::new(format!("unexpected end of input, expected {}", expected), span)
    }

    /// `found` sits where `expected` was required.
    pub fn unexpected_token(span: Span, expected: &str, found: &str) -> Self {
        Self::new(format!("expected {}", expected), span).with_found(found)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.span.line, self.span.column, self.message)?;
        if let Some(found) = &self.found {
            write!(f, ", found `{}`", found)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
