//! DSFR CSS reader
//!
//! This crate reads the subset of CSS the design system ships:
//! - Tokenization with source spans (comments skipped, `url()` kept whole)
//! - Style rules, at-rules and nested blocks
//! - Declarations with whitespace-normalized values and `!important`
//! - Error recovery: problems become diagnostics, parsing never fails

mod ast;
mod error;
mod lexer;
mod parser;

pub use ast::*;
pub use error::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{parse_stylesheet, Parsed};
