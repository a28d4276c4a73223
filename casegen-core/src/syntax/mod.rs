//! Syntax layer: the declaration tree and the Swift scanner that builds it.
//!
//! The scanner is deliberately shallow. It recovers declaration shape
//! (identifiers, modifiers, generic parameter lists, associated values) and
//! the nesting of scopes, nothing more. Types and expressions are kept as
//! verbatim source text.

pub mod lexer;
pub mod parser;
pub mod tree;

use thiserror::Error;

pub use parser::parse_source;
pub use tree::{
    AssociatedValue, CaseElement, DeclNode, DeclTree, GenericParamDecl, NodeId, NodeKind,
    TypeDecl,
};

/// Failure to scan a Swift source unit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (line {line}, column {column})")]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}
