use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Errors raised while scanning and parsing source text (spec §4.2, §7).
/// Every variant carries the byte offset of the cursor at the point of
/// failure so the driver can report it verbatim.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected character '{found}' at byte {at}")]
    #[diagnostic(code(P001))]
    UnexpectedCharacter {
        found: char,
        at: usize,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("unexpected end of input, expected {expected}")]
    #[diagnostic(code(P002))]
    UnexpectedEof { expected: String, at: usize },

    #[error("expected '{expected}' at byte {at}")]
    #[diagnostic(code(P003))]
    MissingToken {
        expected: String,
        at: usize,
        #[label("expected here")]
        span: SourceSpan,
    },

    #[error("unbound name '{name}' at byte {at}")]
    #[diagnostic(code(P004))]
    UnboundName {
        name: String,
        at: usize,
        #[label("not in scope")]
        span: SourceSpan,
    },

    #[error("invalid de Bruijn index literal '{text}' at byte {at}")]
    #[diagnostic(code(P005))]
    InvalidIndex { text: String, at: usize },
}

impl ParseError {
    /// The byte offset the diagnostic anchors to, for the driver's
    /// single-line error report (spec §6).
    pub fn cursor(&self) -> usize {
        match self {
            ParseError::UnexpectedCharacter { at, .. }
            | ParseError::UnexpectedEof { at, .. }
            | ParseError::MissingToken { at, .. }
            | ParseError::UnboundName { at, .. }
            | ParseError::InvalidIndex { at, .. } => *at,
        }
    }
}
