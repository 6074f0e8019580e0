use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;

/// Aggregates every stage's error type behind one transparent enum, the way
/// `lang/driver/src/result.rs` aggregates `parser`/`lowering`/`elaborator`
/// errors in the teacher.
#[derive(Error, Diagnostic, Debug, Clone)]
#[error(transparent)]
#[diagnostic(transparent)]
pub enum Error {
    Parser(#[from] dtlc_parser::ParseError),
    Eval(#[from] dtlc_normalizer::EvalError),
    Type(#[from] dtlc_typechecker::TypeError),
    Driver(#[from] DriverError),
}

#[derive(Error, Diagnostic, Debug, Clone)]
pub enum DriverError {
    #[error("io error: {0}")]
    #[diagnostic(code(D001))]
    Io(#[from] Arc<std::io::Error>),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Driver(DriverError::Io(Arc::new(e)))
    }
}
