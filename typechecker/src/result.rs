use dtlc_normalizer::EvalError;
use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by type inference (spec §4.4, §7). Evaluation errors
/// surfaced while reducing a term during checking are folded in via `#[from]`
/// rather than re-wrapped, since they are just as fatal to the checker as to
/// the evaluator.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("expected a type, found a term whose type does not evaluate to Type: {found}")]
    #[diagnostic(code(T001))]
    NotAType { found: String },

    #[error("applied a non-function: {head_type}")]
    #[diagnostic(code(T002))]
    NonFunctionApplication { head_type: String },

    #[error("type mismatch: expected {expected}, found {actual}")]
    #[diagnostic(code(T003))]
    TypeMismatch { expected: String, actual: String },

    #[error("unbound variable #{index}")]
    #[diagnostic(code(T004))]
    UnboundVariable { index: usize },

    #[error("expected a statically known inductive-datatype description, found: {found}")]
    #[diagnostic(code(T005))]
    NonStaticData { found: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Eval(#[from] EvalError),
}
