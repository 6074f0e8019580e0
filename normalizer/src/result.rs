use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while reducing a term or deriving an inductive datatype's
/// encoding. Evaluation is otherwise total (spec §4.3): the only way it can
/// fail is a projection onto a constructor name the `Idt` never declared.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("unknown constructor '{ctor_name}' for datatype '{data_name}'")]
    #[diagnostic(code(N001))]
    UnknownConstructor { data_name: String, ctor_name: String },
}
