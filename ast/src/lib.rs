//! Term syntax for the kernel: de Bruijn-indexed terms, shifting,
//! substitution and the binder context shared by the parser and the type
//! checker.

pub mod context;
pub mod ident;
pub mod shift;
pub mod subst;
pub mod term;

pub use context::Context;
pub use ident::Ident;
pub use shift::Shift;
pub use subst::Substitute;
pub use term::{Ctor, Term};
