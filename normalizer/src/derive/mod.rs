//! The inductive-datatype derivation engine: turns an `Idt` description into
//! its Church/Scott-encoded type, constructors and induction principle.
//!
//! Grounded on `Idt.derive_type` / `Idt.derive_constructor` /
//! `Idt.derive_induction` / `Idt.is_recursive` in the reference
//! implementation. Lives inside `normalizer` rather than as its own crate
//! because `derive_constructor` must call the evaluator, and the evaluator's
//! `IdtType`/`IdtCon` reduction rules must call back into this module — see
//! `DESIGN.md`.

mod idt_ctor;
mod idt_ind;
mod idt_type;

use dtlc_ast::{Ctor, Ident, Term};

pub use idt_ctor::is_recursive;

/// A borrowed view of an `Idt`'s fields, mirroring the reference
/// implementation's `Idt` class — its three `derive_*` methods are the
/// methods on this type.
pub struct IdtDesc<'a> {
    pub name: &'a Ident,
    pub signature: &'a Term,
    pub ctrs: &'a [Ctor],
}

impl<'a> IdtDesc<'a> {
    pub fn new(name: &'a Ident, signature: &'a Term, ctrs: &'a [Ctor]) -> Self {
        IdtDesc { name, signature, ctrs }
    }
}
