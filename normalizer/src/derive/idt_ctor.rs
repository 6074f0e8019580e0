use dtlc_ast::{Shift, Substitute, Term};

use super::IdtDesc;
use crate::eval::eval;
use crate::result::EvalError;

/// True when `field_type`'s application spine is headed by `Var(depth)` —
/// i.e. the field recursively mentions the datatype being declared, at the
/// self-binder position `depth` assumes for it.
///
/// Ported from `Idt.is_recursive` in the reference implementation.
pub fn is_recursive(depth: usize, field_type: &Term) -> bool {
    match field_type {
        Term::App { func, .. } => is_recursive(depth, func),
        Term::Var { index } => *index == depth,
        _ => false,
    }
}

/// Derives the Church/Scott-encoded constructor named `ctor_name` (spec §4.5,
/// "derived constructor"). A `Lam` chain over the declared fields whose body,
/// once evaluated, continues the chain over the motive's self-binder and
/// each constructor binder — that continuation falls out for free once the
/// self-reference inside the constructor's declared type is substituted by
/// the full encoded type (see `derive_type`'s result being itself a
/// `Pi`-chain once applied).
///
/// Ported arithmetic-for-arithmetic from `Idt.derive_constructor`.
impl IdtDesc<'_> {
    pub fn derive_constructor(&self, ctor_name: &str) -> Result<Term, EvalError> {
        let ctor_index = self.ctrs.iter().position(|(name, _)| name.id == ctor_name).ok_or_else(|| {
            EvalError::UnknownConstructor { data_name: self.name.id.clone(), ctor_name: ctor_name.to_string() }
        })?;
        let (_, declared_type) = &self.ctrs[ctor_index];
        let idt_type = self.derive_type();
        let substituted = eval(&declared_type.subst(0, &idt_type))?;
        Ok(build_arguments(0, &substituted, declared_type, self.ctrs.len(), ctor_index))
    }
}

fn build_arguments(depth: usize, fields_type: &Term, declared_type: &Term, num_ctrs: usize, ctor_index: usize) -> Term {
    match fields_type {
        Term::Pi { name, domain, codomain } => {
            Term::lam(name.clone(), (**domain).clone(), build_arguments(depth + 1, codomain, declared_type, num_ctrs, ctor_index))
        }
        _ => build_constructor(depth, declared_type, num_ctrs, ctor_index),
    }
}

fn build_constructor(depth: usize, declared_type: &Term, num_ctrs: usize, ctor_index: usize) -> Term {
    let self_ctor = Term::var(num_ctrs - ctor_index - 1);
    build_fields(depth, declared_type, 0, self_ctor, num_ctrs)
}

fn build_fields(depth: usize, fields_type: &Term, field_index: usize, term: Term, num_ctrs: usize) -> Term {
    match fields_type {
        Term::Pi { domain, codomain, .. } => {
            let mut field = Term::var(depth - field_index - 1);
            if is_recursive(field_index, domain) {
                for i in 0..=num_ctrs {
                    field = Term::app(field, Term::var(num_ctrs - i));
                }
            }
            build_fields(depth, codomain, field_index + 1, Term::app(term, field), num_ctrs)
        }
        _ => term,
    }
}
