use dtlc_ast::{Ident, Shift, Substitute, Term};

use super::IdtDesc;
use super::idt_ctor::is_recursive;
use crate::result::EvalError;

/// Derives the induction principle for eliminating `scrutinee`, given its
/// checked type `scrutinee_type` (spec §4.5, "derived induction"). The
/// checked type is expected to have the shape produced by `derive_type`:
/// `{self : signature} {c1 : T1} ... {ck : Tk} (self i1 .. im)`.
///
/// Ported arithmetic-for-arithmetic from `Idt.derive_induction`.
impl IdtDesc<'_> {
    pub fn derive_induction(&self, scrutinee: &Term, scrutinee_type: &Term) -> Result<Term, EvalError> {
        build_motive(0, scrutinee_type, self, scrutinee)
    }
}

fn build_motive(depth: usize, ty: &Term, desc: &IdtDesc<'_>, scrutinee: &Term) -> Result<Term, EvalError> {
    match ty {
        Term::Pi { domain, codomain, .. } => {
            let self_type = desc.derive_type();
            let adjusted = adjust_motive(domain, self_type);
            let constructors = build_constructors(depth + 1, codomain, desc, scrutinee)?;
            Ok(Term::pi("P", adjusted, constructors))
        }
        other => panic!("derive_induction: scrutinee's checked type is not a self-binder telescope: {other:?}"),
    }
}

fn adjust_motive(motive_type: &Term, self_type: Term) -> Term {
    match motive_type {
        Term::Pi { name, domain, codomain } => {
            let next_self = Term::app(self_type.shift(0, 1), Term::var(0));
            Term::pi(name.clone(), (**domain).clone(), adjust_motive(codomain, next_self))
        }
        _ => Term::pi("self", self_type, motive_type.clone()),
    }
}

fn build_constructors(depth: usize, ty: &Term, desc: &IdtDesc<'_>, scrutinee: &Term) -> Result<Term, EvalError> {
    match ty {
        Term::Pi { name, domain, codomain } => {
            let ctor_value = desc.derive_constructor(&name.id)?;
            let case = adjust_case(depth, domain, ctor_value, desc)?;
            let rest = build_constructors(depth + 1, codomain, desc, scrutinee)?;
            Ok(Term::pi(name.clone(), case, rest))
        }
        // `scrutinee` is a term of the *original* context, but by this point
        // `depth` new binders (P and every constructor case) have been
        // threaded in above it, so its free variables must shift to still
        // resolve past them — see the "IdtInd shifting" design note.
        _ => Ok(Term::app(ty.clone(), scrutinee.shift(0, depth as i64))),
    }
}

fn adjust_case(depth: usize, fields_type: &Term, self_value: Term, desc: &IdtDesc<'_>) -> Result<Term, EvalError> {
    match fields_type {
        Term::Pi { name, domain, codomain } => {
            if is_recursive(depth - 1, domain) {
                let ih_field_type = domain.subst(depth - 1, &desc.derive_type().shift(0, depth as i64));
                let ih_name = Ident::new(format!("{name}_"));
                let hyp_type = Term::app(domain.shift(0, 1), Term::var(0));
                let next_self_value = Term::app(self_value.shift(0, 2), Term::var(1));
                let shifted_rest = codomain.shift(0, 1);
                let inner = adjust_case(depth + 2, &shifted_rest, next_self_value, desc)?;
                Ok(Term::pi(ih_name, ih_field_type, Term::pi(name.clone(), hyp_type, inner)))
            } else {
                let next_self_value = Term::app(self_value.shift(0, 1), Term::var(0));
                let inner = adjust_case(depth + 1, codomain, next_self_value, desc)?;
                Ok(Term::pi(name.clone(), (**domain).clone(), inner))
            }
        }
        _ => Ok(Term::app(fields_type.clone(), self_value)),
    }
}
