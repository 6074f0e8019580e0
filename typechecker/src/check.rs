use dtlc_ast::{Context, Substitute, Term};
use dtlc_normalizer::{IdtDesc, eval};
use dtlc_printer::print_to_string;

use crate::result::TypeError;

/// Infers the type of `term` in `ctx` (spec §4.4). A single pass, one rule
/// per `Term` variant — there is no separate "check against an expected
/// type" mode; every rule here is what the specification calls an "infer"
/// rule.
///
/// Ported rule-for-rule from the reference implementation's `.check()`
/// methods, generalised from the reference's single un-indexed `Idt` example
/// to the general indexed case spec.md §4.5/§4.6 describe.
pub fn infer(term: &Term, ctx: &Context) -> Result<Term, TypeError> {
    match term {
        Term::Universe => Ok(Term::Universe),

        Term::Pi { domain, codomain, .. } => {
            let domain_sort = infer(domain, ctx)?;
            if eval(&domain_sort)? != Term::Universe {
                return Err(TypeError::NotAType { found: print_to_string(domain) });
            }
            let extended = ctx.extend("_", (**domain).clone());
            let codomain_sort = infer(codomain, &extended)?;
            if eval(&codomain_sort)? != Term::Universe {
                return Err(TypeError::NotAType { found: print_to_string(codomain) });
            }
            Ok(Term::Universe)
        }

        Term::Lam { name, domain, body } => {
            let extended = ctx.extend(name.clone(), (**domain).clone());
            let body_type = infer(body, &extended)?;
            let pi = Term::pi(name.clone(), (**domain).clone(), body_type);
            infer(&pi, ctx)?;
            Ok(pi)
        }

        Term::App { func, arg } => {
            let func_type = eval(&infer(func, ctx)?)?;
            let (param_type, return_type) = match func_type {
                Term::Pi { domain, codomain, .. } => (domain, codomain),
                other => return Err(TypeError::NonFunctionApplication { head_type: print_to_string(&other) }),
            };
            let arg_type = eval(&infer(arg, ctx)?)?;
            let param_type_evaluated = eval(&param_type)?;
            if param_type_evaluated != arg_type {
                return Err(TypeError::TypeMismatch {
                    expected: print_to_string(&param_type_evaluated),
                    actual: print_to_string(&arg_type),
                });
            }
            Ok(return_type.subst(0, arg))
        }

        Term::Var { index } => match ctx.lookup(*index) {
            Some(ty) => eval(ty).map_err(TypeError::from),
            None => Err(TypeError::UnboundVariable { index: *index }),
        },

        Term::DataSort => Ok(Term::Universe),

        Term::Idt { .. } => Ok(Term::DataSort),

        Term::IdtType { data } => {
            let data = eval(data)?;
            match &data {
                Term::Idt { name, signature, ctrs } => {
                    let derived = IdtDesc::new(name, signature, ctrs).derive_type();
                    infer(&derived, ctx)
                }
                other => Err(TypeError::NonStaticData { found: print_to_string(other) }),
            }
        }

        Term::IdtCon { data, ctor_name } => {
            let data = eval(data)?;
            match &data {
                Term::Idt { name, signature, ctrs } => {
                    let derived = IdtDesc::new(name, signature, ctrs).derive_constructor(&ctor_name.id)?;
                    infer(&derived, ctx)
                }
                other => Err(TypeError::NonStaticData { found: print_to_string(other) }),
            }
        }

        Term::IdtInd { data, scrutinee } => {
            let data_evaluated = eval(data)?;
            match &data_evaluated {
                Term::Idt { name, signature, ctrs } => {
                    let scrutinee_type = infer(scrutinee, ctx)?;
                    IdtDesc::new(name, signature, ctrs)
                        .derive_induction(scrutinee, &scrutinee_type)
                        .map_err(TypeError::from)
                }
                other => Err(TypeError::NonStaticData { found: print_to_string(other) }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dtlc_ast::Ident;

    use super::*;

    #[test]
    fn identity_on_type_infers_a_pi() {
        // [x : Type] x : {x : Type} Type
        let term = Term::lam("x", Term::Universe, Term::var(0));
        let inferred = infer(&term, &Context::empty()).unwrap();
        assert_eq!(inferred, Term::pi("x", Term::Universe, Term::Universe));
    }

    #[test]
    fn applying_identity_to_type_infers_type() {
        let identity = Term::lam("x", Term::Universe, Term::var(0));
        let term = Term::app(identity, Term::Universe);
        assert_eq!(infer(&term, &Context::empty()).unwrap(), Term::Universe);
    }

    #[test]
    fn applying_a_non_function_fails() {
        let term = Term::app(Term::Universe, Term::Universe);
        assert!(matches!(infer(&term, &Context::empty()), Err(TypeError::NonFunctionApplication { .. })));
    }

    #[test]
    fn unbound_variable_fails() {
        assert!(matches!(infer(&Term::var(0), &Context::empty()), Err(TypeError::UnboundVariable { index: 0 })));
    }

    #[test]
    fn nat_constructor_infers_the_encoded_type() {
        let nat = Term::idt(
            "Nat",
            Term::Universe,
            vec![(Ident::new("succ"), Term::pi("n", Term::var(0), Term::var(1))), (Ident::new("zero"), Term::var(0))],
        );
        let zero = Term::idt_con(nat, "zero");
        let inferred = infer(&zero, &Context::empty()).unwrap();
        let encoded = eval(&inferred).unwrap();
        assert!(matches!(encoded, Term::Pi { .. }));
    }
}
