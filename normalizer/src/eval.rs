use dtlc_ast::{Substitute, Term};

use crate::derive::IdtDesc;
use crate::result::EvalError;

/// Reduces `term` to normal form under the rules of spec §4.3: structural
/// recursion on every constructor, beta-reduction on `App` over a `Lam`, and
/// the three `Idt` projections (`IdtType`, `IdtCon`, `IdtInd`) delegating to
/// the derivation engine once their `data` operand reduces to an `Idt`
/// literal. Has no step budget and does not terminate on a divergent term —
/// this mirrors the reference implementation's `.eval()` methods, which are
/// likewise unguarded.
pub fn eval(term: &Term) -> Result<Term, EvalError> {
    match term {
        Term::Universe => Ok(Term::Universe),
        Term::DataSort => Ok(Term::DataSort),
        Term::Var { index } => Ok(Term::var(*index)),

        Term::Pi { name, domain, codomain } => {
            Ok(Term::pi(name.clone(), eval(domain)?, eval(codomain)?))
        }
        Term::Lam { name, domain, body } => Ok(Term::lam(name.clone(), eval(domain)?, eval(body)?)),

        Term::App { func, arg } => {
            let func = eval(func)?;
            match func {
                Term::Lam { body, .. } => eval(&body.subst(0, arg)),
                _ => Ok(Term::app(func, eval(arg)?)),
            }
        }

        Term::Idt { name, signature, ctrs } => {
            let signature = eval(signature)?;
            let ctrs = ctrs.iter().map(|(n, t)| Ok((n.clone(), eval(t)?))).collect::<Result<_, EvalError>>()?;
            Ok(Term::idt(name.clone(), signature, ctrs))
        }

        Term::IdtType { data } => {
            let data = eval(data)?;
            match &data {
                Term::Idt { name, signature, ctrs } => Ok(IdtDesc::new(name, signature, ctrs).derive_type()),
                _ => Ok(Term::idt_type(data)),
            }
        }

        Term::IdtCon { data, ctor_name } => {
            let data = eval(data)?;
            match &data {
                Term::Idt { name, signature, ctrs } => {
                    IdtDesc::new(name, signature, ctrs).derive_constructor(&ctor_name.id)
                }
                _ => Ok(Term::idt_con(data, ctor_name.clone())),
            }
        }

        Term::IdtInd { scrutinee, .. } => eval(scrutinee),
    }
}

#[cfg(test)]
mod tests {
    use dtlc_ast::Ident;

    use super::*;

    fn church_bool() -> Term {
        // Data Bool {} (true : #0) (false : #0)
        Term::idt(
            "Bool",
            Term::Universe,
            vec![(Ident::new("true"), Term::var(0)), (Ident::new("false"), Term::var(0))],
        )
    }

    #[test]
    fn app_over_lam_substitutes_and_continues_reducing() {
        let identity = Term::lam("x", Term::Universe, Term::var(0));
        let applied = Term::app(identity, Term::Universe);
        assert_eq!(eval(&applied).unwrap(), Term::Universe);
    }

    #[test]
    fn idt_type_of_a_non_idt_reconstructs_unevaluated() {
        let projected = Term::idt_type(Term::Universe);
        assert_eq!(eval(&projected).unwrap(), Term::idt_type(Term::Universe));
    }

    #[test]
    fn idt_con_of_an_unknown_constructor_errors() {
        let projected = Term::idt_con(church_bool(), "maybe");
        let err = eval(&projected).unwrap_err();
        assert_eq!(err, EvalError::UnknownConstructor { data_name: "Bool".into(), ctor_name: "maybe".into() });
    }

    #[test]
    fn idt_ind_reduces_to_its_scrutinee() {
        let scrutinee = Term::var(7);
        let reduced = Term::idt_ind(church_bool(), scrutinee.clone());
        assert_eq!(eval(&reduced).unwrap(), scrutinee);
    }
}
