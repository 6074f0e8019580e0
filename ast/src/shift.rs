use crate::term::Term;

/// Shifts every `Var` whose index is `>= cutoff` by `inc`. Recurses
/// structurally; crossing a binder increments `cutoff` by one.
///
/// Ported arithmetic-for-arithmetic from the reference implementation's
/// `Term.shift`, which this kernel's shift/subst pair must agree with
/// bit-for-bit (see spec §4.1 and §8 property 1).
pub trait Shift {
    fn shift(&self, cutoff: usize, inc: i64) -> Self;
}

impl Shift for Term {
    fn shift(&self, cutoff: usize, inc: i64) -> Term {
        match self {
            Term::Universe => Term::Universe,
            Term::Pi { name, domain, codomain } => Term::Pi {
                name: name.clone(),
                domain: Box::new(domain.shift(cutoff, inc)),
                codomain: Box::new(codomain.shift(cutoff + 1, inc)),
            },
            Term::Lam { name, domain, body } => Term::Lam {
                name: name.clone(),
                domain: Box::new(domain.shift(cutoff, inc)),
                body: Box::new(body.shift(cutoff + 1, inc)),
            },
            Term::App { func, arg } => {
                Term::App { func: Box::new(func.shift(cutoff, inc)), arg: Box::new(arg.shift(cutoff, inc)) }
            }
            Term::Var { index } => {
                let index = if *index < cutoff { *index } else { shifted_index(*index, inc) };
                Term::Var { index }
            }
            Term::DataSort => Term::DataSort,
            Term::Idt { name, signature, ctrs } => Term::Idt {
                name: name.clone(),
                signature: Box::new(signature.shift(cutoff, inc)),
                ctrs: ctrs.iter().map(|(n, t)| (n.clone(), t.shift(cutoff + 1, inc))).collect(),
            },
            Term::IdtType { data } => Term::IdtType { data: Box::new(data.shift(cutoff, inc)) },
            Term::IdtCon { data, ctor_name } => {
                Term::IdtCon { data: Box::new(data.shift(cutoff, inc)), ctor_name: ctor_name.clone() }
            }
            Term::IdtInd { data, scrutinee } => Term::IdtInd {
                data: Box::new(data.shift(cutoff, inc)),
                scrutinee: Box::new(scrutinee.shift(cutoff, inc)),
            },
        }
    }
}

fn shifted_index(index: usize, inc: i64) -> usize {
    let shifted = index as i64 + inc;
    assert!(shifted >= 0, "shift produced a negative de Bruijn index");
    shifted as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_zero_is_identity() {
        let t = Term::pi("x", Term::Universe, Term::app(Term::var(0), Term::var(1)));
        assert_eq!(t.shift(0, 0), t);
    }

    #[test]
    fn shift_only_affects_free_variables() {
        // [x : Type] #0 — the bound occurrence must not shift.
        let t = Term::lam("x", Term::Universe, Term::var(0));
        assert_eq!(t.shift(0, 5), t);
    }

    #[test]
    fn shift_crosses_binders_with_incremented_cutoff() {
        // [x : Type] #1 (a free reference to the enclosing binder) shifts.
        let t = Term::lam("x", Term::Universe, Term::var(1));
        let expected = Term::lam("x", Term::Universe, Term::var(3));
        assert_eq!(t.shift(0, 2), expected);
    }
}
