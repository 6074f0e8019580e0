use crate::shift::Shift;
use crate::term::Term;

/// Replaces the `Var` at index `depth` with `value`, and collapses the
/// removed binder's slot by decrementing every `Var` with index `> depth`.
/// Crossing a binder increments `depth` by one and shifts `value` by
/// `(0, +1)` before descending, so `value`'s own free variables stay correct
/// under the extra binder.
///
/// Ported arithmetic-for-arithmetic from the reference implementation's
/// `Term.subst`.
pub trait Substitute {
    fn subst(&self, depth: usize, value: &Term) -> Self;
}

impl Substitute for Term {
    fn subst(&self, depth: usize, value: &Term) -> Term {
        match self {
            Term::Universe => Term::Universe,
            Term::Pi { name, domain, codomain } => Term::Pi {
                name: name.clone(),
                domain: Box::new(domain.subst(depth, value)),
                codomain: Box::new(codomain.subst(depth + 1, &value.shift(0, 1))),
            },
            Term::Lam { name, domain, body } => Term::Lam {
                name: name.clone(),
                domain: Box::new(domain.subst(depth, value)),
                body: Box::new(body.subst(depth + 1, &value.shift(0, 1))),
            },
            Term::App { func, arg } => {
                Term::App { func: Box::new(func.subst(depth, value)), arg: Box::new(arg.subst(depth, value)) }
            }
            Term::Var { index } => {
                if *index == depth {
                    value.clone()
                } else {
                    let index = if *index > depth { *index - 1 } else { *index };
                    Term::Var { index }
                }
            }
            Term::DataSort => Term::DataSort,
            Term::Idt { name, signature, ctrs } => Term::Idt {
                name: name.clone(),
                signature: Box::new(signature.subst(depth, value)),
                ctrs: ctrs
                    .iter()
                    .map(|(n, t)| (n.clone(), t.subst(depth + 1, &value.shift(0, 1))))
                    .collect(),
            },
            Term::IdtType { data } => Term::IdtType { data: Box::new(data.subst(depth, value)) },
            Term::IdtCon { data, ctor_name } => {
                Term::IdtCon { data: Box::new(data.subst(depth, value)), ctor_name: ctor_name.clone() }
            }
            Term::IdtInd { data, scrutinee } => Term::IdtInd {
                data: Box::new(data.subst(depth, value)),
                scrutinee: Box::new(scrutinee.subst(depth, value)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subst_replaces_the_matching_index() {
        // ([x : Type] #0) Type  ~>  substituting Type for #0 gives Type
        let body = Term::var(0);
        assert_eq!(body.subst(0, &Term::Universe), Term::Universe);
    }

    #[test]
    fn subst_collapses_higher_indices() {
        // a binder referencing an outer variable (#1) under the removed slot (#0)
        // must have its index decremented once the slot at `depth` disappears.
        let t = Term::app(Term::var(0), Term::var(1));
        let result = t.subst(0, &Term::Universe);
        assert_eq!(result, Term::app(Term::Universe, Term::var(0)));
    }

    #[test]
    fn subst_shifts_the_value_crossing_a_binder() {
        // [y : Type] #1 substituting #0 (the outer binder) with a term that
        // itself mentions #0 must shift that mentioned variable by one so it
        // still refers past the fresh `y` binder.
        let t = Term::lam("y", Term::Universe, Term::var(1));
        let result = t.subst(0, &Term::var(0));
        assert_eq!(result, Term::lam("y", Term::Universe, Term::var(1)));
    }
}
