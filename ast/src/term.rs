use derivative::Derivative;

use crate::ident::Ident;

/// A constructor of an inductive-datatype description: `(name, body)` where
/// `body` is authored under one additional binder (the self-reference to the
/// datatype being declared).
pub type Ctor = (Ident, Term);

/// A term of the kernel's syntax. All binders use de Bruijn indices; the
/// `name` field on `Pi`, `Lam` and `Idt` is a display hint only and is
/// ignored by equality, shifting, substitution, evaluation and checking.
#[derive(Debug, Clone, Derivative)]
#[derivative(PartialEq, Eq, Hash)]
pub enum Term {
    /// The single sort `Type`.
    Universe,
    /// A dependent function type `{name : domain} codomain`.
    Pi {
        #[derivative(PartialEq = "ignore", Hash = "ignore")]
        name: Ident,
        domain: Box<Term>,
        codomain: Box<Term>,
    },
    /// A lambda abstraction `[name : domain] body`.
    Lam {
        #[derivative(PartialEq = "ignore", Hash = "ignore")]
        name: Ident,
        domain: Box<Term>,
        body: Box<Term>,
    },
    /// An application `(func arg)`.
    App { func: Box<Term>, arg: Box<Term> },
    /// A de Bruijn variable.
    Var { index: usize },
    /// The sort `Data`, inhabited by inductive-datatype descriptions.
    DataSort,
    /// An inductive-datatype description: a telescope-of-indices-ending-in-Type
    /// signature, plus an ordered sequence of named constructor signatures,
    /// each authored under one additional self-binder.
    Idt {
        #[derivative(PartialEq = "ignore", Hash = "ignore")]
        name: Ident,
        signature: Box<Term>,
        ctrs: Vec<Ctor>,
    },
    /// Projects the Church/Scott-encoded type of an `Idt`.
    IdtType { data: Box<Term> },
    /// Projects the encoded constructor named `ctor_name` of an `Idt`.
    IdtCon { data: Box<Term>, ctor_name: Ident },
    /// Induction/elimination of `scrutinee` over the `Idt` `data`.
    IdtInd { data: Box<Term>, scrutinee: Box<Term> },
}

impl Term {
    pub fn pi(name: impl Into<Ident>, domain: Term, codomain: Term) -> Term {
        Term::Pi { name: name.into(), domain: Box::new(domain), codomain: Box::new(codomain) }
    }

    pub fn lam(name: impl Into<Ident>, domain: Term, body: Term) -> Term {
        Term::Lam { name: name.into(), domain: Box::new(domain), body: Box::new(body) }
    }

    pub fn app(func: Term, arg: Term) -> Term {
        Term::App { func: Box::new(func), arg: Box::new(arg) }
    }

    /// Folds `func` applied to `args` in order, left-associatively.
    pub fn apply(func: Term, args: impl IntoIterator<Item = Term>) -> Term {
        args.into_iter().fold(func, Term::app)
    }

    pub fn var(index: usize) -> Term {
        Term::Var { index }
    }

    pub fn idt(name: impl Into<Ident>, signature: Term, ctrs: Vec<Ctor>) -> Term {
        Term::Idt { name: name.into(), signature: Box::new(signature), ctrs }
    }

    pub fn idt_type(data: Term) -> Term {
        Term::IdtType { data: Box::new(data) }
    }

    pub fn idt_con(data: Term, ctor_name: impl Into<Ident>) -> Term {
        Term::IdtCon { data: Box::new(data), ctor_name: ctor_name.into() }
    }

    pub fn idt_ind(data: Term, scrutinee: Term) -> Term {
        Term::IdtInd { data: Box::new(data), scrutinee: Box::new(scrutinee) }
    }

    /// Peels off the spine of an application, returning the head and the
    /// arguments in declaration order.
    pub fn unapply(&self) -> (&Term, Vec<&Term>) {
        let mut args = Vec::new();
        let mut head = self;
        while let Term::App { func, arg } = head {
            args.push(arg.as_ref());
            head = func;
        }
        args.reverse();
        (head, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_equivalence_ignores_binder_names() {
        let a = Term::pi("x", Term::Universe, Term::var(0));
        let b = Term::pi("y", Term::Universe, Term::var(0));
        assert_eq!(a, b);
    }

    #[test]
    fn unapply_flattens_left_spine() {
        let t = Term::apply(Term::var(2), [Term::var(1), Term::var(0)]);
        let (head, args) = t.unapply();
        assert_eq!(head, &Term::var(2));
        assert_eq!(args, vec![&Term::var(1), &Term::var(0)]);
    }
}
