use dtlc_ast::{Ctor, Shift, Substitute, Term};

use super::IdtDesc;

/// Derives the Church/Scott-encoded type of an `Idt` (spec §4.5, "derived
/// type"). Walks the index telescope wrapping each index in a fresh `Lam`
/// (not `Pi` — the result is a *value*, applied to indices by callers that
/// need the encoded type as a type annotation), then appends the motive
/// binder and one binder per constructor.
///
/// Ported arithmetic-for-arithmetic from `Idt.derive_type` in the reference
/// implementation.
impl IdtDesc<'_> {
    pub fn derive_type(&self) -> Term {
        build_indices(0, self.signature, self)
    }
}

fn build_indices(depth: usize, indices_type: &Term, desc: &IdtDesc<'_>) -> Term {
    match indices_type {
        Term::Pi { name, domain, codomain } => {
            Term::lam(name.clone(), (**domain).clone(), build_indices(depth + 1, codomain, desc))
        }
        _ => build_motive(depth, desc),
    }
}

fn build_motive(depth: usize, desc: &IdtDesc<'_>) -> Term {
    Term::pi(desc.name.clone(), desc.signature.shift(0, depth as i64), build_constructor(depth + 1, 0, desc.ctrs))
}

fn build_constructor(depth: usize, num: usize, ctrs: &[Ctor]) -> Term {
    match ctrs.get(num) {
        Some((name, ty)) => {
            let domain = ty.shift(1, depth as i64).subst(0, &Term::var(num));
            Term::pi(name.clone(), domain, build_constructor(depth + 1, num + 1, ctrs))
        }
        None => build_return_type(depth, ctrs.len()),
    }
}

fn build_return_type(depth: usize, num_ctrs: usize) -> Term {
    let mut return_type = Term::var(num_ctrs);
    for i in 0..(depth - num_ctrs - 1) {
        return_type = Term::app(return_type, Term::var(depth - i - 1));
    }
    return_type
}

#[cfg(test)]
mod tests {
    use dtlc_ast::Ident;

    use super::*;

    fn nat() -> (Ident, Term, Vec<Ctor>) {
        let name = Ident::new("Nat");
        let signature = Term::Universe;
        let ctrs = vec![
            (Ident::new("succ"), Term::pi("n", Term::var(0), Term::var(1))),
            (Ident::new("zero"), Term::var(0)),
        ];
        (name, signature, ctrs)
    }

    #[test]
    fn nat_derives_a_two_constructor_motive_chain() {
        let (name, signature, ctrs) = nat();
        let desc = IdtDesc { name: &name, signature: &signature, ctrs: &ctrs };
        let derived = desc.derive_type();
        // {Nat : Type} {succ : {n : #0} #1} {zero : #1} #2
        let expected = Term::pi(
            "Nat",
            Term::Universe,
            Term::pi(
                "succ",
                Term::pi("n", Term::var(0), Term::var(1)),
                Term::pi("zero", Term::var(1), Term::var(2)),
            ),
        );
        assert_eq!(derived, expected);
    }
}
