use crate::ident::Ident;
use crate::shift::Shift;
use crate::term::Term;

/// An ordered, persistent stack of binder records. Index 0 is the innermost
/// (most recently pushed) binder.
///
/// The same structure serves two roles (spec §3 "Context"): the parser
/// stores, per entry, the term a bare name resolves to (`Var(0)` for an
/// ordinary binder, the defined term for a `def`); the type checker stores,
/// per entry, the binder's type. Both roles shift every existing entry's
/// payload by `+1` at cutoff 0 when pushing a new binder, but the new
/// entry's own payload is only shifted when it is carried over from the
/// current context (`extend`) — an ordinary binder's `Var(0)` is correct
/// as-is and must not also shift (`bind`).
#[derive(Debug, Clone, Default)]
pub struct Context {
    entries: Vec<(Ident, Term)>,
}

impl Context {
    pub fn empty() -> Self {
        Context { entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pushes a new innermost binder whose payload is an existing term
    /// carried over from the *current* (pre-extension) context — a `def`
    /// name's bound term, or a typechecker binder's type. `payload` is
    /// authored before the new binder existed, so it is shifted along with
    /// every existing entry.
    pub fn extend(&self, name: impl Into<Ident>, payload: Term) -> Context {
        let mut entries: Vec<(Ident, Term)> = self.shifted_entries();
        entries.insert(0, (name.into(), payload.shift(0, 1)));
        Context { entries }
    }

    /// Pushes a new ordinary binder, whose own occurrences resolve to
    /// `Var(0)`. Mirrors the reference implementation's
    /// `Context.extend((name, None))` branch: unlike `extend`, the new
    /// entry's payload is *not* itself shifted — only the entries already
    /// in the context shift to make room for it — since `Var(0)` is correct
    /// by construction at the point the binder is introduced, not a term
    /// inherited from an outer scope.
    pub fn bind(&self, name: impl Into<Ident>) -> Context {
        let mut entries: Vec<(Ident, Term)> = self.shifted_entries();
        entries.insert(0, (name.into(), Term::var(0)));
        Context { entries }
    }

    fn shifted_entries(&self) -> Vec<(Ident, Term)> {
        self.entries.iter().map(|(n, t)| (n.clone(), t.shift(0, 1))).collect()
    }

    /// Looks up the payload stored at de Bruijn distance `index`.
    pub fn lookup(&self, index: usize) -> Option<&Term> {
        self.entries.get(index).map(|(_, t)| t)
    }

    pub fn name_at(&self, index: usize) -> Option<&Ident> {
        self.entries.get(index).map(|(n, _)| n)
    }

    /// Walks the context from innermost outwards, returning the first entry
    /// whose display name matches, along with its de Bruijn index.
    pub fn lookup_name(&self, name: &str) -> Option<(usize, &Term)> {
        self.entries.iter().enumerate().find(|(_, (n, _))| n.id == name).map(|(i, (_, t))| (i, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_shifts_existing_entries() {
        // Pushing `y` onto a context holding `x : Type` must leave `x`
        // resolvable one level deeper, with its (free-variable-free) type
        // unaffected in this simple case.
        let ctx = Context::empty().extend("x", Term::Universe);
        let ctx = ctx.extend("y", Term::Universe);
        assert_eq!(ctx.lookup(0), Some(&Term::Universe));
        assert_eq!(ctx.lookup(1), Some(&Term::Universe));
        assert_eq!(ctx.name_at(1).unwrap().id, "x");
    }

    #[test]
    fn extend_shifts_a_payload_that_mentions_an_outer_binder() {
        // `x : Type`, then `y : x` (referenced as #0 at the point `y` is
        // declared) — after the push, the reference to `x` from `y`'s type
        // must have shifted to #1.
        let ctx = Context::empty().extend("x", Term::Universe);
        let ctx = ctx.extend("y", Term::var(0));
        assert_eq!(ctx.lookup(0), Some(&Term::var(1)));
    }

    #[test]
    fn lookup_name_walks_innermost_outwards() {
        let ctx = Context::empty().extend("x", Term::var(0)).extend("x", Term::var(0));
        let (idx, _) = ctx.lookup_name("x").unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn bind_stores_var_zero_unshifted() {
        // A freshly-bound ordinary binder resolves to #0, not #1 — `bind`
        // must not shift the entry it is inserting, only the older ones.
        let ctx = Context::empty().bind("x");
        assert_eq!(ctx.lookup(0), Some(&Term::var(0)));
    }

    #[test]
    fn bind_still_shifts_older_entries() {
        let ctx = Context::empty().bind("x");
        let ctx = ctx.bind("y");
        assert_eq!(ctx.lookup(0), Some(&Term::var(0)));
        assert_eq!(ctx.lookup(1), Some(&Term::var(0)));
    }
}
