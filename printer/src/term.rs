use dtlc_ast::{Ident, Term};
use pretty::RcDoc;

const LINE_WIDTH: usize = 100;

/// Renders `term` back to the surface syntax of §4.2, using binder
/// display-names where in scope and falling back to `#idx` for free
/// variables (spec §4.7). Output round-trips: re-parsing the result yields a
/// term α-equivalent to `term`.
pub fn print_to_string(term: &Term) -> String {
    let mut names: Vec<Ident> = Vec::new();
    build(term, &mut names).pretty(LINE_WIDTH).to_string()
}

fn var_name(names: &[Ident], index: usize) -> String {
    let len = names.len();
    if index < len { names[len - 1 - index].id.clone() } else { format!("#{index}") }
}

fn build(term: &Term, names: &mut Vec<Ident>) -> RcDoc<'static, ()> {
    match term {
        Term::Universe => RcDoc::text("Type"),
        Term::DataSort => RcDoc::text("Data"),
        Term::Var { index } => RcDoc::text(var_name(names, *index)),

        Term::Pi { name, domain, codomain } => {
            let domain_doc = build(domain, names);
            names.push(name.clone());
            let codomain_doc = build(codomain, names);
            names.pop();
            RcDoc::text("{")
                .append(RcDoc::text(name.id.clone()))
                .append(RcDoc::text(" : "))
                .append(domain_doc)
                .append(RcDoc::text("} "))
                .append(codomain_doc)
        }

        Term::Lam { name, domain, body } => {
            let domain_doc = build(domain, names);
            names.push(name.clone());
            let body_doc = build(body, names);
            names.pop();
            RcDoc::text("[")
                .append(RcDoc::text(name.id.clone()))
                .append(RcDoc::text(" : "))
                .append(domain_doc)
                .append(RcDoc::text("] "))
                .append(body_doc)
        }

        Term::App { .. } => {
            let (head, args) = term.unapply();
            let mut inner = build(head, names);
            for arg in args {
                inner = inner.append(RcDoc::text(" ")).append(build(arg, names));
            }
            RcDoc::text("(").append(inner).append(RcDoc::text(")"))
        }

        Term::Idt { name, signature, ctrs } => {
            let signature_doc = build(signature, names);
            let mut doc = RcDoc::text("<")
                .append(RcDoc::text(name.id.clone()))
                .append(RcDoc::text(" : "))
                .append(signature_doc);
            names.push(name.clone());
            for (ctor_name, ctor_type) in ctrs {
                let ctor_doc = build(ctor_type, names);
                doc = doc
                    .append(RcDoc::text(" | "))
                    .append(RcDoc::text(ctor_name.id.clone()))
                    .append(RcDoc::text(" : "))
                    .append(ctor_doc);
            }
            names.pop();
            doc.append(RcDoc::text(">"))
        }

        Term::IdtType { data } => RcDoc::text("!").append(build(data, names)),

        Term::IdtCon { data, ctor_name } => RcDoc::text("@")
            .append(build(data, names))
            .append(RcDoc::text("."))
            .append(RcDoc::text(ctor_name.id.clone())),

        Term::IdtInd { data, scrutinee } => {
            RcDoc::text("&").append(build(data, names)).append(RcDoc::text(" ")).append(build(scrutinee, names))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_universe_and_application() {
        let term = Term::app(Term::lam("x", Term::Universe, Term::var(0)), Term::Universe);
        assert_eq!(print_to_string(&term), "(([x : Type] x) Type)");
    }

    #[test]
    fn free_variable_falls_back_to_hash_index() {
        assert_eq!(print_to_string(&Term::var(3)), "#3");
    }

    #[test]
    fn idt_type_and_con_print_their_sigils() {
        let nat = Term::idt("Nat", Term::Universe, vec![(Ident::new("zero"), Term::var(0))]);
        assert_eq!(print_to_string(&Term::idt_type(nat.clone())), "!<Nat : Type | zero : Nat>");
        assert_eq!(print_to_string(&Term::idt_con(nat, "zero")), "@<Nat : Type | zero : Nat>.zero");
    }
}
