use dtlc_ast::{Context, Term};

use crate::cursor::Cursor;
use crate::result::ParseError;

/// Parses a single term from `source` (spec §4.2). The top-level term is
/// parsed in an empty context, so any bare name not bound by an enclosing
/// `{`, `[`, `<`, or `def` is an `UnboundName` error.
pub fn parse(source: &str) -> Result<Term, ParseError> {
    let mut cursor = Cursor::new(source);
    let term = parse_term(&mut cursor, &Context::empty())?;
    cursor.skip_trivia();
    if let Some(found) = cursor.peek() {
        return Err(cursor.unexpected(found));
    }
    Ok(term)
}

fn parse_term(cursor: &mut Cursor<'_>, ctx: &Context) -> Result<Term, ParseError> {
    cursor.skip_trivia();
    let at = cursor.pos();
    match cursor.peek() {
        None => Err(cursor.eof("a term")),

        Some('(') => parse_application(cursor, ctx),
        Some('{') => parse_pi(cursor, ctx),
        Some('[') => parse_lam(cursor, ctx),
        Some('<') => parse_idt(cursor, ctx),
        Some('!') => {
            cursor.expect_char('!')?;
            let data = parse_term(cursor, ctx)?;
            Ok(Term::idt_type(data))
        }
        Some('@') => {
            cursor.expect_char('@')?;
            let data = parse_term(cursor, ctx)?;
            cursor.expect_char('.')?;
            let name = cursor.parse_ident()?;
            Ok(Term::idt_con(data, name))
        }
        Some('&') => {
            cursor.expect_char('&')?;
            let data = parse_term(cursor, ctx)?;
            let scrutinee = parse_term(cursor, ctx)?;
            Ok(Term::idt_ind(data, scrutinee))
        }
        Some('#') => {
            cursor.expect_char('#')?;
            let digits = cursor.parse_digits()?;
            let index: usize =
                digits.parse().map_err(|_| ParseError::InvalidIndex { text: digits.clone(), at })?;
            Ok(Term::var(index))
        }

        Some(_) => {
            if cursor.eat_keyword("Type") {
                return Ok(Term::Universe);
            }
            if cursor.eat_keyword("Data") {
                return Ok(Term::DataSort);
            }
            if cursor.eat_keyword("def") {
                return parse_def(cursor, ctx);
            }
            let name = cursor.parse_ident()?;
            match ctx.lookup_name(&name) {
                Some((_, term)) => Ok(term.clone()),
                None => Err(ParseError::UnboundName { name, at, span: (at, 1).into() }),
            }
        }
    }
}

/// `(` term+ `)` — left-associative application of the first term to the
/// rest, folded into nested `App` nodes.
fn parse_application(cursor: &mut Cursor<'_>, ctx: &Context) -> Result<Term, ParseError> {
    cursor.expect_char('(')?;
    let mut terms = vec![parse_term(cursor, ctx)?];
    loop {
        cursor.skip_trivia();
        if cursor.peek() == Some(')') {
            break;
        }
        terms.push(parse_term(cursor, ctx)?);
    }
    cursor.expect_char(')')?;
    let mut terms = terms.into_iter();
    let head = terms.next().expect("at least one term was parsed before the loop");
    Ok(Term::apply(head, terms))
}

/// `{` name `:` T `}` U
fn parse_pi(cursor: &mut Cursor<'_>, ctx: &Context) -> Result<Term, ParseError> {
    cursor.expect_char('{')?;
    let name = cursor.parse_ident()?;
    cursor.expect_char(':')?;
    let domain = parse_term(cursor, ctx)?;
    cursor.expect_char('}')?;
    let extended = ctx.bind(name.as_str());
    let codomain = parse_term(cursor, &extended)?;
    Ok(Term::pi(name, domain, codomain))
}

/// `[` name `:` T `]` U
fn parse_lam(cursor: &mut Cursor<'_>, ctx: &Context) -> Result<Term, ParseError> {
    cursor.expect_char('[')?;
    let name = cursor.parse_ident()?;
    cursor.expect_char(':')?;
    let domain = parse_term(cursor, ctx)?;
    cursor.expect_char(']')?;
    let extended = ctx.bind(name.as_str());
    let body = parse_term(cursor, &extended)?;
    Ok(Term::lam(name, domain, body))
}

/// `def` name T U — sugar: parse U under `name` bound to `T` itself (not a
/// type), and return U's parsed term directly; there is no `Def` node.
fn parse_def(cursor: &mut Cursor<'_>, ctx: &Context) -> Result<Term, ParseError> {
    let name = cursor.parse_ident()?;
    let term = parse_term(cursor, ctx)?;
    let extended = ctx.extend(name.as_str(), term);
    parse_term(cursor, &extended)
}

/// `<` name `:` T (`|` cname `:` cT)* `>`
fn parse_idt(cursor: &mut Cursor<'_>, ctx: &Context) -> Result<Term, ParseError> {
    cursor.expect_char('<')?;
    let name = cursor.parse_ident()?;
    cursor.expect_char(':')?;
    let signature = parse_term(cursor, ctx)?;
    let self_ctx = ctx.bind(name.as_str());
    let mut ctrs = Vec::new();
    loop {
        cursor.skip_trivia();
        if !cursor.eat_char('|') {
            break;
        }
        let ctor_name = cursor.parse_ident()?;
        cursor.expect_char(':')?;
        let ctor_type = parse_term(cursor, &self_ctx)?;
        ctrs.push((ctor_name.into(), ctor_type));
    }
    cursor.expect_char('>')?;
    Ok(Term::idt(name, signature, ctrs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_identity_lambda() {
        let term = parse("[x : Type] x").unwrap();
        assert_eq!(term, Term::lam("x", Term::Universe, Term::var(0)));
    }

    #[test]
    fn parses_left_associative_application() {
        let term = parse("(Type Type Type)").unwrap();
        assert_eq!(term, Term::apply(Term::Universe, [Term::Universe, Term::Universe]));
    }

    #[test]
    fn def_desugars_to_a_resolved_reference() {
        let term = parse("def n Type n").unwrap();
        assert_eq!(term, Term::Universe);
    }

    #[test]
    fn comments_and_whitespace_are_skipped() {
        let term = parse("-- a comment\n  Type  ").unwrap();
        assert_eq!(term, Term::Universe);
    }

    #[test]
    fn unbound_name_is_an_error() {
        assert!(matches!(parse("nonexistent"), Err(ParseError::UnboundName { .. })));
    }

    #[test]
    fn parses_an_idt_with_a_self_referencing_constructor() {
        let term = parse("<Nat : Type | succ : {n : Nat} Nat | zero : Nat>").unwrap();
        let expected = Term::idt(
            "Nat",
            Term::Universe,
            vec![
                (dtlc_ast::Ident::new("succ"), Term::pi("n", Term::var(0), Term::var(1))),
                (dtlc_ast::Ident::new("zero"), Term::var(0)),
            ],
        );
        assert_eq!(term, expected);
    }

    #[test]
    fn parses_explicit_de_bruijn_index() {
        let term = parse("[x : Type] [y : Type] #1").unwrap();
        assert_eq!(term, Term::lam("x", Term::Universe, Term::lam("y", Term::Universe, Term::var(1))));
    }
}
