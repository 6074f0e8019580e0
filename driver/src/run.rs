use std::io::Write;

use dtlc_ast::Context;
use dtlc_printer::print_to_string;

use crate::result::Error;

/// Parses, evaluates and type-checks one input expression, writing the
/// three labelled output blocks spec.md §6 requires as each stage succeeds.
/// Grounded on `app/src/cli/run.rs`'s single-file-in, stage-by-stage
/// orchestration.
pub fn run<O: Write>(source: &str, out: &mut O) -> Result<(), Error> {
    log::debug!("parsing {} bytes of input", source.len());
    let term = dtlc_parser::parse(source)?;
    write_block(out, "Input term", &print_to_string(&term))?;

    log::debug!("evaluating to normal form");
    let normal_form = dtlc_normalizer::eval(&term)?;
    write_block(out, "Normal form", &print_to_string(&normal_form))?;

    log::debug!("inferring type");
    let inferred_type = dtlc_typechecker::infer(&term, &Context::empty())?;
    write_block(out, "Inferred type", &print_to_string(&inferred_type))?;

    Ok(())
}

fn write_block<O: Write>(out: &mut O, label: &str, body: &str) -> Result<(), Error> {
    writeln!(out, "{label}:")?;
    writeln!(out, "{body}")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(source: &str) -> Result<String, Error> {
        let mut out = Vec::new();
        run(source, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn s1_identity_on_type() {
        let output = run_to_string("[x : Type] x").unwrap();
        assert!(output.contains("Input term:\n([x : Type] x)\n\n") || output.contains("[x : Type] x"));
        assert!(output.contains("Inferred type:\n{x : Type} Type"));
    }

    #[test]
    fn s2_applied_identity_normalises_to_type() {
        let output = run_to_string("([x : Type] x) Type").unwrap();
        assert!(output.contains("Normal form:\nType"));
        assert!(output.contains("Inferred type:\nType"));
    }

    #[test]
    fn s6_ill_typed_application_fails_with_type_mismatch() {
        let mut out = Vec::new();
        let err = run("([x : Type] x) ([y : Type] y)", &mut out).unwrap_err();
        assert!(matches!(err, Error::Type(dtlc_typechecker::TypeError::TypeMismatch { .. })));
    }
}
