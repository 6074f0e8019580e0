use miette::Diagnostic;

use crate::result::Error;

/// Renders `error` as the single-line diagnostic spec.md §6 requires: the
/// error kind's code, the message (which already embeds the offending
/// term's pretty-print for the kinds that carry one), and — for parse
/// errors — the cursor byte index.
///
/// Unlike the teacher's `render_reports`, which hands a `miette::Report` to
/// `GraphicalReportHandler` for a multi-line, source-annotated box, this
/// driver is not reporting against a held-open source file across multiple
/// diagnostics; it reports exactly one error for exactly one input, so a
/// compact single line is what the specification calls for.
pub fn render_error_line(error: &Error) -> String {
    let code = error.code().map(|c| c.to_string()).unwrap_or_else(|| "ERR".to_string());
    match error {
        Error::Parser(parse_error) => format!("error[{code}]: {parse_error} (cursor {})", parse_error.cursor()),
        other => format!("error[{code}]: {other}"),
    }
}
