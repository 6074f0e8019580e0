use std::path::PathBuf;

/// Reads one input expression and prints its input term, normal form, and
/// inferred type. Pass `-` for `FILE` to read from standard input.
///
/// Grounded on `app/src/cli/run.rs`'s `Args` shape, stripped of the
/// codegen/`node`-running branch this kernel has no counterpart for.
#[derive(clap::Parser)]
#[clap(version, author, about, long_about = None)]
pub struct Cli {
    /// Expression file to read, or `-` for standard input.
    #[clap(value_parser, value_name = "FILE")]
    pub file: PathBuf,

    /// Enable trace logging.
    #[clap(long)]
    pub trace: bool,

    /// Enable debug logging.
    #[clap(long)]
    pub debug: bool,
}
