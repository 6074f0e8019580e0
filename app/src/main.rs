mod cli;

use std::io::{self, Read};

use clap::Parser;

use cli::Cli;

fn main() {
    miette::set_panic_hook();

    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    builder.format_timestamp(None).format_level(false).format_target(false);
    if cli.trace {
        builder.filter_level(log::LevelFilter::Trace);
    } else if cli.debug {
        builder.filter_level(log::LevelFilter::Debug);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();

    if let Err(error) = run(&cli) {
        eprintln!("{}", dtlc_driver::render_error_line(&error));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), dtlc_driver::Error> {
    let source = read_source(&cli.file)?;
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    dtlc_driver::run(&source, &mut lock)
}

fn read_source(path: &std::path::Path) -> Result<String, dtlc_driver::Error> {
    if path == std::path::Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
