//! plagcheck CLI binary.

use std::io::Write;
use std::process;

use clap::{CommandFactory, Parser};
use env_logger::Builder;
use log::{Level, LevelFilter};

use plagcheck::cli::args::*;
use plagcheck::cli::commands::*;
use plagcheck::error::PlagcheckError;

fn main() {
    // Parse command line arguments using clap
    let args = PlagcheckArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| match record.level() {
            Level::Warn => writeln!(buf, "Warning - {}", record.args()),
            level => writeln!(buf, "[{}] {}", level, record.args()),
        })
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        if let PlagcheckError::InvalidArgument(_) = e {
            eprintln!("{}", PlagcheckArgs::command().render_help());
        }
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
