//! Command implementations for plagcheck CLI.

use log::debug;

use crate::checker::PlagiarismChecker;
use crate::cli::args::PlagcheckArgs;
use crate::cli::output::output_result;
use crate::error::Result;

/// Execute a CLI invocation: load synonyms, compare both inputs, print the result.
pub fn execute_command(args: PlagcheckArgs) -> Result<()> {
    let config = args.checker_config()?;
    debug!("Using tuple size {}", config.tuple_size);

    let checker = PlagiarismChecker::from_synonym_file(&args.synonym_file, config)?;
    let outcome = checker.compare_files(&args.input_1, &args.input_2)?;

    output_result(&outcome, &args)
}
