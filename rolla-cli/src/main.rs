use colored::Colorize;
use rolla_lib::error::Error;
use rolla_lib::solver::Solver;
use std::process::ExitCode;
use tracing::debug;
use tracing::Level;

mod cli;
mod report;

use cli::Parser;

const EXIT_SYNTAX: u8 = 2;
const EXIT_RANGE: u8 = 3;

/// Exit status for a rejected expression
fn exit_status(error: &Error) -> u8 {
    match error {
        Error::Syntax(_) => EXIT_SYNTAX,
        Error::Range(_) => EXIT_RANGE,
    }
}

#[tracing::instrument]
fn main() -> ExitCode {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let mode = match args.mode() {
        Ok(mode) => mode,
        Err(error) => error.exit(),
    };
    let solver = match Solver::with_limits(&args.expression, &args.limits()) {
        Ok(solver) => solver,
        Err(error) => {
            eprintln!("{} {}", "error:".bold().red(), error);
            return ExitCode::from(exit_status(&error));
        }
    };
    let result = match args.seed {
        Some(seed) => solver.solve_seeded(mode, seed),
        None => solver.solve(mode),
    };
    debug!("{:?} roll of `{}` seeded with {:?}", mode, solver.as_str(), args.seed);
    print!("{}", report::Report(&result));
    ExitCode::SUCCESS
}
