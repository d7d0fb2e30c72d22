#![deny(missing_debug_implementations)]

mod cli;
mod logger;
mod verbosity;

use std::{fmt::Display, process::ExitCode};

use clap::Parser as _;
use log::{info, log_enabled};
use outcome::{steps, Outcome};

use crate::{
    cli::{Args, Command},
    verbosity::Verbosity,
};

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    logger::init(Verbosity::try_from(args.verbosity_level)?)?;

    let id: &'static str = (&args.command).into();
    if log_enabled!(log::Level::Info) {
        info!("running {id}");
    }
    match args.command {
        Command::Parse(cmd) => report(id, steps::parse_string(&cmd.text)),
        Command::Date(cmd) => report(id, steps::create_date(cmd.year, cmd.month, cmd.day)),
        Command::Multiply(cmd) => report(id, steps::multiply(cmd.a, cmd.b)),
        Command::Pipeline(cmd) => report(id, steps::date_pipeline(cmd.year, cmd.month, &cmd.day)),
    }

    Ok(logger::exit_code())
}

fn report<T: Display>(id: &'static str, outcome: Outcome<T>) {
    if log_enabled!(log::Level::Info) {
        let verdict = if outcome.is_ok() { "succeeded" } else { "failed" };
        info!(id = id; "{verdict}");
    }
    println!("{outcome}");
}
