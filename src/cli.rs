use clap::{ArgAction, Parser, Subcommand};
use outcome::steps::LATEST_YEAR;
use strum::IntoStaticStr;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Use verbose output, repeat for more detail
    #[arg(short = 'v', action = ArgAction::Count, global = true)]
    pub verbosity_level: u8,
}

#[derive(Debug, Subcommand, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Command {
    /// Parse a whole number
    Parse(ParseCmd),

    /// Build a calendar date
    Date(DateCmd),

    /// Multiply two non-negative numbers
    Multiply(MultiplyCmd),

    /// Parse a day, build a date from it and print it
    Pipeline(PipelineCmd),
}

#[derive(Debug, clap::Args)]
pub struct ParseCmd {
    #[arg(allow_hyphen_values = true)]
    pub text: String,
}

#[derive(Debug, clap::Args)]
#[command(allow_negative_numbers = true)]
pub struct DateCmd {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

#[derive(Debug, clap::Args)]
#[command(allow_negative_numbers = true)]
pub struct MultiplyCmd {
    pub a: i32,
    pub b: i32,
}

#[derive(Debug, clap::Args)]
pub struct PipelineCmd {
    #[arg(long, default_value_t = LATEST_YEAR)]
    pub year: i32,

    #[arg(long, default_value_t = 4)]
    pub month: i32,

    #[arg(allow_hyphen_values = true)]
    pub day: String,
}
