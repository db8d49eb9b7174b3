use crate::commands::{run_allocate, run_scores, AllocateArgs, ScoresArgs};
use admission::config::AppConfig;
use admission::error::AppError;
use admission::telemetry;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "admission",
    about = "Allocate university applicants to departments over three priority rounds",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the allocation and write one roster file per department (default command)
    Allocate(AllocateArgs),
    /// Print every applicant's reconciled department scores
    Scores(ScoresArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "admission cli starting");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Allocate(AllocateArgs::default()));

    match command {
        Command::Allocate(args) => run_allocate(&config, args),
        Command::Scores(args) => run_scores(&config, args),
    }
}
