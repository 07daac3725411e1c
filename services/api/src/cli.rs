use crate::report::{run_diagnose, run_thresholds, DiagnoseArgs, ThresholdsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dia_pilot::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "DIA Pilot",
    about = "Score diabetes health profiles from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a JSON profile or a CSV export of profiles
    Diagnose(DiagnoseArgs),
    /// Print the active threshold table as JSON
    Thresholds(ThresholdsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// JSON threshold table to use instead of APP_THRESHOLDS_PATH
    #[arg(long)]
    pub(crate) thresholds: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Diagnose(args) => run_diagnose(args),
        Command::Thresholds(args) => run_thresholds(args),
    }
}
