use crate::analyze::{run_analyze, run_policies, AnalyzeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use claim_verifier::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Judicial Claim Verifier",
    about = "Decide acquisition eligibility for judicial claims over HTTP or from the command line",
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
    /// Decide a single case record read from a JSON file
    Analyze(AnalyzeArgs),
    /// Print the published policy catalog
    Policies,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Serve decisions from the deterministic evaluator only
    #[arg(long)]
    pub(crate) deterministic_only: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args).await,
        Command::Policies => run_policies(),
    }
}
