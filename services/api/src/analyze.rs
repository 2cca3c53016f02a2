use crate::infra::build_orchestrator;
use claim_verifier::config::AppConfig;
use claim_verifier::error::AppError;
use claim_verifier::telemetry::{self, LogSink};
use claim_verifier::workflows::eligibility::{CaseRecord, PolicyCatalog};
use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Path to a case record JSON file (`-` reads from stdin)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Skip the generative evaluator even when it is configured
    #[arg(long)]
    pub(crate) deterministic_only: bool,
}

pub(crate) async fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;

    let raw = read_input(&args.input)?;
    let case: CaseRecord = serde_json::from_str(&raw)?;

    let orchestrator = build_orchestrator(&config.generative, args.deterministic_only)?;
    let decision = orchestrator.decide(&case).await;

    println!("{}", serde_json::to_string_pretty(&decision)?);
    Ok(())
}

pub(crate) fn run_policies() -> Result<(), AppError> {
    let catalog = PolicyCatalog::global();
    println!("Policy catalog {}", catalog.version());
    for entry in catalog.entries() {
        println!("  {:<6} [{:?}] {}", entry.id, entry.forces, entry.statement);
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String, AppError> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(std::fs::read_to_string(path)?)
}
