mod analyze;
mod cli;
mod infra;
mod routes;
mod server;

use claim_verifier::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
