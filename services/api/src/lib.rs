mod cli;
mod demo;
mod infra;
mod packs;
mod routes;
mod server;

use nfdiv_packs::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
