mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use dhara::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
