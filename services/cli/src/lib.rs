mod cli;
mod demo;
mod infra;

use ayush_registry::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
