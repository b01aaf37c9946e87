mod cli;
mod commands;
mod render;

use auction_sim::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
