mod cli;
mod commands;

use admission::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
