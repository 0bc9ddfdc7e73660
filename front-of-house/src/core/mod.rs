//! Core: configuration and environment setup

pub mod config;

pub use config::Config;

use crate::utils::logger::init_logger_with_file;

/// Load `.env`, then initialize logging from the resulting configuration
pub fn setup_environment() -> Config {
    // Missing .env is fine; real environment variables still apply
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
