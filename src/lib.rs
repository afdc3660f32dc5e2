pub mod commands;
pub mod config;
pub mod converter;
pub mod fallback;
pub mod log;
pub mod providers;
pub mod rate_provider;
pub mod rates;
pub mod snapshot;
pub mod ui;

use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Convert { amount: f64, from: String, to: String },
    Rates,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency calculator starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let base_url = config
        .providers
        .open_er_api
        .as_ref()
        .map_or("https://open.er-api.com", |p| &p.base_url);
    let provider = providers::open_er_api::OpenErApiProvider::new(base_url, &config.base_currency);

    let spinner = ui::new_spinner("Fetching exchange rates...");
    let snapshot = snapshot::acquire(&provider, &config.base_currency).await;
    spinner.finish_and_clear();

    match command {
        AppCommand::Convert { amount, from, to } => {
            commands::run_convert(&snapshot, amount, &from, &to)
        }
        AppCommand::Rates => commands::run_rates(&snapshot),
    }
}
