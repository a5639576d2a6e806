mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;

use crate::{config::Config, error::AppError, state::BotState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let store = startup::open_store(&config).await?;
    let http_client = startup::setup_reqwest_client(config.torn_request_timeout)?;
    let verifier = startup::setup_verifier(&config, http_client);

    let state = BotState::new(config, store, verifier);

    let client = bot::start::init_bot(state).await?;
    bot::start::start_bot(client).await
}
