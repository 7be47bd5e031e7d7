mod config;
mod main_lib;
mod scheduler;

use config::Config;
use main_lib::{build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();
    let state = build_state(&config)?;

    tracing::info!("Monitoring goals at {}", config.api.base_url);
    let commits = state.session.subscribe();
    let refresh = scheduler::start_refresh_scheduler(&state, config.poll_interval);
    let reporter = tokio::spawn(scheduler::report_loop(state.clone(), commits));

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");

    drop(refresh);
    state.session.close();
    reporter.abort();
    Ok(())
}
