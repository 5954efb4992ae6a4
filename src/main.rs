use blogview::background::visitor_pruner;
use blogview::config::{self, AppCfg};
use blogview::routes::{self, AppState};
use blogview::services::mock::MockData;
use tracing::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = AppCfg::load()?;

    config::tracing::init();

    let data = MockData::seeded(cfg.latency())?;
    let state = AppState::new(data, cfg.clone());
    visitor_pruner::spawn(state.views.clone(), cfg.idle());

    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(&cfg.listen).await?;
    info!("starting listening at {}", cfg.listen);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
