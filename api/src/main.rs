use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use healthsuite_core::domain::common::HealthSuiteConfig;
use healthsuite_api::{
    application::{
        http::server::http_server::{router, state},
        logger::init_logger,
        session_sweeper::spawn_session_sweeper,
    },
    args::Args,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone()).await?;

    let config = HealthSuiteConfig::from(args.as_ref().clone());
    let sweeper = spawn_session_sweeper(app_state.service.clone(), config.session);

    let app = router(app_state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Health suite listening on http://{}{}", addr, args.server.root_path);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutting down gracefully");
        })
        .await?;

    sweeper.abort();

    Ok(())
}
