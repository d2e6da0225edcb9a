use clap::Parser;
use lemmastat::{Analyzer, PipelineRegistry};
use lemmastat_server::{app, AppState, ServerConfig};
use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::parse();

    let registry = Arc::new(PipelineRegistry::new(config.model_provider()));
    if config.warm {
        let registry = registry.clone();
        tokio::task::spawn_blocking(move || registry.warm()).await?;
    }

    let analyzer = Arc::new(Analyzer::new(config.analyzer_config(), registry));
    let router = app(AppState::new(analyzer, config.timeout()));

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await?;

    Ok(())
}
