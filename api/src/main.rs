use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};

use crate::application::http::server::http_server::{router, state};
use crate::args::Args;
use crate::logging::init_logger;

mod application;
mod args;
mod logging;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    if args.llm.gemini_api_key.is_empty() {
        warn!("GEMINI_API_KEY is not set; assistant endpoints will return fallback messages");
    }

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port)
        .parse()
        .context("invalid server host or port")?;

    let app_state = state(args.clone())?;

    // Installed once here: the recorder is process-global.
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
    let app = router(app_state)?
        .route(
            &format!("{}/metrics", args.server.root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer);

    info!(env = ?args.env, "verdura-api listening on {}", addr);

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .context("server error")?;

    Ok(())
}
