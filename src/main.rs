#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

use folio_contact::config::Config;
use folio_contact::{AppBuilder, telemetry};
use std::net::SocketAddr;
use tracing::Instrument;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    let telemetry_guard = telemetry::init_telemetry(&config.telemetry)?;

    folio_contact::setup_panic_hook();

    let app = AppBuilder::new(config.clone()).build().instrument(tracing::info_span!("boot_server")).await?;

    let result = if folio_contact::is_lambda_runtime() {
        tracing::info!(path = %config.server.route_path, "running inside AWS Lambda");
        lambda_http::run(app).await.map_err(|e| anyhow::anyhow!(e))
    } else {
        serve(&config, app).await
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Server error");
    }

    telemetry_guard.shutdown();
    result
}

async fn serve(config: &Config, app: axum::Router) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(address = %addr, path = %config.server.route_path, "listening");

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(folio_contact::shutdown_signal())
        .await?;

    Ok(())
}
