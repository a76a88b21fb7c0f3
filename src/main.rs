use std::sync::Arc;

use ugc_ad_studio::config::AppConfig;
use ugc_ad_studio::{build_app, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_logging()?;

    let config = AppConfig::from_env()?;

    for key in config.missing_credentials() {
        tracing::warn!("{} not found. Calls to that provider will fail at authentication.", key);
    }
    tracing::info!(
        "Render polling: {} attempts, {}ms interval, {:?} backoff",
        config.poll_policy.max_attempts,
        config.poll_policy.interval.as_millis(),
        config.poll_policy.backoff
    );
    tracing::info!("Avatar base URL: {}", config.public_base_url);

    let bind_addr = config.bind_addr.clone();
    let app = build_app(Arc::new(AppState::from_config(config)));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

// Logging: JSON when LOG_FORMAT=json, human-readable otherwise
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug,ugc_ad_studio=trace,reqwest=info,hyper=info,tower=info".to_string()
        } else {
            "info,ugc_ad_studio=info,reqwest=warn,hyper=warn,tower=warn".to_string()
        }
    });

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log_level))?;

    let fmt_layer = if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("🎬 UGC ad studio starting up...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Build mode: {}", if cfg!(debug_assertions) { "development" } else { "production" });

    Ok(())
}
