use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Console-only logging, used when observability is disabled.
///
/// - **Log Level**: `LOG_LEVEL` (default: "info"), overridden entirely by `RUST_LOG`
/// - **Filtering**: noisy dependencies are held at warn
pub fn init_basic_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "contentops={},tower_http=warn,hyper=warn,reqwest=warn,sqlx=warn",
            log_level
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter);

    // try_init: tests and embedders may already have installed a subscriber
    let _ = tracing_subscriber::registry().with(console_layer).try_init();

    eprintln!(
        "ℹ️  Observability disabled - console logging only (OBSERVABILITY_ENABLED=false or feature not compiled)"
    );
}
