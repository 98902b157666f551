use axum::{
    extract::{MatchedPath, Request},
    http::{HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use opentelemetry::{KeyValue, global, trace::TraceError};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    propagation::TraceContextPropagator,
    runtime,
    trace::{RandomIdGenerator, Sampler, Tracer},
};
use opentelemetry_semantic_conventions::resource::{SERVICE_NAME, SERVICE_VERSION};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::{Instrument, Subscriber, debug, error, field, info, info_span, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const REQUEST_ID_HEADER: &str = "x-request-id";
const MAX_REQUEST_ID_LEN: usize = 128;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true)
    })
}

/// Keeps a caller-supplied `x-request-id` if it is a plain token, otherwise mints a UUID.
fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| {
            !id.is_empty()
                && id.len() <= MAX_REQUEST_ID_LEN
                && id
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        })
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Completed,
    Rejected,
    Failed,
}

impl Outcome {
    fn of(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::Failed
        } else if status.is_client_error() {
            Self::Rejected
        } else {
            Self::Completed
        }
    }
}

/// Runs the request inside a `request` span keyed by its request id.
///
/// Handler and service-client events nest under that span, so one id ties
/// together everything a request logged. The id is echoed in `x-request-id`.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = request_id(req.headers());
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %path,
        status = field::Empty,
    );
    span.in_scope(|| debug!("Incoming request"));

    let mut response = next.run(req).instrument(span.clone()).await;
    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;
    span.record("status", status.as_u16());

    span.in_scope(|| match Outcome::of(status) {
        Outcome::Completed => info!(latency_ms, "Request completed"),
        Outcome::Rejected => warn!(latency_ms, "Request rejected"),
        Outcome::Failed => error!(latency_ms, "Request failed"),
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Exporter and log-file settings, read from the environment.
#[derive(Debug, Clone)]
struct TelemetrySettings {
    service_name: String,
    environment: String,
    otlp_endpoint: String,
    log_dir: PathBuf,
}

impl TelemetrySettings {
    fn from_env() -> Self {
        let var = |key: &str, default: &str| std::env::var(key).unwrap_or_else(|_| default.to_string());
        Self {
            service_name: var("OTEL_SERVICE_NAME", "contentops"),
            environment: var("ENVIRONMENT", "development"),
            otlp_endpoint: var("OTEL_EXPORTER_OTLP_ENDPOINT", "http://localhost:4317"),
            log_dir: PathBuf::from(var("LOG_DIR", "storage/logs")),
        }
    }
}

fn init_tracer(settings: &TelemetrySettings) -> Result<Tracer, TraceError> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    let resource = Resource::new(vec![
        KeyValue::new(SERVICE_NAME, settings.service_name.clone()),
        KeyValue::new(SERVICE_VERSION, env!("CARGO_PKG_VERSION")),
        KeyValue::new("environment", settings.environment.clone()),
    ]);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(settings.otlp_endpoint.clone()),
        )
        .with_trace_config(
            opentelemetry_sdk::trace::Config::default()
                .with_sampler(Sampler::AlwaysOn)
                .with_id_generator(RandomIdGenerator::default())
                .with_resource(resource),
        )
        .install_batch(runtime::Tokio)
}

/// Daily `<service>.log` with errors only, human-readable.
fn error_log_layer<S>(dir: &Path, service_name: &str) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(RollingFileAppender::new(
            Rotation::DAILY,
            dir,
            format!("{}.log", service_name),
        ))
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_filter(LevelFilter::ERROR)
}

/// Daily `<service>.json` for log shippers; each line carries its span list.
fn json_log_layer<S>(dir: &Path, service_name: &str) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .json()
        .with_writer(RollingFileAppender::new(
            Rotation::DAILY,
            dir,
            format!("{}.json", service_name),
        ))
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(LevelFilter::INFO)
}

/// Installs the global subscriber: console output, the error and JSON log
/// files under `LOG_DIR`, and the OTLP exporter when it starts.
pub fn init_tracing() {
    if !is_observability_enabled() {
        crate::basic_logging::init_basic_console_logging();
        return;
    }

    let settings = TelemetrySettings::from_env();
    if let Err(e) = std::fs::create_dir_all(&settings.log_dir) {
        eprintln!(
            "Failed to create {}: {}. Falling back to console logging",
            settings.log_dir.display(),
            e
        );
        crate::basic_logging::init_basic_console_logging();
        return;
    }

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("contentops=info,tower_http=warn,hyper=info,tonic=info")
    });
    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    let otel_layer = match init_tracer(&settings) {
        Ok(tracer) => Some(tracing_opentelemetry::layer().with_tracer(tracer)),
        Err(e) => {
            eprintln!("Failed to initialize OpenTelemetry: {}. Continuing without export", e);
            None
        }
    };
    let exporting = otel_layer.is_some();

    tracing_subscriber::registry()
        .with(console_layer)
        .with(error_log_layer(&settings.log_dir, &settings.service_name))
        .with(json_log_layer(&settings.log_dir, &settings.service_name))
        .with(otel_layer)
        .init();

    info!(
        service = %settings.service_name,
        otlp_endpoint = %settings.otlp_endpoint,
        exporting,
        "Tracing initialized"
    );
}

pub async fn shutdown_tracer() {
    if !is_observability_enabled() {
        return;
    }

    info!("Shutting down OpenTelemetry tracer");
    global::shutdown_tracer_provider();
}
