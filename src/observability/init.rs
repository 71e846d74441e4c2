//! Global subscriber setup.

use super::{data_dir, exporter, SERVICE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `trace_level` is not configured.
const DEFAULT_LEVEL: &str = "info";

/// File spans are appended to inside [`data_dir`].
const TRACE_FILE: &str = "zentiment-otlp.json";

/// Installs the global tracing subscriber.
///
/// `config.trace_level` is an `EnvFilter` directive such as `debug` or
/// `zentiment=trace`; an unparsable directive falls back to `info`. Does
/// nothing if the data directory cannot be created or a subscriber is
/// already installed.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let dir = data_dir();
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SERVICE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = exporter::create_tracer_provider(dir.join(TRACE_FILE), resource);
    let tracer = provider.tracer(SERVICE_NAME);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(tracer));

    if subscriber.try_init().is_ok() {
        tracing::debug!(level, "tracing initialized");
    }
}
