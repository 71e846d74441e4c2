//! OpenTelemetry tracing exported to a local OTLP JSON file.
//!
//! The plugin runs inside the Zellij WASM sandbox with no collector to talk
//! to, so finished spans are serialized as OTLP/JSON lines and appended to
//! `zentiment-otlp.json` under [`data_dir`]. The file rotates at 5 MiB and
//! keeps three numbered backups.
//!
//! Every failure in here is swallowed: tracing must never affect the plugin.

mod exporter;
mod init;
mod otlp_json;
mod sink;

pub use init::init_tracing;

use std::path::PathBuf;

/// Name reported as `service.name` and as the instrumentation scope.
pub const SERVICE_NAME: &str = "Zentiment";

/// Plugin data directory as seen from inside the sandbox.
///
/// Zellij maps the host home directory to `/host`.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zentiment")
}
