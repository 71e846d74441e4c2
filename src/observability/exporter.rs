//! `SpanExporter` that appends OTLP JSON batches to a rotating file.

use super::otlp_json::OtlpJson;
use super::sink::RotatingSink;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

#[derive(Debug)]
struct FileSpanExporter {
    sink: RotatingSink,
    encoder: OtlpJson,
    is_shutdown: bool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("exporter is shut down"))
        } else {
            let line = self.encoder.encode_batch(&batch).to_string();
            self.sink
                .append_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.encoder = OtlpJson::new(resource.clone());
    }
}

/// Builds a provider that exports every span synchronously to `file_path`.
///
/// The WASM sandbox has no background threads, so no batch processor.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter {
        sink: RotatingSink::new(file_path),
        encoder: OtlpJson::new(resource.clone()),
        is_shutdown: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
