//! OTLP/JSON encoding of finished spans.
//!
//! Produces one `resourceSpans` document per export batch, following the
//! OTLP JSON mapping: ids as lowercase hex, timestamps as decimal nanosecond
//! strings, attribute values wrapped in typed objects.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{SystemTime, UNIX_EPOCH};

use super::SERVICE_NAME;

pub struct OtlpJson {
    resource: Resource,
}

impl OtlpJson {
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub fn encode_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attributes: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| attribute(key.as_str(), value))
            .collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attributes },
                "scopeSpans": [{
                    "scope": { "name": SERVICE_NAME },
                    "spans": batch.iter().map(encode_span).collect::<Vec<_>>(),
                }],
            }],
        })
    }
}

impl std::fmt::Debug for OtlpJson {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtlpJson").finish_non_exhaustive()
    }
}

fn encode_span(span: &SpanData) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let (code, message) = status(&span.status);

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": kind(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": span.events.iter().map(encode_event).collect::<Vec<_>>(),
        "links": span.links.iter().map(encode_link).collect::<Vec<_>>(),
        "status": { "code": code, "message": message },
    })
}

fn encode_event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": attributes(&event.attributes),
    })
}

fn encode_link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": attributes(&link.attributes),
    })
}

fn attributes(pairs: &[KeyValue]) -> Vec<JsonValue> {
    pairs
        .iter()
        .map(|kv| attribute(kv.key.as_str(), &kv.value))
        .collect()
}

fn attribute(key: &str, value: &Value) -> JsonValue {
    json!({ "key": key, "value": any_value(value) })
}

/// Arrays are flattened to their display string.
fn any_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(_) => json!({ "stringValue": value.to_string() }),
    }
}

const fn kind(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default()
        .to_string()
}
