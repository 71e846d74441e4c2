//! Classification endpoint client.
//!
//! The plugin never performs I/O here. This module only describes the
//! exchange: where it goes ([`endpoint`]), what it carries ([`protocol`]) and
//! how a reply is read back ([`reply`]). The Zellij shim performs the actual
//! request with the host's `web_request`.

pub mod endpoint;
pub mod protocol;
pub mod reply;

pub use endpoint::{Endpoint, API_BASE_ENV, DEFAULT_API_BASE};
pub use protocol::{attempt_from_context, PredictRequest, PredictResponse};
pub use reply::ExchangeReply;
