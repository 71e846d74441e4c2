//! Zentiment: a Zellij plugin that asks a remote model for the sentiment of a
//! piece of text.
//!
//! The user types into a text area and presses Enter. The plugin POSTs the
//! text to `{api_base}/predict`, waits for the reply, and shows the returned
//! label as a colored badge, or an alert when something went wrong.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← web_request, keys
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Request lifecycle (RequestController)            │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Client Layer  │   │ Domain Layer  │
//! │ (ui/)         │   │ (client/)     │   │ (domain/)     │
//! │ - Rendering   │   │ - Endpoint    │   │ - States      │
//! │ - Theming     │   │ - Wire types  │   │ - Labels      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zentiment.wasm" {
//!         api_base "http://127.0.0.1:5000"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! Without `api_base` the `ZENTIMENT_API_BASE` environment variable is
//! consulted, then `http://127.0.0.1:5000`.
//!
//! # Example
//!
//! ```rust
//! use zentiment::client::ExchangeReply;
//! use zentiment::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! for c in "I love playing Borderlands".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//!
//! let (_, actions) = handle_event(&mut state, &Event::Analyze)?;
//! let Some(Action::SendPrediction(request)) = actions.first() else {
//!     unreachable!()
//! };
//!
//! let reply = ExchangeReply::response(200, r#"{"sentiment": "Positive"}"#);
//! handle_event(&mut state, &Event::ExchangeCompleted { attempt: request.attempt, reply })?;
//! assert_eq!(state.controller.label().map(|l| l.as_str()), Some("Positive"));
//! # Ok::<(), zentiment::ZentimentError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Host permission**: `WebAccess`

pub mod app;
pub mod client;
pub mod domain;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, RequestController};
pub use domain::{AnalysisError, RequestState, Result, SentimentLabel, ZentimentError};
pub use ui::Theme;

use client::{Endpoint, API_BASE_ENV};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/zentiment.wasm" {
///     api_base "https://sentiment.example.com"
///     theme "catppuccin-latte"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the classification backend.
    pub api_base: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zentiment::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_base".to_string(), "http://10.0.0.2:8080/".to_string());
    /// map.insert("theme".to_string(), "catppuccin-frappe".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.endpoint().predict_url(), "http://10.0.0.2:8080/predict");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        Self {
            api_base: value("api_base"),
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
        }
    }

    /// Resolves the backend from `api_base`, then `ZENTIMENT_API_BASE`, then
    /// the built-in default.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        let from_env = std::env::var(API_BASE_ENV).ok();
        Endpoint::resolve([self.api_base.as_deref(), from_env.as_deref()])
    }

    /// Loads the configured theme, falling back to the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates the session state for a configuration.
///
/// Web access starts as pending; the shim requests it on load.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let endpoint = config.endpoint();
    tracing::debug!(api_base = endpoint.base(), "initializing zentiment plugin");

    AppState::new(endpoint, config.theme())
}
