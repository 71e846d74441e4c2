//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Zentiment library and the Zellij plugin
//! system. This is the only place that talks to the host: it translates host
//! events into library [`Event`]s and executes the returned [`Action`]s.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; analysis fails fast until granted
//! 3. **Subscribe**: `Key`, `WebRequestResult`, `PermissionRequestResult`
//! 4. **Update**: Map events, delegate to [`handle_event`], run actions
//! 5. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `Key(Enter)` → `Event::Analyze`, `Key(Alt+Enter)` → `Event::Newline`
//! - `Key(Ctrl+l)` → `Event::Clear`, `Key(Esc)` → `Event::CloseFocus`
//! - `WebRequestResult` → `Event::ExchangeCompleted` (attempt id from context)
//! - `PermissionRequestResult` → `Event::PermissionsResult`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zentiment::client::{attempt_from_context, ExchangeReply, PredictRequest};
use zentiment::{handle_event, Action, Config, Event};

register_plugin!(State);

struct State {
    app: zentiment::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zentiment::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zentiment::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        self.app = zentiment::initialize(&config);
        tracing::debug!(api_base = self.app.controller.endpoint().base(), "app state initialized");

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", otel.name = %format!("plugin_update::{event_name}"), event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                let granted = matches!(permissions, PermissionStatus::Granted);
                if !granted {
                    tracing::warn!("web access denied - analysis unavailable");
                }
                Event::PermissionsResult { granted }
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zentiment::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs an event through the library and executes the resulting actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                actions
                    .into_iter()
                    .fold(should_render, |render, action| self.execute_action(action) || render)
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Enter && key.has_modifiers(&[KeyModifier::Alt]) {
            return Some(Event::Newline);
        }
        if key.bare_key == BareKey::Char('l') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::Clear);
        }
        if !key.has_no_modifiers() && !key.has_modifiers(&[KeyModifier::Shift]) {
            return None;
        }

        Some(match key.bare_key {
            BareKey::Enter => Event::Analyze,
            BareKey::Esc => Event::CloseFocus,
            BareKey::Backspace => Event::Backspace,
            BareKey::Delete => Event::Delete,
            BareKey::Left => Event::CursorLeft,
            BareKey::Right => Event::CursorRight,
            BareKey::Home => Event::CursorHome,
            BareKey::End => Event::CursorEnd,
            BareKey::Tab => Event::Char('\t'),
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Replies without an attempt id in their context are not ours.
    fn map_web_request_result(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(attempt) = attempt_from_context(context) else {
            tracing::debug!(status, "web request result without attempt id ignored");
            return None;
        };

        tracing::debug!(attempt, status, body_len = body.len(), "exchange completed");
        Some(Event::ExchangeCompleted {
            attempt,
            reply: ExchangeReply::response(status, body),
        })
    }

    /// Executes an action; returns whether it changed what must be rendered.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: Action) -> bool {
        match action {
            Action::SendPrediction(request) => self.send_prediction(&request),
            Action::CloseFocus => {
                hide_self();
                false
            }
        }
    }

    fn send_prediction(&mut self, request: &PredictRequest) -> bool {
        match request.body() {
            Ok(body) => {
                web_request(
                    &request.url,
                    HttpVerb::Post,
                    PredictRequest::headers(),
                    body,
                    request.context(),
                );
                false
            }
            Err(e) => {
                tracing::warn!(attempt = request.attempt, error = %e, "failed to encode request");
                let reply = ExchangeReply::TransportFailed {
                    description: Some(e.to_string()),
                };
                self.dispatch(&Event::ExchangeCompleted {
                    attempt: request.attempt,
                    reply,
                })
            }
        }
    }
}
