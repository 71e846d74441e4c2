//! Web access permission state.
//!
//! Zellij plugins must be granted `WebAccess` before `web_request` works. The
//! answer arrives asynchronously after load, so the plugin starts `Pending`.

/// Whether the host allows this plugin to issue web requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WebAccess {
    /// The permission prompt has not been answered yet.
    #[default]
    Pending,
    Granted,
    Denied,
}

impl WebAccess {
    /// Description used to fail an attempt that cannot reach the network.
    #[must_use]
    pub const fn blocked_reason(self) -> Option<&'static str> {
        match self {
            Self::Granted => None,
            Self::Pending => Some("Waiting for web access permission"),
            Self::Denied => Some("Web access permission was not granted"),
        }
    }
}
