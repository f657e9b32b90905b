//! Classification of failed API calls into user-facing categories.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Network,
    Server,
    Validation,
    Auth,
    Unknown,
}

/// Severity used when surfacing a failure as a toast notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub kind: FailureKind,
    pub status: Option<u16>,
    pub server_message: Option<String>,
}

impl ApiFailure {
    /// Classifies a failed request.
    ///
    /// `status` is the HTTP status when a response arrived, `server_message` the
    /// `error` field of its body, `transport_message` the client-side error text,
    /// and `offline` whether the host reports no connectivity.
    pub fn classify(
        status: Option<u16>,
        server_message: Option<&str>,
        transport_message: Option<&str>,
        offline: bool,
    ) -> Self {
        let kind = if offline || mentions(transport_message, "network") {
            FailureKind::Network
        } else {
            match status {
                Some(401) | Some(403) => FailureKind::Auth,
                Some(400) if mentions(server_message, "token") => FailureKind::Auth,
                Some(400) | Some(422) => FailureKind::Validation,
                Some(code) if code >= 500 => FailureKind::Server,
                _ => FailureKind::Unknown,
            }
        };

        Self {
            kind,
            status,
            server_message: server_message.map(str::to_string),
        }
    }

    pub fn user_message(&self) -> String {
        match self.kind {
            FailureKind::Network => {
                "Network error. Please check your connection and try again.".into()
            }
            FailureKind::Server => "Server error. Our team has been notified.".into(),
            FailureKind::Validation => self
                .server_message
                .clone()
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| "Please check your input and try again.".into()),
            FailureKind::Auth => "Session expired. Please log in again.".into(),
            FailureKind::Unknown => "An unexpected error occurred. Please try again.".into(),
        }
    }

    pub fn toast_level(&self) -> ToastLevel {
        match self.kind {
            FailureKind::Network | FailureKind::Validation => ToastLevel::Warning,
            _ => ToastLevel::Danger,
        }
    }

    /// Auth failures invalidate the stored session.
    pub fn requires_reauth(&self) -> bool {
        self.kind == FailureKind::Auth
    }
}

fn mentions(text: Option<&str>, needle: &str) -> bool {
    text.map(|value| value.to_lowercase().contains(needle))
        .unwrap_or(false)
}
