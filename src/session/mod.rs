//! Authenticated identity and role, derived once per login.
//!
//! The bearer token is decoded a single time when the session is established;
//! consumers read the role from [`SessionContext`] instead of re-parsing the
//! token. Signature verification stays with the API.

use std::fmt;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ExpenseError, Result};
use crate::utils::Clock;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Premium,
    Admin,
    /// A role claim this crate does not know.
    Other,
}

impl Role {
    pub fn from_claim(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "user" => Role::User,
            "premium" => Role::Premium,
            "admin" => Role::Admin,
            _ => Role::Other,
        }
    }

    /// Any signed-in role enters user areas; other areas need that exact role, or admin.
    pub fn satisfies(&self, required: Role) -> bool {
        match required {
            Role::User => true,
            other => *self == other || *self == Role::Admin,
        }
    }

    /// Vehicles the account may register, `None` when unlimited.
    pub fn max_vehicles(&self) -> Option<usize> {
        match self {
            Role::User => Some(1),
            Role::Premium => Some(2),
            Role::Admin | Role::Other => None,
        }
    }

    pub fn can_add_vehicle(&self, current_count: usize) -> bool {
        self.max_vehicles().map_or(true, |limit| current_count < limit)
    }
}

#[derive(Debug, Deserialize)]
struct TokenClaims {
    #[serde(default, alias = "userId", alias = "_id")]
    id: Option<Value>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    exp: Option<i64>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    user_id: Option<String>,
    role: Role,
    expires_at: Option<DateTime<Utc>>,
    token: String,
}

impl Session {
    /// Decodes the claims segment of a JWT-shaped bearer token.
    pub fn from_token(token: &str) -> Result<Self> {
        let token = token.trim();
        let token = token.strip_prefix(BEARER_PREFIX).unwrap_or(token).trim();

        let payload = token
            .split('.')
            .nth(1)
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| ExpenseError::Session("token has no claims segment".into()))?;
        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|err| ExpenseError::Session(format!("claims are not base64url: {err}")))?;
        let claims: TokenClaims = serde_json::from_slice(&bytes)
            .map_err(|err| ExpenseError::Session(format!("claims are not JSON: {err}")))?;

        let role = claims
            .role
            .as_deref()
            .map(Role::from_claim)
            .ok_or_else(|| ExpenseError::Session("token carries no role".into()))?;
        let user_id = claims.id.and_then(|value| match value {
            Value::String(id) => Some(id),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        });
        let expires_at = claims
            .exp
            .and_then(|seconds| DateTime::<Utc>::from_timestamp(seconds, 0));

        Ok(Self {
            user_id,
            role,
            expires_at,
            token: token.to_string(),
        })
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expiry| now >= expiry)
    }

    pub fn authorization_header(&self) -> String {
        format!("{BEARER_PREFIX}{}", self.token)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("role", &self.role)
            .field("expires_at", &self.expires_at)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Outcome of guarding a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Granted,
    RedirectToLogin,
    RedirectToHome,
}

/// Holds the current session for the lifetime of the app. Constructed once and
/// handed to consumers by reference.
#[derive(Debug, Default)]
pub struct SessionContext {
    session: Option<Session>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any existing session. A rejected token leaves the context signed out.
    pub fn login(&mut self, token: &str) -> Result<&Session> {
        self.session = None;
        let session = Session::from_token(token)?;
        tracing::info!(role = ?session.role, user = ?session.user_id, "session established");
        Ok(&*self.session.insert(session))
    }

    pub fn logout(&mut self) {
        if self.session.take().is_some() {
            tracing::info!("session cleared");
        }
    }

    /// The stored session, expired or not.
    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The stored session if it has not expired.
    pub fn active(&self, clock: &dyn Clock) -> Option<&Session> {
        let now = clock.now();
        self.session.as_ref().filter(|session| !session.is_expired(now))
    }

    pub fn role(&self, clock: &dyn Clock) -> Option<Role> {
        self.active(clock).map(Session::role)
    }

    pub fn is_authenticated(&self, clock: &dyn Clock) -> bool {
        self.active(clock).is_some()
    }

    pub fn is_admin(&self, clock: &dyn Clock) -> bool {
        self.role(clock) == Some(Role::Admin)
    }

    pub fn authorize(&self, required: Option<Role>, clock: &dyn Clock) -> RouteAccess {
        match (self.role(clock), required) {
            (None, _) => RouteAccess::RedirectToLogin,
            (Some(role), Some(required)) if !role.satisfies(required) => {
                RouteAccess::RedirectToHome
            }
            _ => RouteAccess::Granted,
        }
    }

    pub fn authorization_header(&self, clock: &dyn Clock) -> Option<String> {
        self.active(clock).map(Session::authorization_header)
    }

    /// Whether the signed-in account may register another vehicle. Signed out is never allowed.
    pub fn can_add_vehicle(&self, current_count: usize, clock: &dyn Clock) -> bool {
        self.role(clock)
            .is_some_and(|role| role.can_add_vehicle(current_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(claims: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(claims)
        )
    }

    #[test]
    fn decodes_role_and_id() {
        let session = Session::from_token(&token(r#"{"id":"u-1","role":"admin"}"#)).unwrap();
        assert_eq!(session.role(), Role::Admin);
        assert_eq!(session.user_id(), Some("u-1"));
        assert_eq!(session.expires_at(), None);
    }

    #[test]
    fn accepts_bearer_prefix_and_numeric_ids() {
        let raw = format!("Bearer {}", token(r#"{"userId":42,"role":"user"}"#));
        let session = Session::from_token(&raw).unwrap();
        assert_eq!(session.user_id(), Some("42"));
        assert!(session.authorization_header().starts_with("Bearer ey"));
    }

    #[test]
    fn rejects_tokens_without_claims() {
        assert!(matches!(
            Session::from_token("opaque"),
            Err(ExpenseError::Session(_))
        ));
        assert!(Session::from_token(&token(r#"{"id":"u-1"}"#)).is_err());
        assert!(Session::from_token("a.!!!.c").is_err());
    }

    #[test]
    fn role_claims() {
        assert_eq!(Role::from_claim("Premium"), Role::Premium);
        assert_eq!(Role::from_claim("moderator"), Role::Other);
        assert!(Role::Admin.satisfies(Role::User));
        assert!(!Role::User.satisfies(Role::Admin));
        assert!(!Role::Premium.satisfies(Role::Admin));
        assert!(!Role::Other.satisfies(Role::Admin));
        assert!(Role::Admin.satisfies(Role::Premium));
        assert!(!Role::User.satisfies(Role::Premium));
    }

    #[test]
    fn vehicle_limits_by_role() {
        assert_eq!(Role::User.max_vehicles(), Some(1));
        assert_eq!(Role::Premium.max_vehicles(), Some(2));
        assert_eq!(Role::Admin.max_vehicles(), None);
        assert_eq!(Role::Other.max_vehicles(), None);
        assert!(Role::Premium.can_add_vehicle(1));
        assert!(!Role::Premium.can_add_vehicle(2));
        assert!(Role::Other.can_add_vehicle(50));
    }

    #[test]
    fn debug_redacts_token() {
        let session = Session::from_token(&token(r#"{"role":"user"}"#)).unwrap();
        let rendered = format!("{session:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("signature"));
    }
}
