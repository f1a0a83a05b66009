use crate::bridge::SessionService;
use crate::cookie::{CookieJar, CookieStore};

use super::config::SESSION_COOKIE_NAME;
use super::errors::SessionError;

/// How a bootstrap pass concluded.
///
/// The identifier is carried so the embedding caller can decide whether to
/// persist it; the bootstrapper itself never writes the session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// A session cookie was already present; no bridge calls were made.
    /// The recorded identifier is assumed valid without a liveness check.
    Existing(String),
    /// A fresh identifier was obtained and registered with the backend.
    Registered(String),
    /// A fresh identifier was obtained but the backend rejected its
    /// registration. The rejection has already been logged.
    RegistrationFailed(String),
}

impl BootstrapOutcome {
    pub fn session_id(&self) -> &str {
        match self {
            Self::Existing(id) | Self::Registered(id) | Self::RegistrationFailed(id) => id,
        }
    }
}

/// Ensures one session identifier exists per page load, running the
/// obtain/register handshake against the host bridge only when the session
/// cookie is absent.
pub struct SessionBootstrapper<J: CookieJar, S: SessionService> {
    cookies: CookieStore<J>,
    service: S,
}

impl<J: CookieJar, S: SessionService> SessionBootstrapper<J, S> {
    pub fn new(cookies: CookieStore<J>, service: S) -> Self {
        Self { cookies, service }
    }

    /// Single bootstrap pass: check the cookie, then obtain and register a
    /// fresh identifier if none is recorded.
    ///
    /// The two bridge calls are strictly sequential; registration is only
    /// attempted once an identifier has been obtained. An obtain failure
    /// surfaces as `Err`; a registration failure is logged and folded into
    /// the outcome, so nothing escapes past this call.
    pub async fn bootstrap(&self) -> Result<BootstrapOutcome, SessionError> {
        let existing = self.cookies.get_cookie(&SESSION_COOKIE_NAME);
        if !existing.is_empty() {
            tracing::debug!("Session cookie present, skipping handshake");
            return Ok(BootstrapOutcome::Existing(existing));
        }

        let session_id = self.service.get_uuid().await?;

        match self.service.start_session(&session_id).await {
            Ok(()) => {
                tracing::debug!("Registered session {session_id}");
                Ok(BootstrapOutcome::Registered(session_id))
            }
            Err(e) => {
                tracing::error!("Failed to register session {session_id}: {e}");
                Ok(BootstrapOutcome::RegistrationFailed(session_id))
            }
        }
    }

    /// The cookie store this bootstrapper reads from, for callers that
    /// choose to persist the identifier themselves.
    pub fn cookies(&self) -> &CookieStore<J> {
        &self.cookies
    }
}
