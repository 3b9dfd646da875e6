//! Session state owned by the [`AuthenticationManager`](crate::AuthenticationManager).

use chrono::{DateTime, Duration, Utc};

use billingplatform_client::{Endpoints, TransportContext};

use crate::credentials::{ClientCredentials, Credentials, TokenType};
use crate::oauth::TokenResponse;

/// How long before expiry an OAuth token is renewed.
pub const REFRESH_MARGIN_SECS: i64 = 30;

/// An environment, the credentials used against it, and the transport
/// context of the current login.
///
/// The transport context holds a session or bearer header iff the session
/// is authenticated.
#[derive(Debug, Clone)]
pub struct Session {
    endpoints: Endpoints,
    credentials: Credentials,
    authenticated: bool,
    transport_context: TransportContext,
    refresh_token: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// An unauthenticated session for `endpoints`.
    pub fn new(endpoints: Endpoints, credentials: Credentials) -> Self {
        Self {
            endpoints,
            credentials,
            authenticated: false,
            transport_context: TransportContext::new(),
            refresh_token: None,
            expires_at: None,
        }
    }

    /// URL builder for the environment.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &str {
        self.endpoints.base_url()
    }

    /// The credentials logins are made with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// True between a successful login and logout.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Headers attached to every request of this login.
    pub fn transport_context(&self) -> &TransportContext {
        &self.transport_context
    }

    /// When the OAuth access token expires, if the server said.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// True when a refresh token is held.
    pub fn has_refresh_token(&self) -> bool {
        self.refresh_token.is_some()
    }

    pub(crate) fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Install the transport context of a successful login, replacing any
    /// previous one.
    pub(crate) fn establish(
        &mut self,
        transport_context: TransportContext,
        refresh_token: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) {
        self.transport_context = transport_context;
        self.refresh_token = refresh_token;
        self.expires_at = expires_at;
        self.authenticated = true;
    }

    /// Install a bearer token, keeping the refresh token only for
    /// [`TokenType::RefreshToken`] credentials.
    pub(crate) fn establish_token(
        &mut self,
        credentials: &ClientCredentials,
        token: TokenResponse,
        previous_refresh_token: Option<String>,
    ) {
        let expires_at = token.expires_at(Utc::now());
        let refresh_token = match credentials.token_type() {
            TokenType::RefreshToken => token.refresh_token.or(previous_refresh_token),
            TokenType::AccessToken => None,
        };
        self.establish(
            TransportContext::bearer(&token.access_token),
            refresh_token,
            expires_at,
        );
    }

    /// Reset to unauthenticated, returning the transport context that was active.
    pub(crate) fn take(&mut self) -> TransportContext {
        self.authenticated = false;
        self.refresh_token = None;
        self.expires_at = None;
        std::mem::take(&mut self.transport_context)
    }

    /// True when the token expires within the refresh margin and can be renewed.
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        self.authenticated
            && self.refresh_token.is_some()
            && self
                .expires_at
                .is_some_and(|at| at <= now + Duration::seconds(REFRESH_MARGIN_SECS))
    }

    /// True when the token carries an expiry that has passed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    /// Immutable snapshot handed to request executors.
    pub fn view(&self) -> SessionView {
        SessionView {
            endpoints: self.endpoints.clone(),
            transport_context: self.transport_context.clone(),
        }
    }
}

/// Snapshot of an authenticated session, taken once per request.
#[derive(Debug, Clone)]
pub struct SessionView {
    /// URL builder for the environment.
    pub endpoints: Endpoints,
    /// Session or bearer headers for the request.
    pub transport_context: TransportContext,
}
