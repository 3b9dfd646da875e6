//! Establishing and tearing down sessions.

use chrono::Utc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument, warn};

use billingplatform_client::{
    BpHttpClient, ClientConfig, Endpoints, Error, ErrorKind, Operation, Result, TransportContext,
};

use crate::credentials::{ConnectionProfile, Credentials};
use crate::hook::LogoutHook;
use crate::login::{self, LoginRequest};
use crate::oauth::{self, TokenResponse};
use crate::session::{Session, SessionView};

/// Owns the [`Session`] and every transition of it.
///
/// Network calls are made without holding the session lock. Login writes
/// the session only after success, so a login that is aborted leaves the
/// manager unauthenticated. Logout clears the session before the logout
/// request is sent. Token refreshes run one at a time.
#[derive(Debug)]
pub struct AuthenticationManager {
    http: BpHttpClient,
    session: RwLock<Session>,
    refresh_lock: Mutex<()>,
    hook: LogoutHook,
}

impl AuthenticationManager {
    /// Create an unauthenticated manager for the environment at `base_url`.
    pub fn new(
        base_url: impl AsRef<str>,
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        let endpoints = Endpoints::new(base_url)?;
        let hook = LogoutHook::new(config.logout_at_exit);
        let http = BpHttpClient::new(config)?;

        Ok(Self {
            http,
            session: RwLock::new(Session::new(endpoints, credentials)),
            refresh_lock: Mutex::new(()),
            hook,
        })
    }

    /// Create a manager from a loaded [`ConnectionProfile`].
    pub fn from_profile(profile: ConnectionProfile, config: ClientConfig) -> Result<Self> {
        Self::new(profile.base_url, profile.credentials, config)
    }

    /// The HTTP client shared with request executors.
    pub fn http(&self) -> &BpHttpClient {
        &self.http
    }

    /// The logout-at-shutdown guard.
    pub fn hook(&self) -> &LogoutHook {
        &self.hook
    }

    /// A copy of the current session.
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// The base URL, unless the session is locked for writing.
    pub fn try_base_url(&self) -> Option<String> {
        self.session
            .try_read()
            .ok()
            .map(|session| session.base_url().to_string())
    }

    /// True while a login is active.
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    /// Log in with whichever strategy the credentials select.
    pub async fn authenticate(&self) -> Result<()> {
        let is_password = self.session.read().await.credentials().is_password();
        if is_password {
            self.login().await
        } else {
            self.oauth_login().await
        }
    }

    /// Username/password login against `/rest/2.0/login`.
    #[instrument(skip(self))]
    pub async fn login(&self) -> Result<()> {
        let (url, credentials) = {
            let session = self.session.read().await;
            (session.endpoints().login_url(), session.credentials().clone())
        };
        let Credentials::Password(credentials) = credentials else {
            return Err(Error::invalid_input(
                Operation::Login,
                "password login requires username/password credentials",
            ));
        };

        let request = self.http.post(Operation::Login, url).json(&LoginRequest {
            username: credentials.username(),
            password: credentials.password(),
        })?;
        let body = self.http.send_json(request).await?;
        let session_id = login::session_id(body)?;

        self.session
            .write()
            .await
            .establish(TransportContext::session(session_id), None, None);
        self.register_exit_hook();

        info!(username = credentials.username(), "Login successful");
        Ok(())
    }

    /// OAuth client-credentials login against `/auth/1.0/authenticate`.
    #[instrument(skip(self))]
    pub async fn oauth_login(&self) -> Result<()> {
        let (url, credentials) = {
            let session = self.session.read().await;
            (session.endpoints().oauth_url(), session.credentials().clone())
        };
        let Credentials::ClientCredentials(credentials) = credentials else {
            return Err(Error::invalid_input(
                Operation::Login,
                "OAuth login requires client_id/client_secret credentials",
            ));
        };

        let request = self
            .http
            .post(Operation::Login, url)
            .form(&oauth::client_credentials_grant(&credentials))?;
        let token = TokenResponse::from_body(self.http.send_json(request).await?)?;

        self.session
            .write()
            .await
            .establish_token(&credentials, token, None);
        self.register_exit_hook();

        info!(client_id = credentials.client_id(), "OAuth login successful");
        Ok(())
    }

    /// Renew the access token with the held refresh token.
    ///
    /// On failure the current session is left as it was.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<()> {
        let _guard = self.refresh_lock.lock().await;
        self.refresh_token_grant().await
    }

    /// Send the refresh-token grant. Callers hold `refresh_lock`.
    async fn refresh_token_grant(&self) -> Result<()> {
        let (url, credentials, refresh_token) = {
            let session = self.session.read().await;
            if !session.is_authenticated() {
                return Err(Error::new(ErrorKind::NotAuthenticated(Operation::Login)));
            }
            let Some(refresh_token) = session.refresh_token() else {
                return Err(Error::invalid_input(
                    Operation::Login,
                    "session holds no refresh token",
                ));
            };
            (
                session.endpoints().oauth_url(),
                session.credentials().clone(),
                refresh_token.to_string(),
            )
        };
        let Credentials::ClientCredentials(credentials) = credentials else {
            return Err(Error::invalid_input(
                Operation::Login,
                "token refresh requires client_id/client_secret credentials",
            ));
        };

        let request = self
            .http
            .post(Operation::Login, url)
            .form(&oauth::refresh_token_grant(&credentials, &refresh_token))?;
        let token = TokenResponse::from_body(self.http.send_json(request).await?)?;

        let mut session = self.session.write().await;
        if !session.is_authenticated() {
            // Logged out while the refresh was in flight.
            return Err(Error::new(ErrorKind::NotAuthenticated(Operation::Login)));
        }
        session.establish_token(&credentials, token, Some(refresh_token));

        debug!("Access token refreshed");
        Ok(())
    }

    /// End the session. A no-op when not authenticated.
    ///
    /// Local state is cleared before the request is sent, so the manager is
    /// unauthenticated afterwards whatever the outcome.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        let (url, context) = {
            let mut session = self.session.write().await;
            if !session.is_authenticated() {
                debug!("Not authenticated, skipping logout");
                return Ok(());
            }
            (session.endpoints().logout_url(), session.take())
        };

        let request = self.http.post(Operation::Logout, url).context(&context);
        let response = self.http.execute(request).await?;
        billingplatform_client::translate::expect_ok(response).await?;

        info!("Logout successful");
        Ok(())
    }

    /// Snapshot of the session for an executor call.
    ///
    /// Renews an expiring OAuth token first. A failed renewal is only an
    /// error once the current token has expired. Fails with
    /// [`ErrorKind::NotAuthenticated`] when there is no session.
    pub async fn session_view(&self, operation: Operation) -> Result<SessionView> {
        if self.session.read().await.needs_refresh(Utc::now()) {
            self.refresh_if_needed(operation).await?;
        }

        let session = self.session.read().await;
        if !session.is_authenticated() {
            return Err(Error::new(ErrorKind::NotAuthenticated(operation)));
        }
        Ok(session.view())
    }

    async fn refresh_if_needed(&self, operation: Operation) -> Result<()> {
        let _guard = self.refresh_lock.lock().await;
        // Another caller may have refreshed while we waited for the lock.
        if !self.session.read().await.needs_refresh(Utc::now()) {
            return Ok(());
        }

        let Err(err) = self.refresh_token_grant().await else {
            return Ok(());
        };
        if self.session.read().await.is_expired(Utc::now()) {
            return Err(Error::with_source(
                ErrorKind::NotAuthenticated(operation),
                err,
            ));
        }
        warn!(error = %err, %operation, "Token refresh failed, using current token");
        Ok(())
    }

    /// Register the shutdown logout. Returns true the first time only.
    pub fn register_exit_hook(&self) -> bool {
        let registered = self.hook.register();
        if registered {
            debug!("Logout hook registered");
        }
        registered
    }

    /// Run the shutdown logout if the hook is registered and has not fired.
    ///
    /// Errors are logged and swallowed. Returns true if logout was attempted.
    pub async fn shutdown(&self) -> bool {
        if !self.hook.try_fire() {
            return false;
        }
        if let Err(err) = self.logout().await {
            warn!(error = %err, "Logout at shutdown failed");
        }
        true
    }
}
