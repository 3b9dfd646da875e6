//! Client configuration.

use std::path::PathBuf;
use std::time::Duration;

/// How the HTTP client verifies the server's TLS certificate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CertVerification {
    /// Verify against the platform's trusted roots.
    #[default]
    Enabled,
    /// Accept any certificate. Only for local mock servers.
    Disabled,
    /// Additionally trust the PEM bundle at the given path.
    CaBundle(PathBuf),
}

impl From<bool> for CertVerification {
    fn from(verify: bool) -> Self {
        if verify {
            CertVerification::Enabled
        } else {
            CertVerification::Disabled
        }
    }
}

impl From<PathBuf> for CertVerification {
    fn from(path: PathBuf) -> Self {
        CertVerification::CaBundle(path)
    }
}

/// Configuration for the HTTP client and session lifecycle.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Pool idle timeout.
    pub pool_idle_timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_max_idle_per_host: usize,
    /// User-Agent header value.
    pub user_agent: String,
    /// Accept gzip/deflate compressed responses.
    pub accept_compressed: bool,
    /// Whether to enable request/response tracing.
    pub enable_tracing: bool,
    /// TLS certificate verification mode.
    pub cert_verification: CertVerification,
    /// Log out automatically when the owner shuts the client down.
    pub logout_at_exit: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            user_agent: crate::USER_AGENT.to_string(),
            accept_compressed: true,
            enable_tracing: true,
            cert_verification: CertVerification::default(),
            logout_at_exit: crate::LOGOUT_AT_EXIT,
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set pool idle timeout.
    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    pub fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Accept compressed responses.
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.accept_compressed = enabled;
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Set the certificate verification mode.
    ///
    /// Accepts `true`/`false` or a `PathBuf` to a CA bundle.
    pub fn with_cert_verification(mut self, mode: impl Into<CertVerification>) -> Self {
        self.config.cert_verification = mode.into();
        self
    }

    /// Enable or disable logout when the client is shut down.
    pub fn with_logout_at_exit(mut self, enabled: bool) -> Self {
        self.config.logout_at_exit = enabled;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
