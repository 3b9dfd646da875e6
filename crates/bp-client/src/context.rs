//! Authenticated transport context: the headers every request carries.
//!
//! Header values hold session ids and bearer tokens, so they are redacted in
//! Debug output.

use std::collections::BTreeMap;

/// Header carrying the session id issued by `/rest/2.0/login`.
pub const SESSION_HEADER: &str = "sessionid";

/// Header carrying an OAuth bearer token.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Header name to value mapping attached to every authenticated request.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TransportContext {
    headers: BTreeMap<String, String>,
}

impl std::fmt::Debug for TransportContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.headers.keys().map(|k| (k, "[REDACTED]")))
            .finish()
    }
}

impl TransportContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context carrying a session id.
    pub fn session(session_id: impl Into<String>) -> Self {
        let mut ctx = Self::new();
        ctx.insert(SESSION_HEADER, session_id);
        ctx
    }

    /// Context carrying a bearer token.
    pub fn bearer(token: impl AsRef<str>) -> Self {
        let mut ctx = Self::new();
        ctx.insert(AUTHORIZATION_HEADER, format!("Bearer {}", token.as_ref()));
        ctx
    }

    /// Insert a header, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Get a header value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Returns true if a session or bearer header is present.
    pub fn is_authenticated(&self) -> bool {
        self.headers.contains_key(SESSION_HEADER) || self.headers.contains_key(AUTHORIZATION_HEADER)
    }

    /// Returns true if no headers are set.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Remove every header.
    pub fn clear(&mut self) {
        self.headers.clear();
    }

    /// Iterate over header name/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
