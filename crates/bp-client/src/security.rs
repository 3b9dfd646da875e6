//! Security utilities for building BillingPlatform URLs.
//!
//! User-provided values placed in URL paths or query strings MUST be encoded:
//!
//! ```rust
//! use billingplatform_client::security::url;
//!
//! // CORRECT
//! let encoded_id = url::encode_param("12/../../secret");
//! let path = format!("ACCOUNT/{}", encoded_id);
//!
//! // WRONG - NEVER do this with user input
//! // let path = format!("ACCOUNT/{}", user_id);
//! ```

/// URL encoding and path validation utilities.
pub mod url {
    /// URL-encode a parameter value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use billingplatform_client::security::url;
    ///
    /// assert_eq!(url::encode_param("1 = 1"), "1%20%3D%201");
    /// ```
    #[must_use]
    pub fn encode_param(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }

    /// Validate an entity name for use as a URL path segment.
    ///
    /// Entity names contain only ASCII alphanumerics and underscores, and
    /// start with a letter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use billingplatform_client::security::url;
    ///
    /// assert!(url::is_safe_entity_name("ACCOUNT"));
    /// assert!(url::is_safe_entity_name("accounts"));
    /// assert!(url::is_safe_entity_name("BILLING_PROFILE"));
    /// assert!(!url::is_safe_entity_name("delete/ACCOUNT"));
    /// assert!(!url::is_safe_entity_name(""));
    /// ```
    #[must_use]
    pub fn is_safe_entity_name(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Build a safe `{entity}/{id}` path, encoding the id.
    ///
    /// # Example
    ///
    /// ```rust
    /// use billingplatform_client::security::url;
    ///
    /// assert_eq!(url::entity_path("ACCOUNT", "42"), Some("ACCOUNT/42".to_string()));
    /// assert_eq!(url::entity_path("ACCOUNT", "a/b"), Some("ACCOUNT/a%2Fb".to_string()));
    /// assert_eq!(url::entity_path("Bad'; DROP--", "42"), None);
    /// ```
    #[must_use]
    pub fn entity_path(entity: &str, id: &str) -> Option<String> {
        if !is_safe_entity_name(entity) || id.is_empty() {
            return None;
        }
        Some(format!("{}/{}", entity, encode_param(id)))
    }
}
