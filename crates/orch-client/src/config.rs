//! Client configuration.
//!
//! The base URL falls back from an explicit value to the `ORCHESTRATOR_URL`
//! environment variable and finally to [`DEFAULT_BASE_URL`]. It is
//! normalized once, at construction, to end with exactly one `/api/`.

use std::fmt;

/// Base URL used when neither an explicit URL nor the environment provide one.
pub const DEFAULT_BASE_URL: &str = "https://orchestrator";

/// Environment variable consulted for the base URL.
pub const URL_ENV_VAR: &str = "ORCHESTRATOR_URL";

const API_SUFFIX: &str = "/api/";

/// HTTP Basic authentication credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Username sent with each request.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password sent with each request.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Connection settings for an [`crate::OrchestratorClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    credentials: Option<Credentials>,
}

impl ClientConfig {
    /// Configuration for the given base URL, without authentication.
    ///
    /// `url` is normalized: `http://host:3000` and `http://host:3000/` both
    /// become `http://host:3000/api/`.
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            base_url: normalize_base_url(url),
            credentials: None,
        }
    }

    /// Configuration from an optional explicit URL, falling back to the
    /// environment and then to [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn resolve(explicit: Option<&str>) -> Self {
        Self::new(&resolve_base_url(explicit, std::env::var(URL_ENV_VAR).ok()))
    }

    /// Configuration taken from the environment alone.
    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(None)
    }

    /// Authenticate requests with HTTP Basic auth.
    ///
    /// When both values are empty the client stays unauthenticated.
    #[must_use]
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        let credentials = Credentials::new(username, password);
        self.credentials = if credentials.username.is_empty() && credentials.password.is_empty() {
            None
        } else {
            Some(credentials)
        };
        self
    }

    /// Normalized base URL, always ending in `/api/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured credentials, if any.
    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Full URL for a request path such as `relocate/a/1/b/2`.
    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Pick the base URL: explicit value, then environment value, then
/// [`DEFAULT_BASE_URL`]. Empty strings count as absent.
#[must_use]
pub fn resolve_base_url(explicit: Option<&str>, env: Option<String>) -> String {
    explicit
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .or_else(|| env.filter(|url| !url.is_empty()))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Strip trailing slashes and append `/api/`.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    format!("{}{API_SUFFIX}", raw.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("http://host:3000" ; "no trailing slash")]
    #[test_case("http://host:3000/" ; "one trailing slash")]
    #[test_case("http://host:3000///" ; "many trailing slashes")]
    fn base_url_normalized(raw: &str) {
        assert_eq!(normalize_base_url(raw), "http://host:3000/api/");
        assert_eq!(ClientConfig::new(raw).base_url(), "http://host:3000/api/");
    }

    #[test]
    fn resolve_prefers_explicit() {
        let url = resolve_base_url(Some("http://a"), Some("http://b".into()));
        assert_eq!(url, "http://a");
    }

    #[test]
    fn resolve_falls_back_to_env() {
        assert_eq!(resolve_base_url(None, Some("http://b".into())), "http://b");
        assert_eq!(resolve_base_url(Some(""), Some("http://b".into())), "http://b");
    }

    #[test]
    fn resolve_falls_back_to_default() {
        assert_eq!(resolve_base_url(None, None), DEFAULT_BASE_URL);
        assert_eq!(resolve_base_url(Some(""), Some(String::new())), DEFAULT_BASE_URL);
    }

    #[test]
    fn endpoint_url_appends_path() {
        let config = ClientConfig::new("http://host:3000");
        assert_eq!(config.endpoint_url("clusters/x"), "http://host:3000/api/clusters/x");
    }

    #[test]
    fn empty_credentials_are_dropped() {
        let config = ClientConfig::new("http://host").with_credentials("", "");
        assert!(config.credentials().is_none());
    }

    #[test]
    fn username_alone_enables_auth() {
        let config = ClientConfig::new("http://host").with_credentials("admin", "");
        let credentials = config.credentials().expect("credentials configured");
        assert_eq!(credentials.username(), "admin");
        assert_eq!(credentials.password(), "");
    }

    #[test]
    fn password_alone_enables_auth() {
        let config = ClientConfig::new("http://host").with_credentials("", "secret");
        assert!(config.credentials().is_some());
    }

    #[test]
    fn credentials_debug_redacts_password() {
        let credentials = Credentials::new("admin", "hunter2");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }
}
