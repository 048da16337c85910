//! Credential resolution for tracking server authentication
//!
//! The tracking server uses plain HTTP basic auth. Token-issuing servers
//! (DagsHub and similar) expect the access token as both username and
//! password, so a bare token resolves to that pair.

/// Basic-auth credential pair for the tracking server
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Resolve credentials from the available sources
    ///
    /// An explicit username/password pair wins over a token; a token is used
    /// as both username and password; with neither, requests go out
    /// unauthenticated.
    pub fn resolve(
        username: Option<String>,
        password: Option<String>,
        token: Option<String>,
    ) -> Option<Self> {
        if let (Some(username), Some(password)) = (username, password) {
            return Some(Self::new(username, password));
        }

        token.map(|token| Self::new(token.clone(), token))
    }

    /// Attach basic auth to an outgoing request
    pub fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.basic_auth(&self.username, Some(&self.password))
    }
}
