use std::fmt;

/// Credentials for the admissions API.
///
/// Built once from configuration and handed to the HTTP client; request
/// code never looks the token up on its own.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Value for the `Authorization` header
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_is_anonymous() {
        assert!(!Session::new(Some(String::new())).is_authenticated());
        assert_eq!(Session::anonymous().authorization(), None);
    }

    #[test]
    fn test_bearer_header() {
        let session = Session::new(Some("abc".into()));
        assert_eq!(session.authorization().as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = Session::new(Some("abc".into()));
        let debug = format!("{:?}", session);
        assert!(!debug.contains("abc"));
        assert!(debug.contains("redacted"));
    }
}
