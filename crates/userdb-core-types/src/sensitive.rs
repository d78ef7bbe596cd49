//! Redacting wrapper for credentials
//!
//! The model-service API key is loaded into the process configuration,
//! which is logged at startup. Wrapping it in `Sensitive<T>` keeps it out
//! of every `Debug`/`Display` rendering, including tracing fields.

use std::fmt;

const REDACTED: &str = "***REDACTED***";

/// Wrapper for a secret value that redacts itself when formatted
///
/// # Example
///
/// ```
/// use userdb_core_types::Sensitive;
///
/// let api_key = Sensitive::new("AIza-example".to_string());
/// assert_eq!(format!("{:?}", api_key), "***REDACTED***");
/// assert_eq!(api_key.expose(), "AIza-example");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the secret. Call sites should hand it straight to the consumer.
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl Sensitive<String> {
    /// Whether the wrapped string has any non-whitespace content
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_never_formatted() {
        let key = Sensitive::new("AIzaSyD-live-key".to_string());
        assert_eq!(format!("{:?}", key), REDACTED);
        assert_eq!(format!("{}", key), REDACTED);
    }

    #[test]
    fn test_expose_returns_value() {
        let key = Sensitive::new("k-123".to_string());
        assert_eq!(key.expose(), "k-123");
        assert_eq!(key.clone().into_inner(), "k-123");
    }

    #[test]
    fn test_blank_detection() {
        assert!(Sensitive::new("   ".to_string()).is_blank());
        assert!(Sensitive::new(String::new()).is_blank());
        assert!(!Sensitive::new("x".to_string()).is_blank());
    }

    #[test]
    fn test_redacted_inside_config_struct() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Settings {
            db_path: String,
            api_key: Sensitive<String>,
        }

        let settings = Settings {
            db_path: "users.db".to_string(),
            api_key: Sensitive::new("top-secret".to_string()),
        };

        let rendered = format!("{:?}", settings);
        assert!(rendered.contains("users.db"));
        assert!(rendered.contains(REDACTED));
        assert!(!rendered.contains("top-secret"));
    }
}
