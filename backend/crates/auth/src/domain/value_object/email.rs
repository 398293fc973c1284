//! Email Value Object
//!
//! Deliberately permissive: the only requirement is that the string is
//! non-empty. No format validation, no case normalization - the stored
//! value is exactly what the client registered with.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new email; rejects only the empty string.
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into();

        if email.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty"));
        }

        Ok(Self(email))
    }

    /// Create from a database value (assumed already validated).
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_non_empty() {
        assert!(Email::new("user@example.com").is_ok());
        // Format is not enforced
        assert!(Email::new("not-an-email").is_ok());
        assert!(Email::new(" ").is_ok());
    }

    #[test]
    fn test_email_empty_rejected() {
        assert!(Email::new("").is_err());
    }

    #[test]
    fn test_email_preserved_verbatim() {
        let email = Email::new("User@Example.COM").unwrap();
        assert_eq!(email.as_str(), "User@Example.COM");
    }
}
