//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for HMAC token signing; required, sourced from the
    /// environment by the binary (never hard-coded)
    pub token_secret: Vec<u8>,
    /// Token lifetime (1 hour)
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Create a config with the given secret and the standard 1-hour TTL.
    pub fn new(token_secret: Vec<u8>) -> Self {
        Self {
            token_secret,
            token_ttl: Duration::from_secs(3600),
        }
    }
}
