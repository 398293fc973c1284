//! Application Configuration
//!
//! Configuration for the Posts application layer.

/// Posts application configuration
///
/// Only the token verification secret lives here; it must match the
/// secret the auth crate signs with.
#[derive(Debug, Clone)]
pub struct PostConfig {
    /// Secret key for HMAC token verification
    pub token_secret: Vec<u8>,
}

impl PostConfig {
    pub fn new(token_secret: Vec<u8>) -> Self {
        Self { token_secret }
    }
}
