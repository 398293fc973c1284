//! Platform - shared low-level primitives
//!
//! Crypto building blocks used by the feature crates:
//! - `password`: Argon2id hashing and verification for stored credentials
//! - `token`: HMAC-SHA256 signed, time-limited access tokens

pub mod password;
pub mod token;
