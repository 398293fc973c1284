//! Signed Access Tokens
//!
//! Stateless bearer tokens of the shape
//! `base64url(claims-json) . base64url(hmac-sha256)`, signed with a
//! server-held secret. Claims carry the user id and an absolute expiry
//! in unix seconds; nothing is persisted server-side.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Token verification errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token is not two base64url segments with a JSON payload
    #[error("Malformed token")]
    Malformed,

    /// Signature does not verify against the server secret
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token expiry is in the past
    #[error("Token expired")]
    Expired,
}

/// Signed token payload.
///
/// Wire format matches the API contract: `{"userId": ..., "exp": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Expiry, unix seconds
    pub exp: i64,
}

/// Current unix time in seconds.
pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Issue a token for `user_id`, expiring `ttl` from now.
pub fn issue(user_id: i64, secret: &[u8], ttl: Duration) -> String {
    issue_at(user_id, secret, unix_now(), ttl)
}

/// Issue a token with an explicit issuance time.
pub fn issue_at(user_id: i64, secret: &[u8], issued_at: i64, ttl: Duration) -> String {
    let claims = TokenClaims {
        user_id,
        exp: issued_at + ttl.as_secs() as i64,
    };

    let payload = serde_json::to_vec(&claims).expect("claims serialize to JSON");
    let payload_b64 = URL_SAFE_NO_PAD.encode(&payload);

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload_b64.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!("{}.{}", payload_b64, URL_SAFE_NO_PAD.encode(signature))
}

/// Verify a token against the server secret and the current clock.
pub fn verify(token: &str, secret: &[u8]) -> Result<TokenClaims, TokenError> {
    verify_at(token, secret, unix_now())
}

/// Verify a token with an explicit "now".
///
/// Signature is checked before the payload is trusted; the HMAC comparison
/// is constant time.
pub fn verify_at(token: &str, secret: &[u8], now: i64) -> Result<TokenClaims, TokenError> {
    let (payload_b64, signature_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| TokenError::Malformed)?;

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload_b64.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| TokenError::InvalidSignature)?;

    let payload = URL_SAFE_NO_PAD
        .decode(payload_b64)
        .map_err(|_| TokenError::Malformed)?;
    let claims: TokenClaims =
        serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

    if now >= claims.exp {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";
    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn test_issue_and_verify() {
        let token = issue(7, SECRET, HOUR);
        let claims = verify(&token, SECRET).unwrap();
        assert_eq!(claims.user_id, 7);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue(7, SECRET, HOUR);
        assert_eq!(
            verify(&token, b"other-secret"),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let token = issue(7, SECRET, HOUR);
        let (_, signature) = token.split_once('.').unwrap();

        let forged_claims = TokenClaims {
            user_id: 8,
            exp: unix_now() + 3600,
        };
        let forged_payload =
            URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged_claims).unwrap());
        let forged = format!("{}.{}", forged_payload, signature);

        assert_eq!(verify(&forged, SECRET), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_expiry_boundary() {
        let issued_at = 1_000_000;
        let token = issue_at(7, SECRET, issued_at, HOUR);

        // accepted just before expiry, rejected just after
        assert!(verify_at(&token, SECRET, issued_at + 59 * 60).is_ok());
        assert_eq!(
            verify_at(&token, SECRET, issued_at + 61 * 60),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_exact_expiry_rejected() {
        let issued_at = 1_000_000;
        let token = issue_at(7, SECRET, issued_at, HOUR);
        assert_eq!(
            verify_at(&token, SECRET, issued_at + 3600),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(verify("", SECRET), Err(TokenError::Malformed));
        assert_eq!(verify("no-dot", SECRET), Err(TokenError::Malformed));
        assert_eq!(verify("a.b.c", SECRET), Err(TokenError::Malformed));
        assert_eq!(verify("!!!.???", SECRET), Err(TokenError::Malformed));
    }

    #[test]
    fn test_claims_wire_format() {
        let claims = TokenClaims {
            user_id: 42,
            exp: 123,
        };
        let json = serde_json::to_string(&claims).unwrap();
        assert_eq!(json, r#"{"userId":42,"exp":123}"#);
    }
}
