//! JWT session token generation and validation
//!
//! Issues a signed HS256 token at login and verifies it on every protected
//! request. The signature covers the full claim set, so any tampering with
//! identity or expiry invalidates the token.

use std::str::FromStr;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum JwtError {
    #[error("Token encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Malformed token")]
    Malformed,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Required claim missing or invalid")]
    MissingClaim,
}

/// Raw JWT claims as they appear on the wire
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user id, stringified)
    pub sub: String,
    /// Account email
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// Identity extracted from a verified token. Only produced by
/// [`verify_token`]; holding one proves the claims passed signature,
/// expiry, and shape checks.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    pub user_id: i64,
    pub email: String,
}

/// Session token lifetime: a count of days or hours, e.g. `7d` or `12h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLifetime(Duration);

impl TokenLifetime {
    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl Default for TokenLifetime {
    fn default() -> Self {
        TokenLifetime(Duration::days(7))
    }
}

impl FromStr for TokenLifetime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (count, to_duration): (&str, fn(i64) -> Duration) =
            if let Some(count) = s.strip_suffix('d') {
                (count, Duration::days)
            } else if let Some(count) = s.strip_suffix('h') {
                (count, Duration::hours)
            } else {
                return Err(format!(
                    "invalid token lifetime '{}': unit must be 'd' or 'h'",
                    s
                ));
            };

        let count: i64 = count
            .parse()
            .map_err(|_| format!("invalid token lifetime '{}': expected <number><d|h>", s))?;
        if count <= 0 {
            return Err(format!("invalid token lifetime '{}': must be positive", s));
        }

        Ok(TokenLifetime(to_duration(count)))
    }
}

/// Issue a signed session token for a user.
///
/// # Arguments
/// * `user_id` - The authenticated user's id
/// * `email` - The account email, carried as a claim
/// * `secret` - JWT signing secret
/// * `lifetime` - Configured token lifetime
pub fn issue_token(
    user_id: i64,
    email: &str,
    secret: &str,
    lifetime: TokenLifetime,
) -> Result<String, JwtError> {
    let now = Utc::now();
    let exp = now + lifetime.as_duration();

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| JwtError::EncodingFailed(e.to_string()))
}

/// Verify a session token and extract its identity claims.
///
/// Checks, in order: token structure, signature against the configured
/// secret, expiry with zero grace period, then presence and shape of the
/// identity claims.
pub fn verify_token(token: &str, secret: &str) -> Result<SessionClaims, JwtError> {
    let mut validation = Validation::default();
    validation.validate_exp = true;
    // jsonwebtoken defaults to 60 seconds of clock leeway; expiry here is exact.
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => JwtError::Expired,
        ErrorKind::InvalidSignature => JwtError::InvalidSignature,
        ErrorKind::Json(_) | ErrorKind::MissingRequiredClaim(_) => JwtError::MissingClaim,
        _ => JwtError::Malformed,
    })?;

    let claims = token_data.claims;

    // The library's comparison admits exp == now; the policy is to reject at
    // or after expiry.
    if Utc::now().timestamp() >= claims.exp {
        return Err(JwtError::Expired);
    }

    let user_id: i64 = claims.sub.parse().map_err(|_| JwtError::MissingClaim)?;
    if user_id <= 0 {
        return Err(JwtError::MissingClaim);
    }

    Ok(SessionClaims {
        user_id,
        email: claims.email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key";

    fn encode_raw(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_then_verify() {
        let token = issue_token(42, "alice@x.com", SECRET, TokenLifetime::default()).unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.email, "alice@x.com");
    }

    #[test]
    fn test_wrong_secret_is_invalid_signature() {
        let token = issue_token(1, "a@x.com", "secret1", TokenLifetime::default()).unwrap();
        assert_eq!(
            verify_token(&token, "secret2").unwrap_err(),
            JwtError::InvalidSignature
        );
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let token = issue_token(1, "a@x.com", SECRET, TokenLifetime::default()).unwrap();
        let mut bytes = token.into_bytes();
        let mid = bytes.len() / 2;
        bytes[mid] = if bytes[mid] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();
        assert!(verify_token(&tampered, SECRET).is_err());
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert_eq!(
            verify_token("not.a.token", SECRET).unwrap_err(),
            JwtError::Malformed
        );
        assert_eq!(verify_token("", SECRET).unwrap_err(), JwtError::Malformed);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "1".to_string(),
            email: "a@x.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode_raw(&claims, SECRET);
        assert_eq!(verify_token(&token, SECRET).unwrap_err(), JwtError::Expired);
    }

    #[test]
    fn test_expiry_has_no_grace_period() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "1".to_string(),
            email: "a@x.com".to_string(),
            iat: now - 3600,
            // Inside jsonwebtoken's default 60 s leeway, but still expired.
            exp: now - 5,
        };
        let token = encode_raw(&claims, SECRET);
        assert_eq!(verify_token(&token, SECRET).unwrap_err(), JwtError::Expired);
    }

    #[test]
    fn test_non_numeric_subject_is_missing_claim() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "not-a-number".to_string(),
            email: "a@x.com".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode_raw(&claims, SECRET);
        assert_eq!(
            verify_token(&token, SECRET).unwrap_err(),
            JwtError::MissingClaim
        );
    }

    #[test]
    fn test_zero_subject_is_missing_claim() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "0".to_string(),
            email: "a@x.com".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode_raw(&claims, SECRET);
        assert_eq!(
            verify_token(&token, SECRET).unwrap_err(),
            JwtError::MissingClaim
        );
    }

    #[test]
    fn test_lifetime_parsing() {
        assert_eq!(
            "7d".parse::<TokenLifetime>().unwrap().as_duration(),
            Duration::days(7)
        );
        assert_eq!(
            "48h".parse::<TokenLifetime>().unwrap().as_duration(),
            Duration::hours(48)
        );
        assert_eq!(TokenLifetime::default().as_duration(), Duration::days(7));

        assert!("7w".parse::<TokenLifetime>().is_err());
        assert!("d".parse::<TokenLifetime>().is_err());
        assert!("".parse::<TokenLifetime>().is_err());
        assert!("-3d".parse::<TokenLifetime>().is_err());
        assert!("0h".parse::<TokenLifetime>().is_err());
    }
}
