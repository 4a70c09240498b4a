//! JWT session tokens
//!
//! Tokens are HS256-signed and carry the user id, email and role at issue
//! time. The role in the token is informational only: requests re-resolve
//! the principal from the user directory by `sub`.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};
use crate::types::{Principal, Role};

/// JWT Claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    pub email: String,
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Claims issued now, expiring `ttl_seconds` later
    ///
    /// An expiry past `i64::MAX` is an `Internal` fault.
    pub fn for_principal(principal: &Principal, ttl_seconds: i64) -> DashboardResult<Self> {
        let now = chrono::Utc::now().timestamp();
        let exp = now.checked_add(ttl_seconds).ok_or_else(|| {
            DashboardError::Internal(format!("token ttl of {}s overflows the expiry", ttl_seconds))
        })?;
        Ok(Self {
            sub: principal.id.clone(),
            email: principal.email.clone(),
            role: principal.role,
            iat: now,
            exp,
        })
    }

    /// Check if token is expired
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() > self.exp
    }
}

/// Issues and validates session tokens
pub struct JwtAuth {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// Token TTL in seconds (default: 7 days)
    pub token_ttl: i64,
}

impl JwtAuth {
    pub const DEFAULT_TTL: i64 = 7 * 24 * 60 * 60;

    /// Longest token lifetime configuration accepts (10 years)
    pub const MAX_TTL: i64 = 10 * 365 * 24 * 60 * 60;

    /// Length of a generated secret
    pub const GENERATED_SECRET_LEN: usize = 64;

    /// Minimum accepted secret length
    pub const MIN_SECRET_LEN: usize = 32;

    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, Self::DEFAULT_TTL)
    }

    pub fn with_ttl(secret: &str, token_ttl: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl,
        }
    }

    /// Generate a per-process random secret
    ///
    /// Tokens signed with it do not survive a restart.
    pub fn generate_secret() -> String {
        rand::rng()
            .sample_iter(&rand::distr::Alphanumeric)
            .take(Self::GENERATED_SECRET_LEN)
            .map(char::from)
            .collect()
    }

    /// Issue a token for `principal`
    pub fn issue(&self, principal: &Principal) -> DashboardResult<String> {
        let claims = Claims::for_principal(principal, self.token_ttl)?;
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DashboardError::Internal(format!("token signing failed: {}", e)))
    }

    /// Validate a token and return claims
    ///
    /// Bad signature, malformed input and expiry all yield `Unauthenticated`.
    pub fn validate(&self, token: &str) -> DashboardResult<Claims> {
        let token_data: TokenData<Claims> =
            decode(token, &self.decoding_key, &Validation::default()).map_err(|e| {
                tracing::debug!(error = %e, "token rejected");
                DashboardError::Unauthenticated
            })?;

        if token_data.claims.is_expired() {
            return Err(DashboardError::Unauthenticated);
        }

        Ok(token_data.claims)
    }

    /// Validate token from Authorization header
    /// Supports: "Bearer <token>" or just "<token>"
    pub fn validate_authorization(&self, auth_header: &str) -> DashboardResult<Claims> {
        let token = auth_header
            .strip_prefix("Bearer ")
            .unwrap_or(auth_header)
            .trim();

        self.validate(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-that-is-at-least-32-characters-long";

    fn alice() -> Principal {
        Principal {
            id: "7".to_string(),
            email: "alice@test.com".to_string(),
            name: "Alice".to_string(),
            role: Role::Analyst,
        }
    }

    #[test]
    fn test_issue_and_validate() {
        let auth = JwtAuth::new(SECRET);
        let token = auth.issue(&alice()).unwrap();

        let claims = auth.validate(&token).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.email, "alice@test.com");
        assert_eq!(claims.role, Role::Analyst);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_unauthenticated() {
        let token = JwtAuth::new(SECRET).issue(&alice()).unwrap();
        let other = JwtAuth::new("another-secret-key-that-is-also-32-characters");
        assert_eq!(other.validate(&token), Err(DashboardError::Unauthenticated));
    }

    #[test]
    fn test_expired_token_is_unauthenticated() {
        // Well past the default 60 second leeway
        let auth = JwtAuth::with_ttl(SECRET, -600);
        let token = auth.issue(&alice()).unwrap();
        assert_eq!(auth.validate(&token), Err(DashboardError::Unauthenticated));
    }

    #[test]
    fn test_garbage_token() {
        let auth = JwtAuth::new(SECRET);
        assert_eq!(auth.validate("not.a.jwt"), Err(DashboardError::Unauthenticated));
    }

    #[test]
    fn test_validate_authorization_header() {
        let auth = JwtAuth::new(SECRET);
        let token = auth.issue(&alice()).unwrap();

        let claims = auth
            .validate_authorization(&format!("Bearer {}", token))
            .unwrap();
        assert_eq!(claims.sub, "7");

        let claims = auth.validate_authorization(&token).unwrap();
        assert_eq!(claims.sub, "7");
    }

    #[test]
    fn test_generated_secret_is_random_alphanumeric() {
        let secret = JwtAuth::generate_secret();
        assert_eq!(secret.len(), JwtAuth::GENERATED_SECRET_LEN);
        assert!(secret.len() >= JwtAuth::MIN_SECRET_LEN);
        assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(secret, JwtAuth::generate_secret());

        // Usable as a signing key
        let auth = JwtAuth::new(&secret);
        let token = auth.issue(&alice()).unwrap();
        assert_eq!(auth.validate(&token).unwrap().sub, "7");
    }

    #[test]
    fn test_overflowing_ttl_is_internal_not_panic() {
        let auth = JwtAuth::with_ttl(SECRET, i64::MAX);
        assert!(matches!(auth.issue(&alice()), Err(DashboardError::Internal(_))));

        assert!(matches!(
            Claims::for_principal(&alice(), i64::MAX),
            Err(DashboardError::Internal(_))
        ));
    }

    #[test]
    fn test_max_ttl_issues_valid_token() {
        let auth = JwtAuth::with_ttl(SECRET, JwtAuth::MAX_TTL);
        let token = auth.issue(&alice()).unwrap();
        let claims = auth.validate(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, JwtAuth::MAX_TTL);
    }
}
