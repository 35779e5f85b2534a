/**
 * Session Tokens
 *
 * This module issues and verifies the JWTs that carry a user's identity.
 * Tokens are HS256-signed with the process-wide secret from the server
 * configuration and are never stored: a token is valid exactly when its
 * signature checks out and it has not expired.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Outcome of verifying a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenVerification {
    /// Signature and expiry check out
    Valid {
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    },
    /// Signature is fine but the token is past its expiry
    Expired,
    /// Not a decodable token, or claims of the wrong shape
    Malformed,
    /// Signed with another key, or altered after signing
    SignatureMismatch,
}

/// Signing and verification keys derived from the server secret
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl SessionKeys {
    /// Build keys from the shared secret; tokens live for `ttl`
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Create a token for a user, issued now
    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(user_id, Utc::now())
    }

    /// Create a token for a user as if issued at `issued_at`
    pub fn issue_at(
        &self,
        user_id: Uuid,
        issued_at: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: unix_seconds(expires_at),
            iat: unix_seconds(issued_at),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verify a token and extract the user it was issued to
    pub fn verify(&self, token: &str) -> TokenVerification {
        let data = match decode::<Claims>(token, &self.decoding, &self.validation) {
            Ok(data) => data,
            Err(e) => {
                return match e.kind() {
                    ErrorKind::ExpiredSignature => TokenVerification::Expired,
                    ErrorKind::InvalidSignature => TokenVerification::SignatureMismatch,
                    _ => TokenVerification::Malformed,
                };
            }
        };

        let Ok(user_id) = Uuid::parse_str(&data.claims.sub) else {
            return TokenVerification::Malformed;
        };

        let expires_at = i64::try_from(data.claims.exp)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0));

        match expires_at {
            Some(expires_at) => TokenVerification::Valid { user_id, expires_at },
            None => TokenVerification::Malformed,
        }
    }
}

fn unix_seconds(at: DateTime<Utc>) -> u64 {
    u64::try_from(at.timestamp()).unwrap_or_default()
}
