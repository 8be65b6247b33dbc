//! Session token issuance and validation.
//!
//! Sessions are signed, time-bounded JWTs carrying identity + department
//! claims. Validation is pure and stateless: signature, then time window.
//! There is no revocation list — logout is client-side discard of the token.

use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use venuecrm_core::Identity;

use crate::claims::{ClaimsError, SessionClaims, validate_claims};
use crate::config::SessionConfig;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("session has expired")]
    Expired,

    /// Bad signature, or a token signed under an algorithm other than the
    /// configured one.
    #[error("invalid token signature")]
    InvalidSignature,

    #[error("malformed token")]
    Malformed,

    #[error("token could not be signed")]
    Signing,
}

/// Issues and validates signed session tokens.
///
/// Holds the process-wide signing material derived once from
/// [`SessionConfig`]; read-only after construction, so services can share it
/// across threads freely.
pub struct SessionService {
    header: Header,
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: chrono::Duration,
}

impl SessionService {
    pub fn new(config: &SessionConfig) -> Self {
        let algorithm = config.algorithm.to_jwt();

        let mut validation = Validation::new(algorithm);
        // Expiry is checked against the caller-supplied clock in `validate`,
        // not the signing library's process clock.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            header: Header::new(algorithm),
            encoding: EncodingKey::from_secret(config.secret()),
            decoding: DecodingKey::from_secret(config.secret()),
            validation,
            ttl: config.ttl,
        }
    }

    /// Mint a session token for an authenticated identity.
    pub fn issue(&self, identity: &Identity, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = SessionClaims {
            sub: identity.id,
            department: identity.department,
            issued_at: now,
            expires_at: now + self.ttl,
        };
        encode(&self.header, &claims, &self.encoding).map_err(|_| TokenError::Signing)
    }

    /// Verify signature and time window, returning the decoded claims.
    ///
    /// A token signed under a different algorithm than the configured one
    /// fails as [`TokenError::InvalidSignature`]; an undecodable payload
    /// fails as [`TokenError::Malformed`].
    pub fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, TokenError> {
        let data = decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature
                | jsonwebtoken::errors::ErrorKind::InvalidAlgorithm
                | jsonwebtoken::errors::ErrorKind::InvalidAlgorithmName => {
                    TokenError::InvalidSignature
                }
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })?;

        validate_claims(&data.claims, now).map_err(|e| match e {
            ClaimsError::Expired => TokenError::Expired,
            // A future issued-at or inverted window never comes from our
            // issuer; the payload is untrustworthy.
            ClaimsError::NotYetValid | ClaimsError::InvalidTimeWindow => TokenError::Malformed,
        })?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    use venuecrm_core::{Department, PasswordHash, UserId};

    use crate::config::SigningAlgorithm;

    fn identity(id: i64, department: Department) -> Identity {
        Identity {
            id: UserId::new(id),
            full_name: "Test Collaborator".to_string(),
            email: "collab@corp.test".to_string(),
            password_hash: PasswordHash::new("$argon2id$v=19$irrelevant"),
            department,
        }
    }

    fn service() -> SessionService {
        SessionService::new(&SessionConfig::new("unit-test-secret"))
    }

    #[test]
    fn issue_then_validate_returns_matching_claims() {
        let service = service();
        let now = Utc::now();

        let token = service.issue(&identity(7, Department::Commercial), now).unwrap();
        let claims = service.validate(&token, now).unwrap();

        assert_eq!(claims.sub, UserId::new(7));
        assert_eq!(claims.department, Department::Commercial);
        assert_eq!(claims.expires_at - claims.issued_at, Duration::hours(24));
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = service();
        let issued = Utc::now() - Duration::hours(48);

        let token = service.issue(&identity(7, Department::Support), issued).unwrap();
        let result = service.validate(&token, Utc::now());

        assert_eq!(result, Err(TokenError::Expired));
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let issuer = SessionService::new(&SessionConfig::new("secret-a"));
        let validator = SessionService::new(&SessionConfig::new("secret-b"));
        let now = Utc::now();

        let token = issuer.issue(&identity(7, Department::Support), now).unwrap();
        let result = validator.validate(&token, now);

        assert_eq!(result, Err(TokenError::InvalidSignature));
    }

    #[test]
    fn foreign_algorithm_is_rejected() {
        let secret = "shared-secret";
        let issuer = SessionService::new(
            &SessionConfig::new(secret).with_algorithm(SigningAlgorithm::Hs384),
        );
        let validator = SessionService::new(&SessionConfig::new(secret));
        let now = Utc::now();

        let token = issuer.issue(&identity(7, Department::Management), now).unwrap();
        let result = validator.validate(&token, now);

        assert_eq!(result, Err(TokenError::InvalidSignature));
    }

    #[test]
    fn garbage_is_malformed() {
        let service = service();
        let now = Utc::now();

        assert_eq!(service.validate("", now), Err(TokenError::Malformed));
        assert_eq!(
            service.validate("not-a-token", now),
            Err(TokenError::Malformed)
        );
        assert_eq!(
            service.validate("aaaa.bbbb.cccc", now),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let service = service();
        let now = Utc::now();

        let token = service.issue(&identity(7, Department::Support), now).unwrap();
        let forged = service
            .issue(&identity(999, Department::Management), now)
            .unwrap();

        // Splice the forged payload under the original signature.
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_payload = forged.split('.').nth(1).unwrap();
        parts[1] = forged_payload;
        let result = service.validate(&parts.join("."), now);

        assert_eq!(result, Err(TokenError::InvalidSignature));
    }

    proptest! {
        #[test]
        fn roundtrip_preserves_identity_and_department(
            id in any::<i64>(),
            department_index in 0usize..3,
            ttl_hours in 1i64..720,
        ) {
            let department = Department::ALL[department_index];
            let service = SessionService::new(
                &SessionConfig::new("proptest-secret").with_ttl(Duration::hours(ttl_hours)),
            );
            let now = Utc::now();

            let token = service.issue(&identity(id, department), now).unwrap();
            let claims = service.validate(&token, now).unwrap();

            prop_assert_eq!(claims.sub, UserId::new(id));
            prop_assert_eq!(claims.department, department);
        }
    }
}
