use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use venuecrm_core::{Department, UserId};

/// Session claims model (transport-agnostic).
///
/// This is the decoded, verified payload of a session token: everything the
/// access decision engine knows about the caller. Sessions exist only as
/// signed tokens; nothing here is persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject / authenticated identity.
    pub sub: UserId,

    /// Department granted at issuance; drives every matrix lookup.
    pub department: Department,

    /// Issued-at timestamp.
    #[serde(rename = "iat", with = "chrono::serde::ts_seconds")]
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    #[serde(rename = "exp", with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClaimsError {
    #[error("session has expired")]
    Expired,

    #[error("session not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid session time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate session claims against a caller-supplied clock.
///
/// The clock is always an explicit parameter: expiry decisions never read
/// ambient process time, so validations are pure and freely parallel.
pub fn validate_claims(claims: &SessionClaims, now: DateTime<Utc>) -> Result<(), ClaimsError> {
    if claims.expires_at <= claims.issued_at {
        return Err(ClaimsError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(ClaimsError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(ClaimsError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn claims_at(issued_at: DateTime<Utc>, ttl: Duration) -> SessionClaims {
        SessionClaims {
            sub: UserId::new(1),
            department: Department::Support,
            issued_at,
            expires_at: issued_at + ttl,
        }
    }

    #[test]
    fn accepts_claims_inside_the_window() {
        let now = Utc::now();
        let claims = claims_at(now - Duration::hours(1), Duration::hours(24));
        assert_eq!(validate_claims(&claims, now), Ok(()));
    }

    #[test]
    fn rejects_expired_claims() {
        let now = Utc::now();
        let claims = claims_at(now - Duration::hours(48), Duration::hours(24));
        assert_eq!(validate_claims(&claims, now), Err(ClaimsError::Expired));
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let now = Utc::now();
        let claims = claims_at(now - Duration::hours(24), Duration::hours(24));
        assert_eq!(validate_claims(&claims, now), Err(ClaimsError::Expired));
    }

    #[test]
    fn rejects_claims_issued_in_the_future() {
        let now = Utc::now();
        let claims = claims_at(now + Duration::hours(1), Duration::hours(24));
        assert_eq!(validate_claims(&claims, now), Err(ClaimsError::NotYetValid));
    }

    #[test]
    fn rejects_inverted_time_window() {
        let now = Utc::now();
        let claims = claims_at(now, Duration::hours(-1));
        assert_eq!(
            validate_claims(&claims, now),
            Err(ClaimsError::InvalidTimeWindow)
        );
    }

    #[test]
    fn wire_shape_uses_jwt_claim_names() {
        let now = Utc::now();
        let claims = claims_at(now, Duration::hours(24));
        let json = serde_json::to_value(&claims).unwrap();

        assert!(json.get("sub").is_some());
        assert!(json.get("department").is_some());
        assert!(json.get("iat").is_some());
        assert!(json.get("exp").is_some());
        assert_eq!(json["iat"], serde_json::json!(now.timestamp()));
    }
}
