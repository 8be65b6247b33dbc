//! Credential verification against stored identity records.

use argon2::Argon2;
use thiserror::Error;

use venuecrm_core::{Identity, PasswordHash};

/// Identity lookup capability provided by the persistence layer.
///
/// Lookup is an exact, case-sensitive match on the stored email.
pub trait IdentityDirectory {
    fn find_by_email(&self, email: &str) -> Option<Identity>;
}

/// Opaque password-verification capability.
///
/// Which algorithm produced the stored hash is deliberately not this crate's
/// concern; implementations must compare in constant time.
pub trait PasswordVerifier {
    fn verify(&self, candidate: &str, stored: &PasswordHash) -> bool;
}

/// PHC-string verifier backed by argon2.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Verifier;

impl PasswordVerifier for Argon2Verifier {
    fn verify(&self, candidate: &str, stored: &PasswordHash) -> bool {
        use argon2::PasswordVerifier as _;

        let Ok(parsed) = argon2::PasswordHash::new(stored.expose()) else {
            return false;
        };
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok()
    }
}

/// Well-formed hash of nothing anyone could log in as; verified against when
/// the email is unknown so both failure paths cost the same.
const DECOY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$AAAAAAAAAAAAAAAAAAAAAA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// Unknown email and wrong password collapse to this single variant so
    /// callers cannot enumerate accounts.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Checks submitted credentials against stored identity records.
///
/// Pure read: no lockouts, no counters, no side effects beyond the lookup.
pub struct CredentialVerifier<D, P> {
    directory: D,
    passwords: P,
}

impl<D, P> CredentialVerifier<D, P>
where
    D: IdentityDirectory,
    P: PasswordVerifier,
{
    pub fn new(directory: D, passwords: P) -> Self {
        Self {
            directory,
            passwords,
        }
    }

    pub fn verify(&self, email: &str, password: &str) -> Result<Identity, CredentialError> {
        let Some(identity) = self.directory.find_by_email(email) else {
            let _ = self
                .passwords
                .verify(password, &PasswordHash::new(DECOY_HASH));
            tracing::warn!("login failed for email: {email}");
            return Err(CredentialError::InvalidCredentials);
        };

        if !self.passwords.verify(password, &identity.password_hash) {
            tracing::warn!("login failed for email: {email}");
            return Err(CredentialError::InvalidCredentials);
        }

        tracing::info!("login succeeded for user {}", identity.id);
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use argon2::password_hash::SaltString;
    use argon2::{Argon2, PasswordHasher};

    use venuecrm_core::{Department, UserId};

    fn phc_hash(password: &str) -> PasswordHash {
        let salt = SaltString::from_b64("c2FsdHNhbHRzYWx0").unwrap();
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap();
        PasswordHash::new(hash.to_string())
    }

    struct MapDirectory(HashMap<String, Identity>);

    impl MapDirectory {
        fn with(identities: impl IntoIterator<Item = Identity>) -> Self {
            Self(
                identities
                    .into_iter()
                    .map(|identity| (identity.email.clone(), identity))
                    .collect(),
            )
        }
    }

    impl IdentityDirectory for MapDirectory {
        fn find_by_email(&self, email: &str) -> Option<Identity> {
            self.0.get(email).cloned()
        }
    }

    fn ada() -> Identity {
        Identity {
            id: UserId::new(1),
            full_name: "Ada Crane".to_string(),
            email: "ada@corp.test".to_string(),
            password_hash: phc_hash("correct horse"),
            department: Department::Commercial,
        }
    }

    fn verifier() -> CredentialVerifier<MapDirectory, Argon2Verifier> {
        CredentialVerifier::new(MapDirectory::with([ada()]), Argon2Verifier)
    }

    #[test]
    fn valid_credentials_return_the_identity() {
        let identity = verifier().verify("ada@corp.test", "correct horse").unwrap();
        assert_eq!(identity.id, UserId::new(1));
        assert_eq!(identity.department, Department::Commercial);
    }

    #[test]
    fn wrong_password_is_rejected() {
        let result = verifier().verify("ada@corp.test", "incorrect horse");
        assert_eq!(result, Err(CredentialError::InvalidCredentials));
    }

    #[test]
    fn unknown_email_is_indistinguishable_from_wrong_password() {
        let verifier = verifier();
        let unknown = verifier.verify("nobody@corp.test", "correct horse");
        let wrong = verifier.verify("ada@corp.test", "incorrect horse");
        assert_eq!(unknown, wrong);
    }

    #[test]
    fn email_lookup_is_case_sensitive() {
        let result = verifier().verify("Ada@corp.test", "correct horse");
        assert_eq!(result, Err(CredentialError::InvalidCredentials));
    }

    #[test]
    fn malformed_stored_hash_never_verifies() {
        assert!(!Argon2Verifier.verify("anything", &PasswordHash::new("not-a-phc-string")));
    }

    #[test]
    fn decoy_hash_parses_and_never_verifies() {
        assert!(!Argon2Verifier.verify("anything", &PasswordHash::new(DECOY_HASH)));
    }
}
