//! `venuecrm-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from storage and transport: the
//! persistence layer plugs in through the [`IdentityDirectory`] and
//! [`OwnershipResolver`] capabilities, and every CRUD command consults
//! [`AccessEngine`] before acting.

pub mod authorize;
pub mod claims;
pub mod config;
pub mod credentials;
pub mod ownership;
pub mod permissions;
pub mod token;

pub use authorize::{AccessEngine, AccessError};
pub use claims::{ClaimsError, SessionClaims, validate_claims};
pub use config::{ConfigError, SessionConfig, SigningAlgorithm};
pub use credentials::{
    Argon2Verifier, CredentialError, CredentialVerifier, IdentityDirectory, PasswordVerifier,
};
pub use ownership::OwnershipResolver;
pub use permissions::{Action, RULES, Rule, Scope, permission_for};
pub use token::{SessionService, TokenError};
