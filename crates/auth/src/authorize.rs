//! The access decision engine.
//!
//! Composes session validation, the permission matrix, and ownership
//! scoping into a single allow/deny decision per request. Every resource
//! operation calls [`AccessEngine::authorize`] before acting; the decision
//! is final and non-retryable for that request.

use chrono::Utc;
use thiserror::Error;

use venuecrm_core::{ResourceId, ResourceKind, ResourceOwnership, UserId};

use crate::claims::SessionClaims;
use crate::config::SessionConfig;
use crate::credentials::{
    CredentialError, CredentialVerifier, IdentityDirectory, PasswordVerifier,
};
use crate::ownership::OwnershipResolver;
use crate::permissions::{Action, Scope, permission_for};
use crate::token::SessionService;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Missing, expired, malformed, or tampered session. The caller must
    /// log in again.
    #[error("unauthenticated")]
    Unauthenticated,

    /// Valid session, insufficient rights. Not recoverable by
    /// re-authentication.
    #[error("forbidden")]
    Forbidden,
}

/// The single gate every resource operation passes through.
///
/// Stateless between requests: the only shared state is the immutable
/// signing material and the static permission matrix, so concurrent
/// authorizations need no coordination.
pub struct AccessEngine<D, P, R> {
    credentials: CredentialVerifier<D, P>,
    sessions: SessionService,
    ownership: R,
}

impl<D, P, R> AccessEngine<D, P, R>
where
    D: IdentityDirectory,
    P: PasswordVerifier,
    R: OwnershipResolver,
{
    pub fn new(config: &SessionConfig, directory: D, passwords: P, ownership: R) -> Self {
        Self {
            credentials: CredentialVerifier::new(directory, passwords),
            sessions: SessionService::new(config),
            ownership,
        }
    }

    /// Verify credentials and mint a session token.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<String, CredentialError> {
        let identity = self.credentials.verify(email, password)?;
        // HMAC issuance only fails if the claims fail to serialize, which
        // cannot happen for these types; keep the boundary to one failure
        // kind.
        self.sessions.issue(&identity, Utc::now()).map_err(|e| {
            tracing::error!("token issuance failed: {e}");
            CredentialError::InvalidCredentials
        })
    }

    /// Decide whether the session behind `token` may perform `action` on
    /// `resource`.
    ///
    /// `target` identifies the acted-on resource for ownership-scoped rules;
    /// it is absent at create time, where ownership is established by
    /// assignment rather than checked.
    pub fn authorize(
        &self,
        token: &str,
        resource: ResourceKind,
        action: Action,
        target: Option<ResourceId>,
    ) -> Result<SessionClaims, AccessError> {
        let claims = self.sessions.validate(token, Utc::now()).map_err(|e| {
            tracing::warn!("rejected session token: {e}");
            AccessError::Unauthenticated
        })?;

        let Some(scope) = permission_for(claims.department, resource, action) else {
            tracing::warn!(
                "user {} ({}) denied {action} on {resource}",
                claims.sub,
                claims.department
            );
            return Err(AccessError::Forbidden);
        };

        match scope {
            Scope::Any => Ok(claims),
            Scope::OwningCommercial => {
                self.check_scoped(claims, resource, action, target, ResourceOwnership::is_owned_by)
            }
            Scope::AssignedSupport => self.check_scoped(
                claims,
                resource,
                action,
                target,
                ResourceOwnership::is_assigned_to,
            ),
        }
    }

    fn check_scoped(
        &self,
        claims: SessionClaims,
        resource: ResourceKind,
        action: Action,
        target: Option<ResourceId>,
        permits: fn(&ResourceOwnership, UserId) -> bool,
    ) -> Result<SessionClaims, AccessError> {
        // No target yet (create time): ownership is fixed at creation, not
        // checked against a pre-existing resource.
        let Some(id) = target else {
            return Ok(claims);
        };

        let Some(owners) = self.ownership.ownership_of(resource, id) else {
            tracing::warn!(
                "user {} denied {action} on unresolvable {resource} {id}",
                claims.sub
            );
            return Err(AccessError::Forbidden);
        };

        if permits(&owners, claims.sub) {
            Ok(claims)
        } else {
            tracing::warn!(
                "user {} ({}) denied {action} on {resource} {id}: ownership mismatch",
                claims.sub,
                claims.department
            );
            Err(AccessError::Forbidden)
        }
    }
}
