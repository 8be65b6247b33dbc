//! Resource kinds and the ownership scoping key.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// The four resource kinds governed by the permission matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    User,
    Client,
    Contract,
    Event,
}

impl ResourceKind {
    /// All resource kinds, in declaration order.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::User,
        ResourceKind::Client,
        ResourceKind::Contract,
        ResourceKind::Event,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::User => "user",
            ResourceKind::Client => "client",
            ResourceKind::Contract => "contract",
            ResourceKind::Event => "event",
        }
    }
}

impl core::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scoping key for `own`/`assigned` permission rules.
///
/// Every client, contract, and event resolves to exactly one owning
/// commercial (directly, or transitively via the contract→client chain).
/// Events additionally carry zero or one assigned support identity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceOwnership {
    pub owning_commercial: UserId,
    pub assigned_support: Option<UserId>,
}

impl ResourceOwnership {
    pub fn owned_by(commercial: UserId) -> Self {
        Self {
            owning_commercial: commercial,
            assigned_support: None,
        }
    }

    pub fn with_support(mut self, support: UserId) -> Self {
        self.assigned_support = Some(support);
        self
    }

    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owning_commercial == user
    }

    /// False when no support is assigned.
    pub fn is_assigned_to(&self, user: UserId) -> bool {
        self.assigned_support == Some(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_predicates() {
        let owners = ResourceOwnership::owned_by(UserId::new(1)).with_support(UserId::new(2));

        assert!(owners.is_owned_by(UserId::new(1)));
        assert!(!owners.is_owned_by(UserId::new(2)));
        assert!(owners.is_assigned_to(UserId::new(2)));
        assert!(!owners.is_assigned_to(UserId::new(1)));
    }

    #[test]
    fn unassigned_event_matches_no_support() {
        let owners = ResourceOwnership::owned_by(UserId::new(1));
        assert!(!owners.is_assigned_to(UserId::new(1)));
        assert!(!owners.is_assigned_to(UserId::new(99)));
    }
}
