//! The department × resource × action permission matrix.
//!
//! Permission policy is a single static table plus one ownership predicate,
//! evaluated by the access decision engine. Adding a resource kind or a
//! department privilege means adding a row here, not new control flow.

use serde::{Deserialize, Serialize};

use venuecrm_core::{Department, ResourceKind};

/// Operations a caller can request on a resource kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    List,
    /// Attach a support collaborator to an event.
    Assign,
}

impl Action {
    /// All actions, in declaration order.
    pub const ALL: [Action; 6] = [
        Action::Create,
        Action::Read,
        Action::Update,
        Action::Delete,
        Action::List,
        Action::Assign,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::List => "list",
            Action::Assign => "assign",
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ownership qualification attached to an allow rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Department alone decides.
    Any,
    /// Caller must be the resource's owning commercial.
    OwningCommercial,
    /// Caller must be the support collaborator assigned to the resource.
    AssignedSupport,
}

/// One allow row of the matrix. Anything not in the table is denied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rule {
    pub department: Department,
    pub resource: ResourceKind,
    pub action: Action,
    pub scope: Scope,
}

const fn rule(
    department: Department,
    resource: ResourceKind,
    action: Action,
    scope: Scope,
) -> Rule {
    Rule {
        department,
        resource,
        action,
        scope,
    }
}

use Action::{Assign, Create, Delete, List, Read, Update};
use Department::{Commercial, Management, Support};
use ResourceKind::{Client, Contract, Event, User};
use Scope::{Any, AssignedSupport, OwningCommercial};

/// The complete access-control matrix.
pub const RULES: &[Rule] = &[
    // Users: management administers collaborator accounts; nobody else
    // touches them, including reads.
    rule(Management, User, Create, Any),
    rule(Management, User, Read, Any),
    rule(Management, User, Update, Any),
    rule(Management, User, Delete, Any),
    rule(Management, User, List, Any),
    // Clients: created by commercials (owner := creator); read everywhere.
    rule(Commercial, Client, Create, Any),
    rule(Commercial, Client, Read, Any),
    rule(Commercial, Client, List, Any),
    rule(Support, Client, Read, Any),
    rule(Support, Client, List, Any),
    rule(Management, Client, Read, Any),
    rule(Management, Client, List, Any),
    rule(Commercial, Client, Update, OwningCommercial),
    rule(Commercial, Client, Delete, OwningCommercial),
    rule(Management, Client, Update, Any),
    rule(Management, Client, Delete, Any),
    // Contracts: minted and retired by management; commercials update the
    // ones belonging to their own clients.
    rule(Management, Contract, Create, Any),
    rule(Commercial, Contract, Read, Any),
    rule(Commercial, Contract, List, Any),
    rule(Support, Contract, Read, Any),
    rule(Support, Contract, List, Any),
    rule(Management, Contract, Read, Any),
    rule(Management, Contract, List, Any),
    rule(Commercial, Contract, Update, OwningCommercial),
    rule(Management, Contract, Update, Any),
    rule(Management, Contract, Delete, Any),
    // Events: created by commercials; updated by the owning commercial or
    // the assigned support; management assigns supports and deletes.
    rule(Commercial, Event, Create, Any),
    rule(Commercial, Event, Read, Any),
    rule(Commercial, Event, List, Any),
    rule(Support, Event, Read, Any),
    rule(Support, Event, List, Any),
    rule(Management, Event, Read, Any),
    rule(Management, Event, List, Any),
    rule(Commercial, Event, Update, OwningCommercial),
    rule(Support, Event, Update, AssignedSupport),
    rule(Management, Event, Assign, Any),
    rule(Management, Event, Delete, Any),
];

/// Look up the (department, resource, action) cell of the matrix.
///
/// `None` means denied; `Some(scope)` means allowed, possibly subject to the
/// ownership predicate.
pub fn permission_for(
    department: Department,
    resource: ResourceKind,
    action: Action,
) -> Option<Scope> {
    RULES
        .iter()
        .find(|r| r.department == department && r.resource == resource && r.action == action)
        .map(|r| r.scope)
}
