//! Event records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::{ContractId, EventId, UserId};

/// An event organized under a contract.
///
/// The owning commercial derives transitively: event → contract → client →
/// sales contact. The support assignment is optional and set by management.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub contract_id: ContractId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: String,
    pub attendees: u32,
    pub notes: Option<String>,
    /// The support collaborator assigned to run the event, if any.
    pub support_contact: Option<UserId>,
}

impl Event {
    pub fn validate(&self) -> DomainResult<()> {
        if self.end <= self.start {
            return Err(DomainError::invariant("event must end after it starts"));
        }
        Ok(())
    }
}
