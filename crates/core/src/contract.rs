//! Contract records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::{ClientId, ContractId};

/// A contract signed (or pending signature) with a client.
///
/// Carries no owner of its own: the owning commercial derives from the
/// client this contract belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    pub client_id: ClientId,
    pub amount: f64,
    pub remaining_amount: f64,
    pub created_at: DateTime<Utc>,
    pub signed: bool,
}

impl Contract {
    pub fn validate(&self) -> DomainResult<()> {
        if self.amount < 0.0 {
            return Err(DomainError::validation("amount must be >= 0"));
        }
        if self.remaining_amount < 0.0 {
            return Err(DomainError::validation("remaining amount must be >= 0"));
        }
        Ok(())
    }

    pub fn is_fully_paid(&self) -> bool {
        self.remaining_amount == 0.0
    }
}
