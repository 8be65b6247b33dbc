//! Client records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainResult;
use crate::id::{ClientId, UserId};
use crate::resource::ResourceOwnership;
use crate::validate;

/// A client of the company.
///
/// The owning commercial is recorded directly on the client; contracts and
/// events reach their owning commercial through this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    /// The commercial responsible for this client (set at creation).
    pub sales_contact: UserId,
}

impl Client {
    pub fn ownership(&self) -> ResourceOwnership {
        ResourceOwnership::owned_by(self.sales_contact)
    }

    /// Format checks on contact fields.
    pub fn validate(&self) -> DomainResult<()> {
        validate::email_format(&self.email)?;
        validate::phone_format(&self.phone)?;
        Ok(())
    }
}
