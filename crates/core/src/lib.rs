//! `venuecrm-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): typed identifiers, the closed department set, identity and
//! resource records, and input validation.

pub mod client;
pub mod contract;
pub mod department;
pub mod error;
pub mod event;
pub mod id;
pub mod identity;
pub mod resource;
pub mod validate;

pub use client::Client;
pub use contract::Contract;
pub use department::Department;
pub use error::{DomainError, DomainResult};
pub use event::Event;
pub use id::{ClientId, ContractId, EventId, ResourceId, UserId};
pub use identity::{Identity, PasswordHash};
pub use resource::{ResourceKind, ResourceOwnership};
