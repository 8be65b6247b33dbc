//! Resource-ownership lookup capability.

use venuecrm_core::{ResourceId, ResourceKind, ResourceOwnership};

/// Ownership lookup provided by the persistence layer.
///
/// Given a resource id and kind, returns the owning commercial and (for
/// events) the assigned support. Implementations resolve the chain
/// explicitly per kind: clients carry their owner directly, contracts reach
/// it through their client, events through their contract's client. `None`
/// means the resource does not exist.
pub trait OwnershipResolver {
    fn ownership_of(&self, resource: ResourceKind, id: ResourceId) -> Option<ResourceOwnership>;
}
