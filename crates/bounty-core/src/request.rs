//! # Bounty Contract Request
//!
//! The finalized, immutable artifact a composer hands to its host. The
//! host is responsible for transport; this crate only defines the shape.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::identity::CollectionId;

/// A request to create a bounty contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BountyContractRequest {
    /// Collection the contract is posted to.
    pub collection: CollectionId,
    /// Contract category.
    pub category: Category,
    /// Target name.
    pub name: String,
    /// Target DNA, if known.
    pub dna: Option<String>,
    /// Vessel the target was last seen on.
    pub vessel: String,
    /// Free-text description.
    pub description: String,
    /// Reward in spesos.
    pub reward: i32,
}
