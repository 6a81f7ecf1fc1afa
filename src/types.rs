// Core type aliases and the bid record

use serde::{Deserialize, Serialize};

// === TYPE ALIASES ===

pub type Price = f64;
pub type Quantity = f64;
pub type UserId = u32;
pub type TimeStep = u64;

// === BID RECORD ===

/// One synthetic offer to buy or sell a quantity at a reservation price.
///
/// The field order is the contract downstream consumers (demand-curve
/// builders, auction mechanisms) rely on; serialization preserves the
/// declaration order. The generator always emits `time = 0` and
/// `divisible = true`; consumers are free to mutate both afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    /// Volume offered or demanded, in `[0, 1)`.
    pub quantity: Quantity,
    /// Buyer's maximum willingness to pay, or seller's minimum willingness
    /// to accept, already shifted by the side's offset.
    pub price: Price,
    /// Unique per batch, contiguous from 0, buyers first.
    pub user_id: UserId,
    pub is_buyer: bool,
    /// Discrete time step; always the initial step here.
    pub time: TimeStep,
    /// Whether the quantity may be partially filled.
    pub divisible: bool,
}
