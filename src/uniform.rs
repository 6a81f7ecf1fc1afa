//! Uniform random bid generation.
//!
//! Produces a synthetic market in one pass: every volume and reservation
//! price is sampled independently and uniformly from the shared grid, with
//! seller and buyer prices shifted by per-side offsets.

use rand::Rng;

use crate::error::DatagenError;
use crate::grid::SampleGrid;
use crate::types::{Bid, UserId};

/// Generate `buyer_count + seller_count` random bids.
///
/// Quantities and prices are drawn without replacement from the grid of
/// multiples of `precision` in `[0, 1)`; seller prices are shifted by
/// `seller_offset` and buyer prices by `buyer_offset`. A given agent's
/// quantity and price are independent draws.
///
/// The returned batch lists buyers first, then sellers, with `user_id`
/// running contiguously from 0 in that order. For a fixed RNG state the
/// output is reproducible: the routine makes exactly four draws against
/// `rng`, in the order buyer quantities, buyer prices, seller quantities,
/// seller prices.
///
/// Distinctness holds within each side only. Buyer and seller prices come
/// from offset copies of the same grid, so when the two offset ranges
/// overlap a buyer and a seller may still share a price.
///
/// Fails before consuming any entropy when `precision` is outside `(0, 1)`
/// or either side requests more distinct values than the grid holds
/// (`count > 1/precision`).
pub fn generate<R: Rng>(
    buyer_count: usize,
    seller_count: usize,
    seller_offset: f64,
    buyer_offset: f64,
    rng: &mut R,
    precision: f64,
) -> Result<Vec<Bid>, DatagenError> {
    let grid = SampleGrid::new(precision)?;
    for count in [buyer_count, seller_count] {
        if count > grid.len() {
            return Err(DatagenError::SamplingExhausted {
                requested: count,
                available: grid.len(),
            });
        }
    }

    let sides = [
        (buyer_count, buyer_offset, true),
        (seller_count, seller_offset, false),
    ];

    let mut bids = Vec::with_capacity(buyer_count + seller_count);
    let mut user: UserId = 0;

    for (count, offset, is_buyer) in sides {
        let quantities = grid.sample(rng, count)?;
        let prices = grid.sample(rng, count)?;

        for (quantity, price) in quantities.into_iter().zip(prices) {
            bids.push(Bid {
                quantity,
                price: price + offset,
                user_id: user,
                is_buyer,
                time: 0,
                divisible: true,
            });
            user += 1;
        }
    }

    #[cfg(feature = "instrument")]
    tracing::info!(
        target: "bid_generation",
        buyers = buyer_count,
        sellers = seller_count,
        grid_points = grid.len(),
    );

    Ok(bids)
}

/// Same as [`generate`] with a fresh OS-seeded RNG created at the call
/// site. Output is not reproducible across calls.
pub fn generate_unseeded(
    buyer_count: usize,
    seller_count: usize,
    seller_offset: f64,
    buyer_offset: f64,
    precision: f64,
) -> Result<Vec<Bid>, DatagenError> {
    let mut rng = rand::rng();
    generate(
        buyer_count,
        seller_count,
        seller_offset,
        buyer_offset,
        &mut rng,
        precision,
    )
}
