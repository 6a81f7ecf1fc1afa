//! Synthetic order-book data for market-mechanism simulations.
//!
//! The crate generates artificial buyer and seller bids for double
//! auctions and demand/supply curve construction. All volumes and
//! reservation prices are sampled uniformly from a shared discretized
//! domain, without replacement per market side, so within each side every
//! agent holds a distinct quantity and a distinct price.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(420);
//! let bids = market_datagen::generate(2, 3, 1.0, 2.0, &mut rng, 0.1).unwrap();
//! assert_eq!(bids.len(), 5);
//! ```

mod error;
mod grid;
mod types;
mod uniform;

pub use error::*;
pub use grid::*;
pub use types::*;
pub use uniform::*;
