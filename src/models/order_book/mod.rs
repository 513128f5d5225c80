//! Toy limit order book
//!
//! A small, self-contained book used to animate depth, spread and a recent
//! trades tape. It is not a matching engine: crossing limit orders print at the
//! opposite best price without touching resting liquidity, and liquidity that is
//! consumed is replenished one tick beyond the far end of the book.
//!
//! The book is the only stateful model in the crate. The caller owns it together
//! with the random generator that drives its background flow.

pub mod book;
pub mod types;

pub use book::*;
pub use types::*;
