//! Pricing domain module.
//!
//! Computes marked-up sale prices from a base price, the number of people who
//! contributed to an item, and an optional category label. Pure, deterministic
//! domain logic (no IO, no shared mutable state).

pub mod calculator;
pub mod category;
pub mod markup;
pub mod quote;

pub use calculator::{calculate_breakdown, calculate_marked_up_price};
pub use category::Category;
pub use markup::{FLAT_MARKUP, MARKUP_TABLE, PERSON_MARKUP, markup_rate};
pub use quote::{PriceBreakdown, PriceQuoteRequest};
