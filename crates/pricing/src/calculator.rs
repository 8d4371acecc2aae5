//! Price calculator.
//!
//! Markups are applied in a fixed order: the flat markup turns the base price
//! into the subtotal, then person and category markups are added as fractions
//! of that subtotal. The last two are independent additive terms.

use pricekit_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::markup::{FLAT_MARKUP, PERSON_MARKUP};
use crate::quote::PriceBreakdown;

fn validate(base_price: f64, num_people: i64) -> DomainResult<()> {
    if base_price < 0.0 {
        return Err(DomainError::invalid_argument("base price cannot be negative"));
    }
    if !base_price.is_finite() {
        return Err(DomainError::invalid_argument("base price must be a finite number"));
    }
    if num_people < 0 {
        return Err(DomainError::invalid_argument("number of people cannot be negative"));
    }
    Ok(())
}

/// Compute the itemized marked-up price.
///
/// Inputs are validated before any arithmetic. An absent or unrecognized
/// category adds no markup and is not an error.
pub fn calculate_breakdown(
    base_price: f64,
    num_people: i64,
    category: Option<&str>,
) -> DomainResult<PriceBreakdown> {
    if let Err(err) = validate(base_price, num_people) {
        tracing::warn!(base_price, num_people, error = %err, "rejected price calculation");
        return Err(err);
    }

    let subtotal = base_price + base_price * FLAT_MARKUP;

    let person_markup = if num_people > 0 {
        subtotal * PERSON_MARKUP * num_people as f64
    } else {
        0.0
    };

    let recognized = category.and_then(Category::from_label);
    let category_markup = match recognized {
        Some(c) => subtotal * c.rate(),
        None => {
            if let Some(label) = category {
                tracing::debug!(category = label, "no markup for unrecognized category");
            }
            0.0
        }
    };

    let final_price = subtotal + person_markup + category_markup;

    tracing::debug!(
        base_price,
        num_people,
        category = ?recognized,
        subtotal,
        final_price,
        "calculated marked-up price"
    );

    Ok(PriceBreakdown {
        base_price,
        subtotal,
        person_markup,
        category_markup,
        final_price,
        category: recognized,
    })
}

/// Compute the final marked-up price of an item.
pub fn calculate_marked_up_price(
    base_price: f64,
    num_people: i64,
    category: Option<&str>,
) -> DomainResult<f64> {
    Ok(calculate_breakdown(base_price, num_people, category)?.final_price)
}
