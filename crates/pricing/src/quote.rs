use serde::{Deserialize, Serialize};

use pricekit_core::{DomainResult, ValueObject};

use crate::calculator::calculate_breakdown;
use crate::category::Category;

/// Inputs for a single price quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuoteRequest {
    pub base_price: f64,
    pub num_people: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ValueObject for PriceQuoteRequest {}

impl PriceQuoteRequest {
    pub fn new(base_price: f64, num_people: i64, category: Option<impl Into<String>>) -> Self {
        Self {
            base_price,
            num_people,
            category: category.map(Into::into),
        }
    }

    /// Price this request.
    pub fn quote(&self) -> DomainResult<PriceBreakdown> {
        calculate_breakdown(self.base_price, self.num_people, self.category.as_deref())
    }
}

/// Itemized result of a price calculation.
///
/// `final_price` is always `subtotal + person_markup + category_markup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_price: f64,
    /// Base price after the flat markup.
    pub subtotal: f64,
    pub person_markup: f64,
    pub category_markup: f64,
    pub final_price: f64,
    /// Recognized category, `None` when absent or not in the markup table.
    pub category: Option<Category>,
}

impl ValueObject for PriceBreakdown {}

#[cfg(test)]
mod tests {
    use super::*;
    use pricekit_core::DomainError;

    #[test]
    fn quote_prices_request() {
        let request = PriceQuoteRequest::new(100.0, 0, Some("electronic"));
        let breakdown = request.quote().unwrap();
        assert!((breakdown.final_price - 107.1).abs() < 1e-9);
        assert_eq!(breakdown.category, Some(Category::Electronic));
    }

    #[test]
    fn quote_surfaces_invalid_argument() {
        let request = PriceQuoteRequest::new(10.0, -1, Some("food"));
        match request.quote().unwrap_err() {
            DomainError::InvalidArgument(msg) => {
                assert_eq!(msg, "number of people cannot be negative")
            }
        }
    }

    #[test]
    fn request_without_category_deserializes() {
        let request: PriceQuoteRequest =
            serde_json::from_str(r#"{"base_price": 0.0, "num_people": 0}"#).unwrap();
        assert_eq!(request, PriceQuoteRequest::new(0.0, 0, None::<String>));
        assert_eq!(request.quote().unwrap().final_price, 0.0);
    }
}
