//! Markup rates.
//!
//! All rates are fractions (0.05 = 5%) fixed at compile time and never
//! mutated. Person and category markups apply to the flat-marked-up subtotal,
//! never to the raw base price.

use crate::category::Category;

/// Flat markup applied to every base price before anything else.
pub const FLAT_MARKUP: f64 = 0.05;

/// Markup added once per contributing person.
pub const PERSON_MARKUP: f64 = 0.012;

/// Category label to markup rate.
pub const MARKUP_TABLE: [(&str, f64); 3] = [
    (Category::Pharmaceutical.as_str(), Category::Pharmaceutical.rate()),
    (Category::Food.as_str(), Category::Food.rate()),
    (Category::Electronic.as_str(), Category::Electronic.rate()),
];

/// Markup rate for a category label, or `None` when the label is not in the table.
pub fn markup_rate(label: &str) -> Option<f64> {
    Category::from_label(label).map(Category::rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_holds_expected_rates() {
        assert_eq!(MARKUP_TABLE[0], ("pharmaceutical", 0.075));
        assert_eq!(MARKUP_TABLE[1], ("food", 0.13));
        assert_eq!(MARKUP_TABLE[2], ("electronic", 0.02));
    }

    #[test]
    fn markup_rate_agrees_with_table() {
        for (label, rate) in MARKUP_TABLE {
            assert_eq!(markup_rate(label), Some(rate));
        }
        assert_eq!(markup_rate("furniture"), None);
    }

    #[test]
    fn all_rates_are_non_negative() {
        assert!(FLAT_MARKUP >= 0.0);
        assert!(PERSON_MARKUP >= 0.0);
        assert!(MARKUP_TABLE.iter().all(|(_, rate)| *rate >= 0.0));
    }
}
