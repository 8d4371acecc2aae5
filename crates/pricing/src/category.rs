use serde::{Deserialize, Serialize};

use pricekit_core::ValueObject;

/// Item category carrying its own markup on top of the flat and person markups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pharmaceutical,
    Food,
    Electronic,
}

impl ValueObject for Category {}

impl Category {
    pub const ALL: [Category; 3] = [Category::Pharmaceutical, Category::Food, Category::Electronic];

    /// Look up a category by its exact (case-sensitive) label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Pharmaceutical => "pharmaceutical",
            Category::Food => "food",
            Category::Electronic => "electronic",
        }
    }

    /// Markup rate as a fraction of the subtotal (0.075 = 7.5%).
    pub const fn rate(self) -> f64 {
        match self {
            Category::Pharmaceutical => 0.075,
            Category::Food => 0.13,
            Category::Electronic => 0.02,
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
