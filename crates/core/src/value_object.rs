//! Value object trait: equality by value, not identity.
//!
//! Quote requests, breakdowns and categories have **no identity**. Two quotes
//! built from the same inputs are the same quote.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Rate(f64);
///
/// impl ValueObject for Rate {}
///
/// assert_eq!(Rate(0.05), Rate(0.05));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
