//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two values with
/// the same attributes are interchangeable. To "modify" one, build a new one.
///
/// - **Value Object**: `Money { amount: 100, currency: PLN }`
/// - **Entity**: `Product { id: ProductId(...), .. }` (identity matters)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
