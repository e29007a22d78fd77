//! Purchasing domain module (customer purchases).
//!
//! This crate contains the business rules for a customer buying products,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod error;
pub mod policy;
pub mod purchase;

pub use error::{ProductRejected, PurchaseError};
pub use policy::{CURRENCY_ENV, LEGAL_AGE_ENV, PurchasePolicy};
pub use purchase::{Purchase, PurchaseId, PurchaseStatus};
