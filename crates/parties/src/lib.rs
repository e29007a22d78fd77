//! Parties domain module (customers).
//!
//! This crate contains the customer record consumed by purchasing, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod customer;

pub use customer::{Customer, CustomerId, LEGAL_AGE};
