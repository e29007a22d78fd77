//! Failures of purchase operations.

use thiserror::Error;

use shopfront_core::{DomainError, MoneyError};
use shopfront_parties::CustomerId;
use shopfront_products::{Product, ProductId};

use crate::purchase::PurchaseId;

/// Why a purchase operation was rejected.
///
/// Every variant leaves the purchase (and any product passed in) unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    /// The customer is younger than the legal age; no purchase was opened.
    #[error("customer {customer_id} is not of legal age ({legal_age})")]
    CustomerNotAllowedToPurchase {
        customer_id: CustomerId,
        legal_age: u32,
    },

    /// The product has already been purchased, here or elsewhere.
    #[error("product {product_id} is already purchased")]
    ProductAlreadyPurchased { product_id: ProductId },

    /// Confirmation requires at least one product.
    #[error("purchase {purchase_id} should have at least one product added")]
    NoProductAddedToPurchase { purchase_id: PurchaseId },

    /// The product price could not be added to the running total.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl From<PurchaseError> for DomainError {
    fn from(err: PurchaseError) -> Self {
        match err {
            PurchaseError::CustomerNotAllowedToPurchase { .. }
            | PurchaseError::ProductAlreadyPurchased { .. } => DomainError::invariant(err.to_string()),
            PurchaseError::NoProductAddedToPurchase { .. } => {
                DomainError::validation(err.to_string())
            }
            PurchaseError::Money(e) => e.into(),
        }
    }
}

/// A product [`crate::Purchase::add_product`] refused, handed back unchanged
/// together with the reason.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct ProductRejected {
    reason: PurchaseError,
    product: Product,
}

impl ProductRejected {
    pub fn new(reason: PurchaseError, product: Product) -> Self {
        Self { reason, product }
    }

    pub fn reason(&self) -> &PurchaseError {
        &self.reason
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Recover the product, e.g. to offer it to another purchase.
    pub fn into_product(self) -> Product {
        self.product
    }

    pub fn into_parts(self) -> (PurchaseError, Product) {
        (self.reason, self.product)
    }
}

impl From<ProductRejected> for PurchaseError {
    fn from(err: ProductRejected) -> Self {
        err.reason
    }
}

impl From<ProductRejected> for DomainError {
    fn from(err: ProductRejected) -> Self {
        err.reason.into()
    }
}
