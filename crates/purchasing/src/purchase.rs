use serde::{Deserialize, Serialize};

use shopfront_core::{AggregateId, AggregateRoot, Currency, Money};
use shopfront_parties::{Customer, CustomerId};
use shopfront_products::Product;

use crate::error::{ProductRejected, PurchaseError};
use crate::policy::PurchasePolicy;

/// Purchase identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseId(pub AggregateId);

impl PurchaseId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }

    /// Fresh `pr-` prefixed identifier.
    pub fn generate() -> Self {
        Self(AggregateId::generate("pr"))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl core::fmt::Display for PurchaseId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Purchase status lifecycle: `New` -> `Confirmed`, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    New,
    Confirmed,
}

/// Aggregate root: Purchase.
///
/// Invariants:
/// - only exists for a customer who was of legal age when it was opened
/// - `total_cost` is the sum of the prices of `products`
/// - no product in `products` was already purchased when it was added
/// - status only moves from `New` to `Confirmed`
#[derive(Debug, PartialEq, Eq)]
pub struct Purchase {
    id: PurchaseId,
    customer_id: CustomerId,
    products: Vec<Product>,
    total_cost: Money,
    status: PurchaseStatus,
    version: u64,
}

impl Purchase {
    /// Open a purchase for `customer` under the default [`PurchasePolicy`].
    pub fn new(id: PurchaseId, customer: &Customer) -> Result<Self, PurchaseError> {
        Self::with_policy(id, customer, &PurchasePolicy::default())
    }

    /// Open a purchase for `customer`, checking eligibility against `policy`.
    pub fn with_policy(
        id: PurchaseId,
        customer: &Customer,
        policy: &PurchasePolicy,
    ) -> Result<Self, PurchaseError> {
        if !customer.is_of_age(policy.legal_age) {
            return Err(PurchaseError::CustomerNotAllowedToPurchase {
                customer_id: customer.id_typed().clone(),
                legal_age: policy.legal_age,
            });
        }

        tracing::debug!(
            purchase_id = %id,
            customer_id = %customer.id_typed(),
            currency = %policy.currency,
            "purchase opened"
        );

        Ok(Self {
            id,
            customer_id: customer.id_typed().clone(),
            products: Vec::new(),
            total_cost: Money::zero(policy.currency),
            status: PurchaseStatus::New,
            version: 0,
        })
    }

    pub fn id_typed(&self) -> &PurchaseId {
        &self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn status(&self) -> PurchaseStatus {
        self.status
    }

    pub fn currency(&self) -> Currency {
        self.total_cost.currency()
    }

    /// Products in the order they were added.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Running total; available before confirmation.
    pub fn total_cost(&self) -> Money {
        self.total_cost
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == PurchaseStatus::Confirmed
    }

    /// Take ownership of `product`, mark it purchased and add its price to the
    /// total.
    ///
    /// A product that is already purchased is rejected with
    /// [`PurchaseError::ProductAlreadyPurchased`]. A price in another currency
    /// is rejected with [`PurchaseError::Money`]. On rejection nothing changes
    /// and the product is handed back inside the [`ProductRejected`] error.
    pub fn add_product(&mut self, mut product: Product) -> Result<(), ProductRejected> {
        if product.is_purchased() {
            let reason = PurchaseError::ProductAlreadyPurchased {
                product_id: product.id_typed().clone(),
            };
            return Err(ProductRejected::new(reason, product));
        }

        let total_cost = match self.total_cost.checked_add(product.price()) {
            Ok(total_cost) => total_cost,
            Err(e) => return Err(ProductRejected::new(e.into(), product)),
        };

        product.purchase();
        self.total_cost = total_cost;

        tracing::debug!(
            purchase_id = %self.id,
            product_id = %product.id_typed(),
            price = %product.price(),
            total = %self.total_cost,
            "product added to purchase"
        );

        self.products.push(product);
        self.version += 1;
        Ok(())
    }

    /// Confirm the purchase.
    ///
    /// Requires at least one product. Confirming an already confirmed purchase
    /// is a no-op.
    pub fn confirm(&mut self) -> Result<(), PurchaseError> {
        if self.products.is_empty() {
            return Err(PurchaseError::NoProductAddedToPurchase {
                purchase_id: self.id.clone(),
            });
        }

        if self.is_confirmed() {
            tracing::debug!(purchase_id = %self.id, "purchase already confirmed");
            return Ok(());
        }

        self.status = PurchaseStatus::Confirmed;
        self.version += 1;

        tracing::debug!(
            purchase_id = %self.id,
            products = self.products.len(),
            total = %self.total_cost,
            "purchase confirmed"
        );
        Ok(())
    }

    /// Hand the purchased products over, consuming the purchase.
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}

impl AggregateRoot for Purchase {
    type Id = PurchaseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
