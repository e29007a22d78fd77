use serde::{Deserialize, Serialize};

use shopfront_core::{AggregateId, Entity, Money};

/// Product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub AggregateId);

impl ProductId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }

    /// Fresh `p-` prefixed identifier.
    pub fn generate() -> Self {
        Self(AggregateId::generate("p"))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A single sellable item with a fixed price.
///
/// Not `Clone`: a product value has exactly one owner, and once a purchase
/// takes it the `purchased` flag can only go from `false` to `true`.
#[derive(Debug, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    price: Money,
    purchased: bool,
}

impl Product {
    /// New, not yet purchased product.
    pub fn new(id: ProductId, price: Money) -> Self {
        Self {
            id,
            price,
            purchased: false,
        }
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn is_purchased(&self) -> bool {
        self.purchased
    }

    /// Mark the product as purchased.
    ///
    /// Performs no guard of its own; callers that must not sell a product
    /// twice check [`Product::is_purchased`] first.
    pub fn purchase(&mut self) {
        self.purchased = true;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::Currency;

    fn test_product(amount: i64) -> Product {
        Product::new(ProductId::generate(), Money::new(amount, Currency::PLN))
    }

    #[test]
    fn new_product_is_not_purchased() {
        let product = test_product(100);

        assert!(!product.is_purchased());
        assert_eq!(product.price(), Money::new(100, Currency::PLN));
        assert!(product.id_typed().as_str().starts_with("p-"));
    }

    #[test]
    fn purchase_flips_flag_once_and_for_all() {
        let mut product = test_product(42);

        product.purchase();
        assert!(product.is_purchased());

        product.purchase();
        assert!(product.is_purchased());
        assert_eq!(product.price().amount(), 42);
    }

    #[test]
    fn identity_ignores_purchase_state() {
        let id = ProductId::new(AggregateId::parse("p-1").unwrap());
        let price = Money::new(10, Currency::PLN);
        let fresh = Product::new(id.clone(), price);
        let mut sold = Product::new(id, price);
        sold.purchase();

        assert!(fresh.same_identity_as(&sold));
        assert_ne!(fresh, sold);
        assert!(!fresh.same_identity_as(&test_product(10)));
    }
}
