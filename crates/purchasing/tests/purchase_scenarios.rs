//! End-to-end purchase scenarios across customers, products and purchases.

use shopfront_core::{AggregateId, AggregateRoot, Currency, DomainError, Money};
use shopfront_parties::{Customer, CustomerId};
use shopfront_products::{Product, ProductId};
use shopfront_purchasing::{Purchase, PurchaseError, PurchaseId, PurchasePolicy, PurchaseStatus};

fn customer(age: u32) -> Customer {
    Customer::new(CustomerId::generate(), age)
}

fn product(amount: i64) -> Product {
    Product::new(ProductId::generate(), Money::new(amount, Currency::PLN))
}

fn purchase_for(customer: &Customer) -> Purchase {
    Purchase::new(PurchaseId::generate(), customer).unwrap()
}

#[test]
fn customer_can_purchase_a_product() {
    shopfront_observability::init();

    let mut purchase = purchase_for(&customer(18));

    purchase.add_product(product(100)).unwrap();
    purchase.confirm().unwrap();

    assert!(purchase.is_confirmed());
    assert_eq!(purchase.total_cost().amount(), 100);
}

#[test]
fn customer_can_purchase_multiple_products() {
    let mut purchase = purchase_for(&customer(18));

    purchase.add_product(product(120)).unwrap();
    purchase.add_product(product(480)).unwrap();
    purchase.confirm().unwrap();

    assert!(purchase.is_confirmed());
    assert_eq!(purchase.products().len(), 2);
    assert_eq!(purchase.total_cost().amount(), 600);
}

#[test]
fn under_age_customer_is_turned_away_before_adding_anything() {
    let result = Purchase::new(PurchaseId::generate(), &customer(16));

    match result {
        Err(PurchaseError::CustomerNotAllowedToPurchase { legal_age, .. }) => {
            assert_eq!(legal_age, 18);
        }
        other => panic!("Expected CustomerNotAllowedToPurchase, got {other:?}"),
    }
}

#[test]
fn product_bought_in_one_purchase_cannot_be_bought_in_another() {
    let buyer = customer(18);
    let mut first = purchase_for(&buyer);
    let mut second = purchase_for(&buyer);

    first.add_product(product(250)).unwrap();
    first.confirm().unwrap();

    let reoffered = first.into_products().pop().unwrap();
    let err = second.add_product(reoffered).unwrap_err();

    assert!(matches!(
        err.reason(),
        PurchaseError::ProductAlreadyPurchased { .. }
    ));
    assert!(err.into_product().is_purchased());
    assert!(second.products().is_empty());
    assert!(matches!(
        second.confirm(),
        Err(PurchaseError::NoProductAddedToPurchase { .. })
    ));
}

#[test]
fn purchase_without_products_cannot_be_confirmed() {
    let mut purchase = purchase_for(&customer(21));

    let err = purchase.confirm().unwrap_err();

    assert!(matches!(err, PurchaseError::NoProductAddedToPurchase { .. }));
    assert!(!purchase.is_confirmed());
    assert_eq!(purchase.status(), PurchaseStatus::New);
}

#[test]
fn total_cost_for_single_product() {
    let mut purchase = purchase_for(&customer(18));

    purchase.add_product(product(100)).unwrap();

    assert_eq!(purchase.total_cost().amount(), 100);
    assert!(!purchase.is_confirmed());
}

#[test]
fn total_cost_for_multiple_products_in_any_order() {
    let orders: [[i64; 3]; 3] = [[100, 66, 11], [11, 100, 66], [66, 11, 100]];

    for prices in orders {
        let mut purchase = purchase_for(&customer(18));
        for amount in prices {
            purchase.add_product(product(amount)).unwrap();
        }

        assert_eq!(purchase.total_cost(), Money::new(177, Currency::PLN));
        assert_eq!(purchase.version(), 3);
    }
}

#[test]
fn policy_from_configuration_drives_eligibility_and_currency() {
    let policy = PurchasePolicy::from_lookup(|key| match key {
        shopfront_purchasing::LEGAL_AGE_ENV => Some("21".to_string()),
        shopfront_purchasing::CURRENCY_ENV => Some("EUR".to_string()),
        _ => None,
    })
    .unwrap();

    assert!(Purchase::with_policy(PurchaseId::generate(), &customer(19), &policy).is_err());

    let mut purchase =
        Purchase::with_policy(PurchaseId::generate(), &customer(30), &policy).unwrap();
    assert_eq!(purchase.currency(), Currency::EUR);

    let price = Money::new(999, Currency::EUR);
    purchase
        .add_product(Product::new(ProductId::generate(), price))
        .unwrap();
    assert_eq!(purchase.total_cost(), price);

    let err = purchase.add_product(product(1)).unwrap_err();
    assert!(matches!(DomainError::from(err), DomainError::Validation(_)));
}

#[test]
fn explicit_ids_are_kept() {
    let customer_id = CustomerId::new(AggregateId::parse("c-42").unwrap());
    let purchase_id = PurchaseId::new(AggregateId::parse("pr-7").unwrap());
    let buyer = Customer::new(customer_id.clone(), 40);

    let purchase = Purchase::new(purchase_id.clone(), &buyer).unwrap();

    assert_eq!(purchase.id(), &purchase_id);
    assert_eq!(purchase.customer_id(), &customer_id);
    assert_eq!(purchase.id_typed().to_string(), "pr-7");
}
