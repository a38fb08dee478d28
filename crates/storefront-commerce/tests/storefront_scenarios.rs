//! End-to-end storefront scenarios over the sample data.

use storefront_commerce::orders::{card_footer, OrderProgress, StatusNotice};
use storefront_commerce::prelude::*;

fn shipping() -> ShippingForm {
    ShippingForm::new()
        .with_first_name("John")
        .with_last_name("Doe")
        .with_address("1234 Elm Street")
        .with_apartment("Apt 567")
        .with_city("San Francisco")
        .with_state("CA")
        .with_zip_code("94103")
        .with_phone("(555) 123-4567")
        .with_email("john@example.com")
}

#[test]
fn browse_add_and_check_out() {
    let catalog = Catalog::sample();
    let pricing = PricingConfig::default();

    let found = ProductFilter::new().with_search("laptop").apply(catalog.products());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Modern Laptop Pro");

    let mut cart = Cart::new();
    assert_eq!(cart.add_or_update(found[0].id.clone(), 1), LineChange::Inserted);
    cart.add_or_update(ProductId::new("4"), 2);

    let totals = cart.compute_totals(catalog, &pricing);
    assert_eq!(totals.subtotal.display_amount(), "1559.97");
    assert_eq!(totals.shipping.display_amount(), "5.99");
    assert_eq!(totals.tax.to_string(), "$109.20");
    assert_eq!(totals.total.display_amount(), "1675.16");

    let mut flow = CheckoutFlow::new();
    flow.set_shipping(shipping()).unwrap();
    assert_eq!(flow.submit_shipping().unwrap(), CheckoutStep::Payment);

    let payment = PaymentForm::new()
        .with_card_number("4242 4242 4242 4242")
        .with_name_on_card("John Doe")
        .with_expiry("12/28")
        .with_cvc("123");
    flow.set_payment(payment).unwrap();
    assert_eq!(flow.submit_payment().unwrap(), CheckoutStep::Review);

    let placed = flow.place_order(&cart, catalog, &pricing).unwrap();
    assert_eq!(placed.totals, totals);
    assert_eq!(placed.payment.to_string(), "Credit Card ending in 4242");
    assert_eq!(placed.description, "Check your email for order confirmation.");

    assert_eq!(OrderRegistry::sample().next_order_id().as_str(), "ORD-12348");
}

#[test]
fn bank_transfer_reference_is_customer_email() {
    let instructions = BankTransferInstructions::for_shipping(&shipping());
    assert_eq!(instructions.account_number, "1234567890");
    assert_eq!(instructions.bank, "Example Bank");
    assert_eq!(instructions.reference, "john@example.com");
}

#[test]
fn removing_every_line_empties_the_cart() {
    let catalog = Catalog::sample();
    let pricing = PricingConfig::default();
    let mut cart = Cart::from_lines([(ProductId::new("1"), 1), (ProductId::new("4"), 2)]);

    assert_eq!(cart.add_or_update(ProductId::new("1"), 0), LineChange::Removed);
    assert_eq!(cart.add_or_update(ProductId::new("4"), -1), LineChange::Removed);
    assert!(cart.is_empty());

    let totals = cart.compute_totals(catalog, &pricing);
    assert!(totals.total.is_zero());

    let mut flow = CheckoutFlow::new();
    flow.set_shipping(shipping()).unwrap();
    flow.submit_shipping().unwrap();
    flow.set_payment(PaymentForm::new().with_method(PaymentMethod::BankTransfer))
        .unwrap();
    flow.submit_payment().unwrap();
    assert_eq!(
        flow.place_order(&cart, catalog, &pricing).unwrap_err(),
        CommerceError::EmptyCart
    );
}

#[test]
fn order_history_views() {
    let catalog = Catalog::sample();
    let registry = OrderRegistry::sample();

    assert!(registry.find_by_id(&OrderId::new("ORD-99999")).is_none());

    let delivered = registry.find_by_id(&OrderId::new("ORD-12345")).unwrap();
    assert_eq!(delivered.item_count(), 2);
    assert_eq!(delivered.lines(catalog).len(), 2);
    assert_eq!(
        card_footer(delivered).as_deref(),
        Some("Delivered on 3/28/2025")
    );
    let progress = OrderProgress::for_order(delivered).unwrap();
    assert_eq!(progress.percent, 100);

    let shipped = registry.find_by_id(&OrderId::new("ORD-12346")).unwrap();
    let notice = StatusNotice::for_order(shipped).unwrap();
    assert_eq!(notice.heading(), "Order Shipped");
    assert_eq!(notice.tracking_number(), Some("TRK987654321"));

    let processing = registry.find_by_id(&OrderId::new("ORD-12347")).unwrap();
    assert_eq!(processing.item_count_label(), "4 items");
    assert_eq!(processing.status.display_name(), "Processing");
    assert!(processing.tracking_number.is_none());
}

#[test]
fn validation_errors_block_each_step() {
    let mut flow = CheckoutFlow::new();
    let err = flow.submit_shipping().unwrap_err();
    let errors = err.validation_errors().unwrap();
    // Every shipping field but the apartment is required.
    assert_eq!(errors.len(), ShippingForm::FIELDS.len() - 1);
    assert!(!errors.contains(Field::Apartment));
    assert_eq!(flow.step(), CheckoutStep::Shipping);
}
