//! Filling a cart from the bundled catalog and pricing it.

use rusty_money::{Money, iso};
use testresult::TestResult;

use ubermelon::{
    basket::{Basket, BasketError},
    cart::Cart,
    catalog::{Catalog, CatalogError},
    melons::MelonId,
};

#[test]
fn bundled_catalog_lists_melons_in_id_order() -> TestResult {
    let catalog = Catalog::bundled()?;

    let ids: Vec<u32> = catalog.get_all().iter().map(|melon| melon.id.get()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();

    assert_eq!(ids, sorted);
    assert_eq!(catalog.len(), 8);
    assert_eq!(catalog.currency(), iso::USD);

    Ok(())
}

#[test]
fn cart_total_equals_sum_of_price_times_quantity() -> TestResult {
    let catalog = Catalog::bundled()?;
    let mut cart = Cart::new();

    let picks = [1, 3, 3, 7, 1, 1];

    for id in picks {
        cart.add(MelonId::new(id))?;
    }

    let basket = Basket::price(&cart, &catalog)?;

    let expected: i64 = picks
        .iter()
        .map(|id| catalog.get_by_id(MelonId::new(*id)).map(|m| m.price.to_minor_units()))
        .sum::<Result<i64, CatalogError>>()?;

    assert_eq!(basket.total(), Money::from_minor(expected, iso::USD));
    assert_eq!(basket.len(), 3);
    assert_eq!(cart.quantity(MelonId::new(1)), 3);

    Ok(())
}

#[test]
fn cart_with_unknown_melon_cannot_be_priced() -> TestResult {
    let catalog = Catalog::bundled()?;
    let mut cart = Cart::new();

    cart.add(MelonId::new(999))?;

    let result = Basket::price(&cart, &catalog);

    assert!(matches!(
        result,
        Err(BasketError::Catalog(CatalogError::MelonNotFound(_)))
    ));

    Ok(())
}
