//! Shopping Cart Handler

use salvo::prelude::*;
use serde::Serialize;
use tera::Context;

use ubermelon::basket::{Basket, BasketLine};

use crate::{errors::basket_into_status_error, extensions::*, templates::render_page};

/// A cart line as seen by templates.
#[derive(Debug, Serialize)]
struct CartLineView {
    name: String,
    quantity: u32,
    price: String,
    total: String,
}

impl From<&BasketLine> for CartLineView {
    fn from(line: &BasketLine) -> Self {
        Self {
            name: line.common_name.clone(),
            quantity: line.quantity,
            price: line.unit_price.to_string(),
            total: line.total.to_string(),
        }
    }
}

/// Shopping Cart Handler
///
/// Shows each melon in the session cart with its quantity, price and line
/// total, followed by the order total.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Text<String>, StatusError> {
    let state = depot.state_or_500()?;
    let cart = depot.cart();

    let basket = Basket::price(&cart, &state.catalog).map_err(basket_into_status_error)?;

    let lines: Vec<CartLineView> = basket.lines().iter().map(CartLineView::from).collect();

    let mut context = Context::new();
    context.insert("cart", &lines);
    context.insert("order_total", &basket.total().to_string());

    render_page(depot, "cart.html", context)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test_helpers::Browser;

    #[tokio::test]
    async fn test_empty_cart() -> TestResult {
        let mut browser = Browser::new()?;

        let body = browser.page("/cart").await?;

        assert!(body.contains("Your cart is empty"), "expected empty cart notice");

        Ok(())
    }

    #[tokio::test]
    async fn test_cart_shows_quantities_and_totals() -> TestResult {
        let mut browser = Browser::new()?;

        browser.get("/add_to_cart/1").await;
        browser.get("/add_to_cart/7").await;
        browser.get("/add_to_cart/7").await;

        let body = browser.page("/cart").await?;

        assert!(body.contains("Crenshaw"), "expected Crenshaw line");
        assert!(body.contains("Ogen"), "expected Ogen line");
        assert!(
            body.contains("<td class=\"quantity\">2</td>"),
            "expected quantity 2 for Ogen"
        );
        assert!(body.contains("$6.50"), "expected Ogen line total");
        assert!(
            body.contains("<th class=\"order-total\">$8.50</th>"),
            "expected order total"
        );

        Ok(())
    }
}
