//! App Router

use std::sync::Arc;

use salvo::{
    Router,
    affix_state::inject,
    catch_panic::CatchPanic,
    flash::{CookieStore as FlashCookieStore, FlashHandler},
    session::{MemoryStore, SessionHandler},
    trailing_slash::remove_slash,
};

use crate::{
    cart, checkout, flash, healthcheck, homepage, login, melons, observability, state::State,
};

/// Shop routes.
pub(crate) fn app_router() -> Router {
    Router::new()
        .get(homepage::handler)
        .push(Router::with_path("melons").get(melons::index::handler))
        .push(Router::with_path("melon/{id}").get(melons::get::handler))
        .push(Router::with_path("cart").get(cart::get::handler))
        .push(Router::with_path("add_to_cart/{id}").get(cart::add::handler))
        .push(
            Router::with_path("login")
                .get(login::form::handler)
                .post(login::submit::handler),
        )
        .push(Router::with_path("checkout").get(checkout::handler))
}

/// Shop routes wrapped in the middleware every request passes through.
pub(crate) fn root_router(state: Arc<State>, sessions: SessionHandler<MemoryStore>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .hoop(sessions)
        .hoop(FlashHandler::new(FlashCookieStore::new()))
        .hoop(flash::keep_unshown)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(app_router())
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use testresult::TestResult;

    use crate::test_helpers::{Browser, location};

    #[tokio::test]
    async fn test_trailing_slashes_are_ignored() -> TestResult {
        let mut browser = Browser::new()?;

        let melons = browser.page("/melons/").await?;
        assert!(melons.contains("Crenshaw"), "expected the melon list");

        let details = browser.page("/melon/1/").await?;
        assert!(details.contains("href=\"/add_to_cart/1\""), "expected melon 1");

        let cart = browser.page("/cart/").await?;
        assert!(cart.contains("Shopping Cart"), "expected the cart page");

        Ok(())
    }

    #[tokio::test]
    async fn test_trailing_slash_on_redirecting_route() -> TestResult {
        let mut browser = Browser::new()?;

        let res = browser.get("/add_to_cart/2/").await;

        assert_eq!(res.status_code, Some(StatusCode::FOUND));
        assert_eq!(location(&res), Some("/cart"));

        Ok(())
    }
}
