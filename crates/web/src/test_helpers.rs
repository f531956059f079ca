//! Test helpers.

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use salvo::{
    http::header::{COOKIE, LOCATION, SET_COOKIE},
    prelude::*,
    session::SessionDepotExt,
    test::{RequestBuilder, ResponseExt, TestClient},
};
use testresult::TestResult;

use ubermelon::catalog::Catalog;

use crate::{
    extensions::CART_SESSION_KEY, router::root_router, session, state::State,
    templates::Templates,
};

pub(crate) const TEST_SESSION_SECRET: &[u8] =
    b"test-secret-test-secret-test-secret-test-secret-test-secret-test-secret";

const TEST_CATALOG: &str = "
melons:
  - id: 1
    melon_type: cren
    common_name: Crenshaw
    price: 2.00 USD
    color: yellow
  - id: 2
    melon_type: jubi
    common_name: Jubilee Watermelon
    price: 3.00 USD
    color: green
  - id: 7
    melon_type: ogen
    common_name: Ogen
    price: 3.25 USD
    color: green
    seedless: true
";

pub(crate) fn test_state() -> TestResult<Arc<State>> {
    Ok(State::shared(
        Catalog::from_yaml(TEST_CATALOG)?,
        Templates::bundled()?,
    ))
}

/// The full shop router, middleware included, over the test catalog. Routes
/// pushed onto it run behind the same session and flash middleware.
pub(crate) fn shop_router() -> TestResult<Router> {
    let sessions = session::build(TEST_SESSION_SECRET, Duration::from_secs(3_600))?;

    Ok(root_router(test_state()?, sessions))
}

pub(crate) fn app_service() -> TestResult<Service> {
    Ok(Service::new(shop_router()?))
}

/// Stores `?key=..&quantity=..` as the session cart without validation, the
/// way a stale or tampered session would hold it.
#[handler]
async fn store_raw_cart(req: &mut Request, depot: &mut Depot) -> Result<&'static str, StatusError> {
    let key = req.query::<String>("key").unwrap_or_default();
    let quantity = req.query::<u32>("quantity").unwrap_or_default();

    let stored = BTreeMap::from([(key, quantity)]);

    depot
        .session_mut()
        .ok_or_else(StatusError::internal_server_error)?
        .insert(CART_SESSION_KEY, &stored)
        .map_err(|_ignored| StatusError::internal_server_error())?;

    Ok("stored")
}

/// A client that keeps cookies between requests, so session and flash state
/// carry over like they would in a browser.
pub(crate) struct Browser {
    service: Service,
    cookies: BTreeMap<String, String>,
}

impl Browser {
    pub(crate) fn new() -> TestResult<Self> {
        Ok(Self {
            service: app_service()?,
            cookies: BTreeMap::new(),
        })
    }

    pub(crate) fn with_router(router: Router) -> Self {
        Self {
            service: Service::new(router),
            cookies: BTreeMap::new(),
        }
    }

    /// A browser whose session cart can be overwritten through
    /// `GET /store_raw_cart?key=..&quantity=..`.
    pub(crate) fn with_raw_cart_route() -> TestResult<Self> {
        let router = shop_router()?.push(Router::with_path("store_raw_cart").get(store_raw_cart));

        Ok(Self::with_router(router))
    }

    pub(crate) async fn get(&mut self, path: &str) -> Response {
        let client = TestClient::get(format!("http://example.com{path}"));
        let client = self.with_cookies(client);

        let res = client.send(&self.service).await;
        self.absorb(&res);

        res
    }

    pub(crate) async fn post(&mut self, path: &str) -> Response {
        let client = TestClient::post(format!("http://example.com{path}"));
        let client = self.with_cookies(client);

        let res = client.send(&self.service).await;
        self.absorb(&res);

        res
    }

    /// GET a page and return its body, asserting a 200 response.
    pub(crate) async fn page(&mut self, path: &str) -> TestResult<String> {
        let mut res = self.get(path).await;

        assert_eq!(res.status_code, Some(StatusCode::OK), "GET {path}");

        Ok(res.take_string().await?)
    }

    fn with_cookies(&self, client: RequestBuilder) -> RequestBuilder {
        if self.cookies.is_empty() {
            return client;
        }

        let header = self
            .cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ");

        client.add_header(COOKIE, header, true)
    }

    fn absorb(&mut self, res: &Response) {
        let from_headers = res
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(|value| value.split(';').next())
            .filter_map(|pair| pair.split_once('='))
            .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
            .collect::<Vec<_>>();

        let from_jar = res
            .cookies()
            .delta()
            .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
            .collect::<Vec<_>>();

        for (name, value) in from_headers.into_iter().chain(from_jar) {
            if value.is_empty() {
                self.cookies.remove(&name);
            } else {
                self.cookies.insert(name, value);
            }
        }
    }
}

pub(crate) fn location(res: &Response) -> Option<&str> {
    res.headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
}
