//! Homepage Handler

use salvo::prelude::*;
use tera::Context;

use crate::templates::render_page;

/// Homepage Handler
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Text<String>, StatusError> {
    render_page(depot, "homepage.html", Context::new())
}
