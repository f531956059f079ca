//! State

use std::sync::Arc;

use ubermelon::catalog::Catalog;

use crate::templates::Templates;

#[derive(Debug, Clone)]
pub(crate) struct State {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) templates: Arc<Templates>,
}

impl State {
    #[must_use]
    pub(crate) fn new(catalog: Catalog, templates: Templates) -> Self {
        Self {
            catalog: Arc::new(catalog),
            templates: Arc::new(templates),
        }
    }

    #[must_use]
    pub(crate) fn shared(catalog: Catalog, templates: Templates) -> Arc<Self> {
        Arc::new(Self::new(catalog, templates))
    }
}
