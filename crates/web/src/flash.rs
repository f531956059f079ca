//! Flash messages
//!
//! A queued message waits until a page shows it. Requests that render no page
//! (redirects, error responses, the healthcheck, the login placeholder) hand
//! the pending messages on to the next request.

use salvo::{
    flash::{FlashDepotExt, FlashLevel},
    handler,
    prelude::{Depot, FlowCtrl, Request, Response},
};
use serde::Serialize;
use tracing::debug;

const FLASH_SHOWN_DEPOT_KEY: &str = "flash_shown";

/// A flash message as seen by templates.
#[derive(Debug, Serialize)]
pub(crate) struct FlashView {
    pub(crate) level: String,
    pub(crate) message: String,
}

/// Messages pending for the current request.
pub(crate) fn pending(depot: &mut Depot) -> Vec<FlashView> {
    depot
        .incoming_flash()
        .map(|flash| {
            flash
                .iter()
                .map(|message| FlashView {
                    level: message.level.to_string(),
                    message: message.value.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Record that a page showed the pending messages, so they are consumed.
pub(crate) fn mark_shown(depot: &mut Depot) {
    depot.insert(FLASH_SHOWN_DEPOT_KEY, true);
}

/// Re-queue the pending messages when the request showed no page.
#[handler]
pub(crate) async fn keep_unshown(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    ctrl.call_next(req, depot, res).await;

    if depot.contains_key(FLASH_SHOWN_DEPOT_KEY) {
        return;
    }

    let pending: Vec<(FlashLevel, String)> = depot
        .incoming_flash()
        .map(|flash| {
            flash
                .iter()
                .map(|message| (message.level, message.value.clone()))
                .collect()
        })
        .unwrap_or_default();

    if pending.is_empty() {
        return;
    }

    debug!(pending = pending.len(), "keeping flash messages for the next page");

    let outgoing = depot.outgoing_flash_mut();

    for (level, message) in pending {
        match level {
            FlashLevel::Debug => outgoing.debug(message),
            FlashLevel::Info => outgoing.info(message),
            FlashLevel::Success => outgoing.success(message),
            FlashLevel::Warning => outgoing.warning(message),
            FlashLevel::Error => outgoing.error(message),
        };
    }
}
