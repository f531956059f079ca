//! Melon Views

use serde::Serialize;

use ubermelon::melons::Melon;

/// A melon as seen by templates.
#[derive(Debug, Serialize)]
pub(crate) struct MelonView {
    pub id: u32,
    pub melon_type: String,
    pub common_name: String,
    pub price: String,
    pub image_url: Option<String>,
    pub color: String,
    pub seedless: bool,
}

impl From<&Melon> for MelonView {
    fn from(melon: &Melon) -> Self {
        Self {
            id: melon.id.get(),
            melon_type: melon.melon_type.clone(),
            common_name: melon.common_name.clone(),
            price: melon.price_str(),
            image_url: melon.image_url.clone(),
            color: melon.color.clone(),
            seedless: melon.seedless,
        }
    }
}
