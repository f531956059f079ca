//! HTML templates
//!
//! Templates are compiled into the binary. Rendering a template with a
//! variable the context does not provide is an error, and every page is given
//! the flash messages pending for the current request.

use salvo::prelude::{Depot, StatusError, Text};
use tera::{Context, Tera};

use crate::{extensions::*, flash};

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../templates/base.html")),
    ("homepage.html", include_str!("../templates/homepage.html")),
    ("all_melons.html", include_str!("../templates/all_melons.html")),
    (
        "melon_details.html",
        include_str!("../templates/melon_details.html"),
    ),
    ("cart.html", include_str!("../templates/cart.html")),
    ("login.html", include_str!("../templates/login.html")),
];

/// Compiled page templates.
#[derive(Debug)]
pub(crate) struct Templates {
    tera: Tera,
}

impl Templates {
    /// Compile the bundled templates.
    pub(crate) fn bundled() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();

        tera.autoescape_on(vec![".html"]);
        tera.add_raw_templates(TEMPLATES)?;

        Ok(Self { tera })
    }

    pub(crate) fn render(&self, name: &str, context: &Context) -> Result<String, tera::Error> {
        self.tera.render(name, context)
    }
}

/// Render a page, adding the pending flash messages to its context.
pub(crate) fn render_page(
    depot: &mut Depot,
    template: &str,
    mut context: Context,
) -> Result<Text<String>, StatusError> {
    let messages = flash::pending(depot);

    context.insert("messages", &messages);

    let state = depot.state_or_500()?;

    let body = state
        .templates
        .render(template, &context)
        .or_500(&format!("failed to render {template}"))?;

    flash::mark_shown(depot);

    Ok(Text::Html(body))
}
