//! Typed markup for the Flow site.
//!
//! Pages are composed from pure render functions: `layout` wraps a page body
//! with the document head, promo banner, and footer; `header` owns the hero
//! section and both navigation surfaces; `front` renders the front-page
//! sections. Copy comes from [`crate::content`], interactivity bindings from
//! [`crate::widgets`], and asset URLs from [`crate::assets`].

pub mod footer;
pub mod front;
pub mod header;
pub mod layout;

use maud::Markup;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};

/// A renderable page.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// Stable identifier used on the CLI.
    pub slug: &'static str,
    /// Description shown by `flow pages`.
    pub title: &'static str,
    /// Route served by the preview server.
    pub route: &'static str,
    /// Filename written by the exporter.
    pub output: &'static str,
    #[serde(skip)]
    body: fn() -> Markup,
}

impl Page {
    /// Render this page to a complete HTML document.
    #[must_use]
    pub fn render(&self, config: &SiteConfig) -> Markup {
        layout::document(config, (self.body)())
    }
}

/// Every page the site renders.
pub const PAGES: [Page; 1] = [Page {
    slug: "front",
    title: "Front page",
    route: "/",
    output: "index.html",
    body: front::render,
}];

/// Look up a page by slug.
///
/// # Errors
///
/// Returns [`SiteError::UnknownPage`] for slugs not in the registry.
pub fn find(slug: &str) -> Result<&'static Page> {
    PAGES
        .iter()
        .find(|page| page.slug == slug)
        .ok_or_else(|| SiteError::UnknownPage {
            slug: slug.to_string(),
        })
}
