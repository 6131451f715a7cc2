//! Document shell: doctype, head, and body wrapper.

use maud::{html, Markup, DOCTYPE};

use crate::assets;
use crate::config::SiteConfig;

use super::{footer, header};

/// Wrap a rendered page body into the complete HTML document.
pub fn document(config: &SiteConfig, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(config.site.language) {
            (head(config))
            body class="antialiased bg-body text-body font-body" {
                div {
                    div {
                        (header::promo_banner())
                    }
                    (body)
                    (footer::render())
                }
            }
        }
    }
}

/// Head block declaring the three external assets: compiled stylesheet,
/// pinned reactivity script (deferred), and the font stylesheet.
fn head(config: &SiteConfig) -> Markup {
    html! {
        head {
            title { (config.site.title) }
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
            link rel="preconnect" href=(assets::FONT_PRECONNECT);
            link rel="icon" type="image/png" sizes="32x32" href=(assets::FAVICON);
            link rel="stylesheet" href=(assets::stylesheet_href_versioned());
            link rel="stylesheet" href=(assets::FONT_HREF);
            script src=(assets::ALPINE_SRC) defer {}
        }
    }
}
