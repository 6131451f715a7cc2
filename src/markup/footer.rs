//! Footer band.

use maud::{html, Markup};

use crate::assets;
use crate::content;

/// Teal closing band: logo, the navigation links, and the promotional link.
pub fn render() -> Markup {
    html! {
        footer class="py-12 lg:py-16 bg-teal-900" {
            div class="container mx-auto px-4" {
                div class="flex flex-wrap items-center justify-between mb-10" {
                    a class="inline-block" href="#" {
                        img class="h-8" src=(assets::LOGO_WHITE) alt="";
                    }
                    ul class="hidden md:flex" {
                        @for (i, link) in content::NAV_LINKS.iter().enumerate() {
                            li class=[(i + 1 < content::NAV_LINKS.len()).then_some("mr-8")] {
                                a class="inline-block text-white hover:text-lime-500 font-medium" href=(link.href) {
                                    (link.label)
                                }
                            }
                        }
                    }
                }
                div class="border-t border-white border-opacity-25 pt-10" {
                    p class="text-center text-white opacity-80" {
                        (content::FOOTER_NOTE)
                        a class="text-lime-500 hover:text-white underline" href=(content::MARKETING_URL) {
                            (content::MARKETING_LABEL)
                        }
                    }
                }
            }
        }
    }
}
