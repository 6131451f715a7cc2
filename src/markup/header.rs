//! Promo banner and the hero header with both navigation surfaces.

use maud::{html, Markup};

use crate::assets;
use crate::content;
use crate::icons;
use crate::widgets::Disclosure;

/// Lime banner above the header.
pub fn promo_banner() -> Markup {
    html! {
        p class="mb-0 py-3 bg-lime-500 text-center" {
            (content::PROMO_TEXT)
            a href=(content::MARKETING_URL) { (content::MARKETING_LABEL) }
        }
    }
}

/// The teal hero section: wave backdrop, navigation bar, page-provided copy,
/// and the off-canvas mobile panel. The disclosure flag is declared on the
/// section so every toggle target shares one scope.
pub fn hero(copy: Markup) -> Markup {
    let nav = Disclosure::mobile_nav();
    html! {
        div {
            section class="relative bg-teal-900" "x-data"=(nav.scope()) {
                img class="absolute top-0 left-0 w-full h-full" src=(assets::WAVES_BACKGROUND) alt="";
                (navbar(nav))
                (copy)
                (mobile_panel(nav))
            }
        }
    }
}

/// Desktop navigation bar with the centered link list and hamburger fallback.
fn navbar(nav: Disclosure) -> Markup {
    html! {
        nav class="py-6" {
            div class="container mx-auto px-4" {
                div class="relative flex items-center justify-between" {
                    a class="inline-block" href="#" {
                        img class="h-8" src=(assets::LOGO_WHITE) alt="";
                    }
                    ul class="absolute top-1/2 left-1/2 transform -translate-x-1/2 -translate-y-1/2 hidden md:flex" {
                        @for (i, link) in content::NAV_LINKS.iter().enumerate() {
                            li class=[(i + 1 < content::NAV_LINKS.len()).then_some("mr-8")] {
                                a class="inline-block text-white hover:text-lime-500 font-medium" href=(link.href) {
                                    (link.label)
                                }
                            }
                        }
                    }
                    div class="flex items-center justify-end" {
                        div class="hidden md:block" {
                            a class="inline-flex group py-2.5 px-4 items-center justify-center text-sm font-medium text-white hover:text-teal-900 border border-white hover:bg-white rounded-full transition duration-200" href=(content::NAV_CTA_HREF) {
                                span class="mr-2" { (content::NAV_CTA_LABEL) }
                                span class="transform group-hover:translate-x-0.5 transition-transform duration-200" {
                                    (icons::arrow_right_sm())
                                }
                            }
                        }
                        button class="md:hidden text-white hover:text-lime-500" "x-on:click"=(nav.toggle()) {
                            (icons::hamburger())
                        }
                    }
                }
            }
        }
    }
}

/// Off-canvas mobile panel. Backdrop and close button both flip the flag;
/// visibility classes derive from it.
fn mobile_panel(nav: Disclosure) -> Markup {
    html! {
        div class="hidden fixed top-0 left-0 bottom-0 w-full xs:w-5/6 xs:max-w-md z-50" ":class"=(nav.panel_class()) {
            div class="fixed inset-0 bg-violet-900 opacity-20" "x-on:click"=(nav.toggle()) {}
            nav class="relative flex flex-col py-7 px-10 w-full h-full bg-white overflow-y-auto" {
                div class="flex items-center justify-between" {
                    a class="inline-block" href="#" {
                        img class="h-8" src=(assets::LOGO_SIGN) alt="";
                    }
                    div class="flex items-center" {
                        a class="inline-flex py-2.5 px-4 mr-6 items-center justify-center text-sm font-medium text-teal-900 hover:text-white border border-teal-900 hover:bg-teal-900 rounded-full transition duration-200" href="#" {
                            (content::LOGIN_LABEL)
                        }
                        button "x-on:click"=(nav.toggle()) {
                            (icons::close())
                        }
                    }
                }
                div class="pt-20 pb-12 mb-auto" {
                    ul class="flex-col" {
                        @for (i, link) in content::NAV_LINKS.iter().enumerate() {
                            li class=[(i + 1 < content::NAV_LINKS.len()).then_some("mb-6")] {
                                a class="inline-block text-teal-900 hover:text-teal-700 font-medium" href=(link.href) {
                                    (link.label)
                                }
                            }
                        }
                    }
                }
                div class="flex items-center justify-between" {
                    a class="inline-flex items-center text-lg font-medium text-teal-900" href="#" {
                        span { (icons::mail()) }
                        span class="ml-2" { (content::NEWSLETTER_LABEL) }
                    }
                    div class="flex items-center" {
                        a class="inline-block mr-4" href="#" { (icons::facebook()) }
                        a class="inline-block mr-4" href="#" { (icons::instagram()) }
                        a class="inline-block" href="#" { (icons::linkedin()) }
                    }
                }
            }
        }
    }
}
