//! Front-page sections.

use maud::{html, Markup};

use crate::assets;
use crate::content::{self, FaqItem};
use crate::icons;
use crate::widgets::{Accordion, Carousel};

use super::header;

/// The complete front-page body: hero plus the six content sections.
pub fn render() -> Markup {
    html! {
        (header::hero(hero_copy()))
        (stats())
        (solutions())
        (commitment())
        (faq())
        (testimonials())
        (learn_cta())
    }
}

fn hero_copy() -> Markup {
    html! {
        div class="relative pt-18 pb-24 sm:pb-32 lg:pt-36 lg:pb-62" {
            div class="container mx-auto px-4 relative" {
                div class="max-w-lg xl:max-w-xl mx-auto text-center" {
                    h1 class="font-heading text-5xl xs:text-7xl xl:text-8xl tracking-tight text-white mb-8" {
                        (content::HERO_TITLE)
                    }
                    p class="max-w-md xl:max-w-none text-lg text-white opacity-80 mb-10" {
                        (content::HERO_LEAD)
                    }
                    a class="inline-flex py-4 px-6 items-center justify-center text-lg font-medium text-teal-900 border border-lime-500 hover:border-white bg-lime-500 hover:bg-white rounded-full transition duration-200" href="#" {
                        (content::HERO_CTA_LABEL)
                    }
                }
            }
        }
    }
}

fn stats() -> Markup {
    // Responsive bottom margins differ per column on the shipped site.
    let columns = [
        "w-full sm:w-1/2 md:w-1/4 px-4 mb-10 md:mb-0",
        "w-full sm:w-1/2 md:w-1/4 px-4 mb-10 md:mb-0",
        "w-full sm:w-1/2 md:w-1/4 px-4 mb-10 sm:mb-0",
        "w-full sm:w-1/2 md:w-1/4 px-4",
    ];
    html! {
        section class="py-12 lg:py-24" {
            div class="container mx-auto px-4" {
                div class="flex flex-wrap -mx-4" {
                    @for (stat, classes) in content::STATS.iter().zip(columns) {
                        div class=(classes) {
                            div class="text-center" {
                                h5 class="text-2xl xs:text-3xl lg:text-4xl xl:text-5xl mb-4" { (stat.value) }
                                span class="text-base lg:text-lg text-gray-700" { (stat.label) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn solutions() -> Markup {
    let columns = [
        "w-full sm:w-1/2 px-4 mb-16",
        "w-full sm:w-1/2 px-4 mb-16",
        "w-full sm:w-1/2 px-4 mb-16 sm:mb-0",
        "w-full sm:w-1/2 px-4",
    ];
    html! {
        section class="p-4 bg-white" {
            div class="pt-16 pb-24 px-5 xs:px-8 xl:px-12 bg-lime-500 rounded-3xl" {
                div class="container mx-auto px-4" {
                    div class="flex mb-4 items-center" {
                        (icons::section_dot())
                        span class="inline-block ml-2 text-sm font-medium" { (content::SOLUTIONS_LABEL) }
                    }
                    div class="border-t border-teal-900 border-opacity-25 pt-14" {
                        h1 class="font-heading text-4xl sm:text-6xl mb-24" { (content::SOLUTIONS_TITLE) }
                        div class="flex flex-wrap -mx-4" {
                            @for (solution, classes) in content::SOLUTIONS.iter().zip(columns) {
                                div class=(classes) {
                                    div {
                                        (icons::solution_icon(solution.icon))
                                        div class="mt-6" {
                                            h5 class="text-2xl font-medium mb-3" { (solution.title) }
                                            p class="mb-6" { (solution.blurb) }
                                            a class="inline-block text-lg  font-medium hover:text-teal-700" href="#" {
                                                (content::READ_MORE_LABEL)
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn commitment() -> Markup {
    let [second, third, fourth] = assets::ABOUT_IMAGES;
    html! {
        section class="py-12 lg:py-24 overflow-hidden" {
            div class="container mx-auto px-4" {
                div class="max-w-6xl mx-auto mb-24 text-center" {
                    h1 class="font-heading text-4xl sm:text-6xl md:text-7xl tracking-sm mb-16" {
                        (content::COMMITMENT_TITLE)
                    }
                    a class="inline-flex py-4 px-6 items-center justify-center text-lg font-medium text-white hover:text-teal-900 border border-teal-900 hover:border-lime-500 bg-teal-900 hover:bg-lime-500 rounded-full transition duration-200" href="#" {
                        (content::COMMITMENT_CTA_LABEL)
                    }
                }
                div class="flex justify-center" {
                    @for src in [second, third, fourth, second] {
                        div class="flex-shrink-0 h-full max-w-xs sm:max-w-md md:max-w-xl mr-4 sm:mr-8" {
                            img class="block w-full" src=(src) alt="";
                        }
                    }
                    @for src in [third, fourth] {
                        div class="hidden md:block sm:flex-shrink-0 h-full max-w-md md:max-w-xl mr-4 sm:mr-8" {
                            img class="block w-full" src=(src) alt="";
                        }
                    }
                }
            }
        }
    }
}

fn faq() -> Markup {
    html! {
        section class="py-12 lg:py-24" {
            div class="container mx-auto px-4" {
                div class="text-center mb-20" {
                    h1 class="font-heading text-6xl mb-6" { (content::FAQ_TITLE) }
                    p class="text-gray-700" { (content::FAQ_LEAD) }
                }
                div class="max-w-4xl mx-auto" {
                    @for (i, item) in content::FAQ_ITEMS.iter().enumerate() {
                        (faq_entry(item, i + 1 == content::FAQ_ITEMS.len()))
                    }
                    (support_box())
                }
            }
        }
    }
}

/// One accordion entry. Each button declares its own collapsed flag, so
/// items expand independently of their siblings.
fn faq_entry(item: &FaqItem, last: bool) -> Markup {
    let margin = if last { "mb-24" } else { "mb-4" };
    html! {
        button class={ "flex w-full py-6 px-8 " (margin) " items-start justify-between text-left shadow-md rounded-2xl" }
            "x-data"=(Accordion::scope())
            "x-on:click.prevent"=(Accordion::toggle()) {
            div {
                div class="pr-5" {
                    h5 class="text-lg font-medium" { (item.question) }
                }
                div class="overflow-hidden h-0 pr-5 duration-500" "x-ref"="container" ":style"=(Accordion::height_style()) {
                    p class="text-gray-700 mt-4" { (item.answer) }
                }
            }
            span class="flex-shrink-0" {
                div ":class"=(Accordion::hide_when_open()) { (icons::plus()) }
                div class="hidden" ":class"=(Accordion::hide_when_closed()) { (icons::minus()) }
            }
        }
    }
}

fn support_box() -> Markup {
    html! {
        div class="sm:flex py-10 px-5 sm:px-10 bg-orange-50 rounded-2xl" {
            div class="mb-4 sm:mb-0 sm:mr-6" {
                (icons::support_tile())
            }
            div {
                h5 class="text-xl font-medium mb-4" { (content::SUPPORT_TITLE) }
                p class="text-gray-700" {
                    span { (content::SUPPORT_VISIT) }
                    " "
                    a class="inline-block text-black font-medium underline" href="#" {
                        (content::SUPPORT_CONTACT_LABEL)
                    }
                    " "
                    span { (content::SUPPORT_CALL) }
                    " "
                    span class="text-black font-medium" { (content::SUPPORT_PHONE) }
                    " "
                    span { (content::SUPPORT_CLOSING) }
                }
            }
        }
    }
}

fn testimonials() -> Markup {
    let carousel = Carousel::new(content::TESTIMONIALS.len());
    html! {
        section class="py-12 lg:py-24 overflow-hidden" "x-data"=(carousel.scope()) {
            div class="container mx-auto px-4" {
                div class="flex flex-wrap items-center -mx-4" {
                    div class="w-full md:w-1/2 px-4 mb-12 md:mb-0" {
                        div class="max-w-lg mx-auto md:mx-0 overflow-hidden" {
                            div class="flex -mx-4 transition-transform duration-500" ":style"=(carousel.strip_style()) {
                                @for _ in &content::TESTIMONIALS {
                                    img class="block flex-shrink-0 w-full px-4" src=(assets::TESTIMONIAL_PHOTO) alt="";
                                }
                            }
                        }
                    }
                    div class="w-full md:w-1/2 px-4" {
                        div class="max-w-lg mx-auto md:mr-0 overflow-hidden" {
                            div class="flex -mx-4 transition-transform duration-500" ":style"=(carousel.strip_style()) {
                                @for testimonial in &content::TESTIMONIALS {
                                    div class="flex-shrink-0 px-4 w-full" {
                                        h4 class="text-3xl lg:text-4xl font-medium mb-10" { (testimonial.quote) }
                                        span class="block text-xl font-medium" { (testimonial.name) }
                                        span class="block mb-12 lg:mb-32 text-lg text-gray-700" { (testimonial.role) }
                                    }
                                }
                            }
                            div {
                                button class="inline-block mr-4 text-gray-700 hover:text-lime-500" "x-on:click"=(carousel.previous()) {
                                    (icons::arrow_left_lg())
                                }
                                button class="inline-block text-gray-700 hover:text-lime-500" "x-on:click"=(carousel.next()) {
                                    (icons::arrow_right_lg())
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn learn_cta() -> Markup {
    html! {
        div {
            div {
                section {
                    div class="p-4" {
                        div class="max-w-xl lg:max-w-5xl mx-auto xl:max-w-none px-5 md:px-12 xl:px-24 py-16 bg-teal-900 rounded-2xl" {
                            div class="container mx-auto px-4" {
                                div class="flex flex-wrap items-center -mx-4" {
                                    div class="w-full lg:w-2/3 px-4 mb-8 lg:mb-0" {
                                        div class="max-w-md xl:max-w-none" {
                                            h1 class="font-heading text-4xl xs:text-5xl sm:text-6xl tracking-sm text-white mb-6" {
                                                (content::LEARN_TITLE)
                                            }
                                            p class="text-lg text-white opacity-80" { (content::LEARN_LEAD) }
                                        }
                                    }
                                    div class="w-full lg:w-1/3 px-4 lg:text-right" {
                                        a class="inline-flex py-4 px-6 items-center justify-center text-lg font-medium text-teal-900 border border-lime-500 hover:border-white bg-lime-500 hover:bg-white rounded-full transition duration-200" href=(content::MARKETING_URL) {
                                            (content::LEARN_CTA_LABEL)
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
