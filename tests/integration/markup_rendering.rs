//! Configuration and content flowing into rendered markup.

use pretty_assertions::assert_eq;
use regex::Regex;

use flow::config::SiteConfig;
use flow::{content, markup};

use crate::common::init_test_logging;

fn render_with(title: &str, language: &str) -> String {
    let mut config = SiteConfig::default();
    config.site.title = title.to_string();
    config.site.language = language.to_string();
    markup::PAGES[0].render(&config).into_string()
}

#[test]
fn config_title_and_language_reach_the_document() {
    init_test_logging();
    let html = render_with("Flow Pilot Program", "de");
    assert!(html.contains("<html lang=\"de\">"));
    assert!(html.contains("<title>Flow Pilot Program</title>"));
    // The default title must not leak in from anywhere else
    assert!(!html.contains("<title>Flow — Energizing a Green Future</title>"));
}

#[test]
fn title_text_is_escaped() {
    init_test_logging();
    let html = render_with("Solar & Wind <Pilot>", "en");
    assert!(html.contains("<title>Solar &amp; Wind &lt;Pilot&gt;</title>"));
}

#[test]
fn rendering_is_deterministic() {
    init_test_logging();
    let config = SiteConfig::default();
    let first = markup::PAGES[0].render(&config).into_string();
    let second = markup::PAGES[0].render(&config).into_string();
    assert_eq!(first, second);
}

#[test]
fn every_scope_declaration_starts_closed_or_at_first_slide() {
    init_test_logging();
    let html = render_with("Flow", "en");
    let scope = Regex::new(r#"x-data="\{ [^"]+ \}""#).expect("scope pattern");

    let scopes: Vec<&str> = scope.find_iter(&html).map(|m| m.as_str()).collect();
    // One nav disclosure, five accordions, one carousel
    assert_eq!(scopes.len(), 1 + content::FAQ_ITEMS.len() + 1);
    for declaration in scopes {
        assert!(
            declaration.contains(": false") || declaration.contains("activeSlide: 1"),
            "unexpected initial state in {declaration}"
        );
    }
}

#[test]
fn external_navigation_targets_are_relative_html_pages() {
    init_test_logging();
    let html = render_with("Flow", "en");
    for link in &content::NAV_LINKS {
        let attr = format!("href=\"{}\"", link.href);
        assert!(
            html.contains(&attr),
            "missing navigation target {}",
            link.href
        );
    }

    // The promo banner and the footer both point at the marketing site
    let marketing = format!("href=\"{}\"", content::MARKETING_URL);
    assert!(html.matches(&marketing).count() >= 2);
}

#[test]
fn body_classes_follow_the_compiled_stylesheet() {
    init_test_logging();
    let html = render_with("Flow", "en");
    let body = Regex::new(r#"<body class="([^"]+)""#)
        .expect("body pattern")
        .captures(&html)
        .expect("body element");
    assert_eq!(&body[1], "antialiased bg-body text-body font-body");
}
