//! Declarative interactivity bindings.
//!
//! Each interactive widget on the site owns one small piece of browser-local
//! state declared inline on its markup node. The builders here produce those
//! attribute expressions, so every behavior has exactly one definition and the
//! section renderers stay free of stringly-typed Alpine fragments.
//!
//! The carousel arithmetic also exists as pure functions; the browser and the
//! tests share the same wraparound rules.

// === Mobile navigation disclosure ===

/// Boolean show/hide flag toggled from multiple click targets.
#[derive(Debug, Clone, Copy)]
pub struct Disclosure {
    flag: &'static str,
}

impl Disclosure {
    /// The mobile navigation panel flag.
    #[must_use]
    pub const fn mobile_nav() -> Self {
        Self {
            flag: "mobileNavOpen",
        }
    }

    /// `x-data` scope declaring the flag closed.
    #[must_use]
    pub fn scope(&self) -> String {
        format!("{{ {}: false }}", self.flag)
    }

    /// `x-on:click` expression flipping the flag.
    #[must_use]
    pub fn toggle(&self) -> String {
        format!("{flag} = !{flag}", flag = self.flag)
    }

    /// `x-bind:class` object deriving panel visibility from the flag.
    #[must_use]
    pub fn panel_class(&self) -> String {
        format!(
            "{{'block': {flag}, 'hidden': !{flag}}}",
            flag = self.flag
        )
    }
}

// === FAQ accordion ===

/// Independent expand/collapse flag; no mutual exclusion across items.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accordion;

impl Accordion {
    const FLAG: &'static str = "accordion";

    /// `x-data` scope declaring this item collapsed.
    #[must_use]
    pub fn scope() -> String {
        format!("{{ {}: false }}", Self::FLAG)
    }

    /// `x-on:click.prevent` expression toggling this item only.
    #[must_use]
    pub fn toggle() -> String {
        format!("{flag} = !{flag}", flag = Self::FLAG)
    }

    /// `x-bind:style` deriving the answer height: 0 collapsed, natural
    /// content height expanded. Animation comes from a CSS duration class.
    #[must_use]
    pub fn height_style() -> String {
        format!(
            "{flag} ? 'height: ' + $refs.container.scrollHeight + 'px' : ''",
            flag = Self::FLAG
        )
    }

    /// Class object hiding the expand glyph while open.
    #[must_use]
    pub fn hide_when_open() -> String {
        format!("{{'hidden': {}}}", Self::FLAG)
    }

    /// Class object hiding the collapse glyph while closed.
    #[must_use]
    pub fn hide_when_closed() -> String {
        format!("{{'hidden': !{}}}", Self::FLAG)
    }
}

// === Testimonial carousel ===

/// 1-based bounded slide index with wraparound controls.
#[derive(Debug, Clone, Copy)]
pub struct Carousel {
    slide_count: usize,
}

impl Carousel {
    #[must_use]
    pub const fn new(slide_count: usize) -> Self {
        Self { slide_count }
    }

    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// `x-data` scope: active slide starts at 1.
    #[must_use]
    pub fn scope(&self) -> String {
        format!("{{ activeSlide: 1, slideCount: {} }}", self.slide_count)
    }

    /// `x-on:click` expression for the previous control; wraps 1 to last.
    #[must_use]
    pub fn previous(&self) -> String {
        "activeSlide = activeSlide > 1 ? activeSlide - 1 : slideCount".to_string()
    }

    /// `x-on:click` expression for the next control; wraps last to 1.
    #[must_use]
    pub fn next(&self) -> String {
        "activeSlide = activeSlide < slideCount ? activeSlide + 1 : 1".to_string()
    }

    /// `x-bind:style` translating both strips by `(activeSlide - 1) * 100` percent.
    #[must_use]
    pub fn strip_style(&self) -> String {
        "'transform: translateX(-' + (activeSlide - 1) * 100 + '%)'".to_string()
    }
}

/// Next-slide arithmetic mirrored from the browser expression.
#[must_use]
pub const fn next_slide(active: usize, slide_count: usize) -> usize {
    if active < slide_count { active + 1 } else { 1 }
}

/// Previous-slide arithmetic mirrored from the browser expression.
#[must_use]
pub const fn previous_slide(active: usize, slide_count: usize) -> usize {
    if active > 1 { active - 1 } else { slide_count }
}

/// Horizontal strip offset for a given active slide, in percent.
#[must_use]
pub const fn strip_offset_percent(active: usize) -> usize {
    (active - 1) * 100
}
