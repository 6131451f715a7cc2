//! Page content for the Flow site.
//!
//! Every string the markup renders lives here, carried verbatim from the
//! shipped site, quirks included (the repeated stat label, one answer shared
//! by all FAQ entries, the `CE0` role, the trailing space on the EV card
//! title). Renderers take slices from these tables; nothing else in the
//! crate hardcodes copy.

/// External marketing URL used by the promo banner, learn CTA, and footer.
pub const MARKETING_URL: &str = "https://www.pixelrocket.store";
pub const MARKETING_LABEL: &str = "www.pixelrocket.store";

// === Promo banner ===

pub const PROMO_TEXT: &str = "Want to learn how to build templates like this one? Visit ";

// === Navigation ===

/// A navigation entry shared by the desktop bar, mobile panel, and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "About us",
        href: "about.html",
    },
    NavLink {
        label: "Pricing",
        href: "pricing.html",
    },
    NavLink {
        label: "Contact us",
        href: "contact.html",
    },
    NavLink {
        label: "Blog",
        href: "blog.html",
    },
];

pub const NAV_CTA_LABEL: &str = "Get in touch";
pub const NAV_CTA_HREF: &str = "contact.html";
pub const LOGIN_LABEL: &str = "Login";
pub const NEWSLETTER_LABEL: &str = "Newsletter";

// === Hero ===

pub const HERO_TITLE: &str = "Energizing a Green Future";
pub const HERO_LEAD: &str = "Our commitment to green energy is paving the way for a cleaner, healthier planet. Join us on a journey towards a future where clean, renewable energy sources transform the way we power our lives.";
pub const HERO_CTA_LABEL: &str = "See our solutions";

// === Stats band ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// The shipped site labels all four cards identically.
const STAT_LABEL: &str = "Renewable Energy Generated";

pub const STATS: [Stat; 4] = [
    Stat {
        value: "5,000 Mwh",
        label: STAT_LABEL,
    },
    Stat {
        value: "2,500+",
        label: STAT_LABEL,
    },
    Stat {
        value: "10,000+",
        label: STAT_LABEL,
    },
    Stat {
        value: "15%",
        label: STAT_LABEL,
    },
];

// === Solutions grid ===

/// Icon identity for a solution card, rendered by the icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionIcon {
    EvCharging,
    SolarEnergy,
    WindEnergy,
    Hydropower,
}

#[derive(Debug, Clone, Copy)]
pub struct Solution {
    pub icon: SolutionIcon,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const SOLUTIONS_LABEL: &str = "Solutions";
pub const SOLUTIONS_TITLE: &str = "Key to clean future";
pub const READ_MORE_LABEL: &str = "Read more";

pub const SOLUTIONS: [Solution; 4] = [
    Solution {
        icon: SolutionIcon::EvCharging,
        // Trailing space ships on the live site.
        title: "EV charging ",
        blurb: "EVs use electricity as a power source, which can be generated from renewable energy sources. Our solutions help reducing greenhouse gas emissions in the transportation sector.",
    },
    Solution {
        icon: SolutionIcon::SolarEnergy,
        title: "Solar Energy",
        blurb: "Solar panels convert sunlight into electricity. Photovoltaic (PV) cells on these panels capture the energy from the sun and convert it into electrical power.",
    },
    Solution {
        icon: SolutionIcon::WindEnergy,
        title: "Wind Energy",
        blurb: "Wind turbines harness the kinetic energy of the wind to generate electricity. Wind farms with multiple turbines are commonly used to produce large amounts of clean energy.",
    },
    Solution {
        icon: SolutionIcon::Hydropower,
        title: "Hydropower",
        blurb: "This technology uses the energy from flowing water, such as rivers and dams, to turn turbines and generate electricity. It's one of the oldest forms of renewable energy.",
    },
];

// === Commitment band ===

/// Trailing space carried from the shipped heading.
pub const COMMITMENT_TITLE: &str = "Our commitment to green energy is paving the way for a cleaner, healthier planet. ";
pub const COMMITMENT_CTA_LABEL: &str = "Get in touch";

// === FAQ ===

#[derive(Debug, Clone, Copy)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_TITLE: &str = "FAQ";
pub const FAQ_LEAD: &str = "Here you will find the answers to the frequently asked questions.";

/// One answer paragraph serves every entry on the shipped site.
const FAQ_ANSWER: &str = "We provide a range of green energy solutions, including solar power systems, wind turbines, energy-efficient appliances, and smart home technologies to enhance energy sustainability.";

pub const FAQ_ITEMS: [FaqItem; 5] = [
    FaqItem {
        question: "What is green energy?",
        answer: FAQ_ANSWER,
    },
    FaqItem {
        question: "How does green energy benefit the environment?",
        answer: FAQ_ANSWER,
    },
    FaqItem {
        question: "What green energy solutions does your company offer?",
        answer: FAQ_ANSWER,
    },
    FaqItem {
        question: "What support services do you offer after installing green energy solutions?",
        answer: FAQ_ANSWER,
    },
    FaqItem {
        question: "How do solar panels work?",
        answer: FAQ_ANSWER,
    },
];

pub const SUPPORT_TITLE: &str = "Still have questions?";
pub const SUPPORT_VISIT: &str = "For assistance, please visit our";
pub const SUPPORT_CONTACT_LABEL: &str = "Contact Us";
pub const SUPPORT_CALL: &str = "page or call our customer support hotline at";
pub const SUPPORT_PHONE: &str = "(671) 555-0110";
pub const SUPPORT_CLOSING: &str = ". Our dedicated team is ready to help you on your journey to a greener, more sustainable future.";

// === Testimonial carousel ===

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "\u{201c}Flow transformed my energy use. Efficient, green tech, outstanding service!\u{201d}",
        name: "Jenny Wilson",
        role: "Solar energy service",
    },
    Testimonial {
        quote: "\u{201c}Efficient, green tech, outstanding service\u{201d}",
        name: "John Jones",
        // "CE0" ships as-is.
        role: "CE0 Solar Company",
    },
    Testimonial {
        quote: "\u{201c}Flow transformed my energy use, efficient, green tech, outstanding service.\u{201d}",
        name: "James Harrison",
        role: "Developer",
    },
];

// === Learn CTA ===

pub const LEARN_TITLE: &str = "Learn Frontend Web Development";
pub const LEARN_LEAD: &str = "Visit www.pixelrocket.store and learn how to become a frontend web developer";
pub const LEARN_CTA_LABEL: &str = "Get Started";

// === Footer ===

pub const FOOTER_NOTE: &str = "Learn how to build sites like this one at ";
