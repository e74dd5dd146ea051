//! Inline formatting tags that must not be left straddling a diff marker.

use std::sync::LazyLock;

use regex::Regex;

/// Opening tags, case-insensitive and with or without attributes.
static OPENING_FORMATTING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^<(strong|b|i|em|big|small|u|sub|sup|strike|s)[>\s]")
        .expect("formatting tag pattern is valid")
});

/// Closing tags, matched exactly.
static CLOSING_FORMATTING_TAGS: phf::Set<&'static str> = phf::phf_set! {
    "</strong>",
    "</b>",
    "</i>",
    "</em>",
    "</big>",
    "</small>",
    "</u>",
    "</sub>",
    "</sup>",
    "</strike>",
    "</s>",
};

#[must_use]
pub fn is_opening_formatting_tag(tag: &str) -> bool { OPENING_FORMATTING_TAG.is_match(tag) }

#[must_use]
pub fn is_closing_formatting_tag(tag: &str) -> bool { CLOSING_FORMATTING_TAGS.contains(tag) }
