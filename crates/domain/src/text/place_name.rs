//! Place-name clean-up applied before geocoding

use std::sync::LazyLock;

use regex::Regex;

/// Known misspellings and their canonical names, keyed by lower-cased text
const ALIASES: [(&str, &str); 4] = [
    ("katriguppe signal", "Kathriguppe Signal"),
    ("kathriguppe signal", "Kathriguppe Signal"),
    ("whitefield bus stop", "Whitefield Bus Stop"),
    ("yelahanka nes bus stop", "Yelahanka NES Bus Stop"),
];

#[allow(clippy::expect_used)] // Infallible with a valid static pattern
static BUS_STOP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)bus\s*stop").expect("valid bus stop pattern"));

/// Collapse whitespace, apply the alias table and fix "Bus Stop" casing
#[must_use]
pub fn normalize_place_name(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let lower = collapsed.to_lowercase();

    if let Some((_, canonical)) = ALIASES.iter().find(|(alias, _)| *alias == lower) {
        return (*canonical).to_string();
    }

    BUS_STOP_PATTERN
        .replace_all(&collapsed, "Bus Stop")
        .into_owned()
}
