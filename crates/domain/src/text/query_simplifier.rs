//! Stop-phrase removal for widening geocoder recall

use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, MatchKind};

/// Low-signal phrases removed from place names before the last retry
pub const STOP_PHRASES: [&str; 7] = [
    "bus stop",
    "busstand",
    "bus stand",
    "junction",
    "signal",
    "circle",
    "stand",
];

/// Leftmost-longest so "bus stand" wins over "stand"
#[allow(clippy::expect_used)] // Infallible with valid static patterns
static STOP_PHRASE_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(STOP_PHRASES)
        .expect("Failed to build stop phrase matcher")
});

/// Lower-case the text, strip every stop phrase and collapse whitespace
///
/// Removal is repeated until nothing changes, so a phrase that only appears
/// once its neighbours are gone (`"sigbus stopnal"`) is removed too and
/// `simplify_query(simplify_query(x)) == simplify_query(x)` holds.
#[must_use]
pub fn simplify_query(text: &str) -> String {
    let mut current = collapse_whitespace(&text.to_lowercase());
    loop {
        let stripped = STOP_PHRASE_MATCHER.replace_all(&current, &[""; STOP_PHRASES.len()]);
        let next = collapse_whitespace(&stripped);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
