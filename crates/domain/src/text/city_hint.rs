//! City-hint detection from row text

/// City keywords looked for in the endpoint text when no hint is configured
pub const DEFAULT_KNOWN_CITIES: [&str; 8] = [
    "bengaluru",
    "bangalore",
    "kolkata",
    "mumbai",
    "delhi",
    "hyderabad",
    "chennai",
    "pune",
];

/// Pick a locality hint for a row
///
/// Returns the first known city mentioned in either endpoint, else the
/// fallback hint when it is not blank.
#[must_use]
pub fn detect_city_hint<S: AsRef<str>>(
    origin: &str,
    destination: &str,
    known_cities: &[S],
    fallback: Option<&str>,
) -> Option<String> {
    let haystack = format!("{origin} {destination}").to_lowercase();

    known_cities
        .iter()
        .map(|city| city.as_ref().trim().to_lowercase())
        .find(|city| !city.is_empty() && haystack.contains(city.as_str()))
        .or_else(|| {
            fallback
                .map(str::trim)
                .filter(|hint| !hint.is_empty())
                .map(ToString::to_string)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_city_in_either_endpoint() {
        let hint = detect_city_hint(
            "Whitefield",
            "Indiranagar, Bengaluru",
            &DEFAULT_KNOWN_CITIES,
            None,
        );
        assert_eq!(hint.as_deref(), Some("bengaluru"));
    }

    #[test]
    fn list_order_decides_between_matches() {
        let hint = detect_city_hint("Pune station", "Mumbai CST", &DEFAULT_KNOWN_CITIES, None);
        assert_eq!(hint.as_deref(), Some("mumbai"));
    }

    #[test]
    fn falls_back_to_configured_hint() {
        let hint = detect_city_hint("Hebbal", "Yelahanka", &DEFAULT_KNOWN_CITIES, Some(" Mysuru "));
        assert_eq!(hint.as_deref(), Some("Mysuru"));
    }

    #[test]
    fn blank_fallback_means_no_hint() {
        let hint = detect_city_hint("Hebbal", "Yelahanka", &DEFAULT_KNOWN_CITIES, Some("  "));
        assert!(hint.is_none());

        let empty: [&str; 0] = [];
        assert!(detect_city_hint("Hebbal", "Yelahanka", &empty, None).is_none());
    }
}
