//! Fixed catalogue of states and their districts.

/// States offered by the record form, each with its ordered district list.
static REGIONS: [(&str, &[&str]); 5] = [
    (
        "California",
        &["Los Angeles", "San Diego", "San Francisco", "Sacramento"],
    ),
    (
        "New York",
        &["Manhattan", "Brooklyn", "Queens", "Bronx", "Staten Island"],
    ),
    ("Texas", &["Houston", "Dallas", "Austin", "San Antonio"]),
    ("Florida", &["Miami-Dade", "Broward", "Palm Beach", "Orlando"]),
    ("Washington", &["Seattle", "Spokane", "Tacoma", "Vancouver"]),
];

/// State names in display order.
pub fn state_names() -> impl Iterator<Item = &'static str> {
    REGIONS.iter().map(|(state, _)| *state)
}

/// Whether `state` is one of the catalogued states.
pub fn is_known_state(state: &str) -> bool {
    state_names().any(|known| known == state)
}

/// Districts of `state`, in display order. Unknown states have none.
pub fn districts_for(state: &str) -> &'static [&'static str] {
    REGIONS
        .iter()
        .find(|(known, _)| *known == state)
        .map(|(_, districts)| *districts)
        .unwrap_or_default()
}

/// Whether `district` is one of the districts of `state`.
pub fn is_district_of(state: &str, district: &str) -> bool {
    districts_for(state).iter().any(|known| *known == district)
}
