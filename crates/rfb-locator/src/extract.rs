//! Coordinate extraction from map-provider URLs.
//!
//! Map links come in several URL conventions. Each convention is one entry in
//! [`MAP_LINK_PATTERNS`]; entries are tried in order and the first one that
//! matches decides the result. Supporting a new provider format means
//! appending an entry.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Coordinate;

/// One recognised URL convention.
///
/// `regex` must have exactly two capture groups: latitude, then longitude.
#[derive(Debug, Clone, Copy)]
pub struct MapLinkPattern {
    pub name: &'static str,
    pub regex: &'static str,
}

/// Recognised conventions, most common first.
pub const MAP_LINK_PATTERNS: &[MapLinkPattern] = &[
    // https://www.google.com/maps/place/Name/@13.0878,80.2785,17z
    MapLinkPattern {
        name: "at_sign",
        regex: r"@(-?\d+\.\d+),(-?\d+\.\d+)",
    },
    // https://maps.google.com/?q=13.05,80.21
    MapLinkPattern {
        name: "query",
        regex: r"[?&]q=(-?\d+\.\d+),(-?\d+\.\d+)",
    },
    // https://maps.google.com/place/13.1,80.2 or ...?ll=13.1,80.2
    MapLinkPattern {
        name: "place",
        regex: r"(?:/place/|ll=)(-?\d+\.\d+),(-?\d+\.\d+)",
    },
];

static COMPILED_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    MAP_LINK_PATTERNS
        .iter()
        .map(|p| (p.name, Regex::new(p.regex).expect("valid regex")))
        .collect()
});

/// Derive a coordinate from a map-link URL.
///
/// Only the first matching pattern is considered. Returns `None` when no
/// pattern matches, when a matched number does not parse as a decimal float,
/// or when the matched pair is outside the valid latitude/longitude range.
/// None of these are errors; the branch simply has no usable map-link
/// coordinate.
#[must_use]
pub fn extract_coordinates(map_link: &str) -> Option<Coordinate> {
    let map_link = map_link.trim();
    if map_link.is_empty() {
        return None;
    }

    let (name, caps) = COMPILED_PATTERNS
        .iter()
        .find_map(|(name, re)| re.captures(map_link).map(|caps| (*name, caps)))?;
    let (lat, lng) = (caps.get(1)?.as_str(), caps.get(2)?.as_str());

    // `\d` is Unicode-aware, so a syntactic match can still fail to parse.
    let coord = lat
        .parse::<f64>()
        .ok()
        .zip(lng.parse::<f64>().ok())
        .and_then(|(lat, lng)| Coordinate::checked(lat, lng));

    match coord {
        Some(coord) => tracing::trace!(pattern = name, %coord, "extracted map-link coordinate"),
        None => tracing::debug!(
            pattern = name,
            latitude = lat,
            longitude = lng,
            "map-link coordinate rejected"
        ),
    }
    coord
}
