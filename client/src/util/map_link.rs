//! Outbound map-provider links.

#[cfg(test)]
#[path = "map_link_test.rs"]
mod map_link_test;

const MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Map search URL for a free-form address.
///
/// The address is percent-encoded in full (RFC 3986 unreserved characters
/// survive, spaces become `%20`), so commas and accents are safe in the query.
#[must_use]
pub fn map_search_url(address: &str) -> String {
    format!("{MAP_SEARCH_BASE}{}", urlencoding::encode(address.trim()))
}
