//! Query-string construction for outbound requests.
//!
//! Values are percent-encoded with [`urlencoding`], except values that are
//! already in their wire form (notably the comma-joined coordinate pair,
//! which must appear as `lat,lng` and never as a nested structure).

use urlencoding::encode;

use crate::types::LatLng;

/// Converts a coordinate to the `"lat,lng"` wire string. Each component uses
/// the standard `f64` display conversion, with no extra rounding.
pub fn lat_lng_to_string(location: &LatLng) -> String {
    format!("{},{}", location.lat, location.lng)
}

/// Accumulates `key=value` pairs into a query string.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    pairs: Vec<String>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        QueryBuilder { pairs: Vec::new() }
    }

    /// Appends a pair, percent-encoding the value.
    pub fn push(&mut self, key: &str, value: &str) {
        self.pairs.push(format!("{}={}", key, encode(value)));
    }

    /// Appends a pair whose value is already in wire form and must not be
    /// encoded further.
    pub fn push_raw(&mut self, key: &str, value: &str) {
        self.pairs.push(format!("{}={}", key, value));
    }

    pub fn finish(self) -> String {
        self.pairs.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lat_lng_joins_with_comma() {
        let location = LatLng::new(37.4, 15.1);
        assert_eq!(lat_lng_to_string(&location), "37.4,15.1");
    }

    #[test]
    fn lat_lng_keeps_full_precision() {
        let location = LatLng::new(40.712776, -74.005974);
        assert_eq!(lat_lng_to_string(&location), "40.712776,-74.005974");
    }

    #[test]
    fn lat_lng_integral_components() {
        let location = LatLng::new(0.0, -180.0);
        assert_eq!(lat_lng_to_string(&location), "0,-180");
    }

    #[test]
    fn builder_encodes_pushed_values() {
        let mut query = QueryBuilder::new();
        query.push("input", "St Paul's");
        query.push("language", "en");
        assert_eq!(query.finish(), "input=St%20Paul%27s&language=en");
    }

    #[test]
    fn builder_leaves_raw_values_alone() {
        let mut query = QueryBuilder::new();
        query.push_raw("location", "37.4,15.1");
        assert_eq!(query.finish(), "location=37.4,15.1");
    }

    #[test]
    fn empty_builder_yields_empty_string() {
        assert_eq!(QueryBuilder::new().finish(), "");
    }
}
