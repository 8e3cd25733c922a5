use serde::{Deserialize, Serialize};

/// A latitude/longitude pair. The wire format for query parameters is the
/// comma-joined string `"lat,lng"`, produced by
/// [`lat_lng_to_string`](crate::serialize::lat_lng_to_string).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}
