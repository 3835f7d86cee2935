use serde::{Deserialize, Serialize};

/// A WGS84 position, longitude first.
///
/// Serializes as the GeoJSON `[lng, lat]` array so it can be dropped straight
/// into source payloads and widget options. Deserializes from any GeoJSON
/// position; an altitude or other trailing members are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

pub const LNG_RANGE: (f64, f64) = (-180.0, 180.0);
pub const LAT_RANGE: (f64, f64) = (-90.0, 90.0);

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        LngLat { lng, lat }
    }

    /// True when both components are finite and inside the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.lng.is_finite()
            && self.lat.is_finite()
            && (LNG_RANGE.0..=LNG_RANGE.1).contains(&self.lng)
            && (LAT_RANGE.0..=LAT_RANGE.1).contains(&self.lat)
    }

}

impl From<[f64; 2]> for LngLat {
    fn from([lng, lat]: [f64; 2]) -> Self {
        LngLat { lng, lat }
    }
}

impl TryFrom<Vec<f64>> for LngLat {
    type Error = String;

    fn try_from(position: Vec<f64>) -> Result<Self, Self::Error> {
        match position.as_slice() {
            [lng, lat, ..] => Ok(LngLat::new(*lng, *lat)),
            _ => Err(format!(
                "position needs at least 2 members, got {}",
                position.len()
            )),
        }
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(p: LngLat) -> Self {
        [p.lng, p.lat]
    }
}

impl std::fmt::Display for LngLat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lng, self.lat)
    }
}
