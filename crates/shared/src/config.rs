//! Fixed map configuration.
//!
//! Everything here is a literal baked into the bundle. The access token and
//! style may be overridden at build time through `MAPBOX_ACCESS_TOKEN` and
//! `MAPBOX_STYLE_URL`; there is no runtime configuration.

use crate::geo::LngLat;

// Marina Bay Sands, Singapore
pub const LANDMARK: LngLat = LngLat::new(103.8607, 1.2834);

pub const STYLE_URL: &str = "mapbox://styles/mapbox/streets-v12";
pub const ZOOM: f64 = 15.0;

/// Placeholder used when no token was supplied at build time.
pub const PLACEHOLDER_ACCESS_TOKEN: &str = "pk.replace-with-your-mapbox-token";

pub const CONTAINER_ID: &str = "map-container";
pub const SOURCE_ID: &str = "mbs-point";
pub const LAYER_ID: &str = "mbs-circle";

pub const USER_MARKER_COLOR: &str = "#3b82f6"; // blue-500

// Geolocation request
pub const GEOLOCATION_TIMEOUT_MS: u32 = 10_000;
pub const GEOLOCATION_MAXIMUM_AGE_MS: u32 = 0;

/// Paint for the circle drawn over the landmark.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub radius: f64,
    pub color: String,
    pub stroke_width: f64,
    pub stroke_color: String,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        OverlayStyle {
            radius: 40.0,
            color: "#22c55e".to_string(),        // green-500
            stroke_width: 2.0,
            stroke_color: "#065f46".to_string(), // emerald-800
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeolocationOptions {
    pub enable_high_accuracy: bool,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        GeolocationOptions {
            enable_high_accuracy: true,
            timeout_ms: GEOLOCATION_TIMEOUT_MS,
            maximum_age_ms: GEOLOCATION_MAXIMUM_AGE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub access_token: String,
    pub style_url: String,
    /// Point of interest, also the initial map center.
    pub landmark: LngLat,
    pub zoom: f64,
    pub container_id: String,
    pub source_id: String,
    pub layer_id: String,
    pub overlay: OverlayStyle,
    /// `None` keeps the library's default marker color.
    pub landmark_marker_color: Option<String>,
    pub user_marker_color: String,
    pub geolocation: GeolocationOptions,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            access_token: PLACEHOLDER_ACCESS_TOKEN.to_string(),
            style_url: STYLE_URL.to_string(),
            landmark: LANDMARK,
            zoom: ZOOM,
            container_id: CONTAINER_ID.to_string(),
            source_id: SOURCE_ID.to_string(),
            layer_id: LAYER_ID.to_string(),
            overlay: OverlayStyle::default(),
            landmark_marker_color: None,
            user_marker_color: USER_MARKER_COLOR.to_string(),
            geolocation: GeolocationOptions::default(),
        }
    }
}

impl MapConfig {
    /// Defaults with the token and style taken from the build environment.
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("MAPBOX_ACCESS_TOKEN"),
            option_env!("MAPBOX_STYLE_URL"),
        )
    }

    /// Apply optional token/style overrides; blank values are ignored.
    pub fn with_overrides(access_token: Option<&str>, style_url: Option<&str>) -> Self {
        let mut config = MapConfig::default();
        if let Some(token) = access_token.map(str::trim).filter(|t| !t.is_empty()) {
            config.access_token = token.to_string();
        }
        if let Some(style) = style_url.map(str::trim).filter(|s| !s.is_empty()) {
            config.style_url = style.to_string();
        }
        config
    }

    pub fn has_placeholder_token(&self) -> bool {
        self.access_token == PLACEHOLDER_ACCESS_TOKEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_center_on_landmark() {
        let config = MapConfig::default();
        assert_eq!(config.landmark, LngLat::new(103.8607, 1.2834));
        assert_eq!(config.zoom, 15.0);
        assert_eq!(config.style_url, "mapbox://styles/mapbox/streets-v12");
    }

    #[test]
    fn test_geolocation_defaults() {
        let opts = GeolocationOptions::default();
        assert!(opts.enable_high_accuracy);
        assert_eq!(opts.timeout_ms, 10_000);
        assert_eq!(opts.maximum_age_ms, 0);
    }

    #[test]
    fn test_user_marker_differs_from_landmark_marker() {
        let config = MapConfig::default();
        assert_ne!(
            config.landmark_marker_color.as_deref(),
            Some(config.user_marker_color.as_str())
        );
    }

    #[test]
    fn test_overrides_replace_token_and_style() {
        let config =
            MapConfig::with_overrides(Some("pk.abc"), Some("mapbox://styles/mapbox/dark-v11"));
        assert_eq!(config.access_token, "pk.abc");
        assert_eq!(config.style_url, "mapbox://styles/mapbox/dark-v11");
        assert!(!config.has_placeholder_token());
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let config = MapConfig::with_overrides(Some("  "), None);
        assert!(config.has_placeholder_token());
        assert_eq!(config.style_url, STYLE_URL);
    }
}
