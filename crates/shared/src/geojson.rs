//! JSON payloads exchanged with the mapping library.
//!
//! Field names follow the Mapbox GL style specification, so these serialize
//! directly into the objects passed to `new Map(..)`, `addSource` and
//! `addLayer`.

use serde::{Deserialize, Serialize};

use crate::config::{MapConfig, OverlayStyle};
use crate::geo::LngLat;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOptions {
    /// Id of the DOM element the map attaches to.
    pub container: String,
    pub access_token: String,
    pub style: String,
    pub center: LngLat,
    pub zoom: f64,
}

impl WidgetOptions {
    pub fn from_config(config: &MapConfig, container: &str) -> Self {
        WidgetOptions {
            container: container.to_string(),
            access_token: config.access_token.clone(),
            style: config.style_url.clone(),
            center: config.landmark,
            zoom: config.zoom,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarkerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: LngLat },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub properties: serde_json::Map<String, serde_json::Value>,
    pub geometry: Geometry,
}

impl Feature {
    pub fn point(at: LngLat) -> Self {
        Feature {
            kind: "Feature",
            properties: serde_json::Map::new(),
            geometry: Geometry::Point { coordinates: at },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub features: Vec<Feature>,
}

/// A `geojson` source holding inline data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoJsonSource {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: FeatureCollection,
}

impl GeoJsonSource {
    pub fn single_point(at: LngLat) -> Self {
        GeoJsonSource {
            kind: "geojson",
            data: FeatureCollection {
                kind: "FeatureCollection",
                features: vec![Feature::point(at)],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CirclePaint {
    #[serde(rename = "circle-radius")]
    pub radius: f64,
    #[serde(rename = "circle-color")]
    pub color: String,
    #[serde(rename = "circle-stroke-width")]
    pub stroke_width: f64,
    #[serde(rename = "circle-stroke-color")]
    pub stroke_color: String,
}

impl From<&OverlayStyle> for CirclePaint {
    fn from(style: &OverlayStyle) -> Self {
        CirclePaint {
            radius: style.radius,
            color: style.color.clone(),
            stroke_width: style.stroke_width,
            stroke_color: style.stroke_color.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleLayer {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub source: String,
    pub paint: CirclePaint,
}

impl CircleLayer {
    pub fn new(id: &str, source: &str, style: &OverlayStyle) -> Self {
        CircleLayer {
            id: id.to_string(),
            kind: "circle",
            source: source.to_string(),
            paint: CirclePaint::from(style),
        }
    }
}

/// Only the part of a rendered feature the click handler looks at.
#[derive(Debug, Deserialize)]
struct RenderedFeature {
    #[serde(default)]
    geometry: Option<Geometry>,
}

/// Coordinates of the first feature in a rendered-features array, if it is a
/// point. Empty, malformed or non-point input yields `None`.
pub fn first_point(features_json: &str) -> Option<LngLat> {
    let features: Vec<RenderedFeature> = serde_json::from_str(features_json).ok()?;
    match features.into_iter().next()?.geometry? {
        Geometry::Point { coordinates } => Some(coordinates),
        Geometry::Unsupported => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_widget_options_shape() {
        let config = MapConfig::with_overrides(Some("pk.test"), None);
        let opts = WidgetOptions::from_config(&config, "map-container");
        assert_eq!(
            serde_json::to_value(&opts).unwrap(),
            json!({
                "container": "map-container",
                "accessToken": "pk.test",
                "style": "mapbox://styles/mapbox/streets-v12",
                "center": [103.8607, 1.2834],
                "zoom": 15.0
            })
        );
    }

    #[test]
    fn test_marker_options_omit_default_color() {
        assert_eq!(serde_json::to_value(MarkerOptions::default()).unwrap(), json!({}));
        let blue = MarkerOptions { color: Some("#3b82f6".into()) };
        assert_eq!(serde_json::to_value(blue).unwrap(), json!({ "color": "#3b82f6" }));
    }

    #[test]
    fn test_source_is_single_point_collection() {
        let source = GeoJsonSource::single_point(LngLat::new(103.8607, 1.2834));
        assert_eq!(
            serde_json::to_value(&source).unwrap(),
            json!({
                "type": "geojson",
                "data": {
                    "type": "FeatureCollection",
                    "features": [{
                        "type": "Feature",
                        "properties": {},
                        "geometry": { "type": "Point", "coordinates": [103.8607, 1.2834] }
                    }]
                }
            })
        );
    }

    #[test]
    fn test_circle_layer_paint_keys() {
        let layer = CircleLayer::new("mbs-circle", "mbs-point", &OverlayStyle::default());
        assert_eq!(
            serde_json::to_value(&layer).unwrap(),
            json!({
                "id": "mbs-circle",
                "type": "circle",
                "source": "mbs-point",
                "paint": {
                    "circle-radius": 40.0,
                    "circle-color": "#22c55e",
                    "circle-stroke-width": 2.0,
                    "circle-stroke-color": "#065f46"
                }
            })
        );
    }

    #[test]
    fn test_first_point_reads_rendered_feature() {
        let features = r#"[{
            "type": "Feature",
            "layer": { "id": "mbs-circle" },
            "source": "mbs-point",
            "properties": {},
            "geometry": { "type": "Point", "coordinates": [103.8611, 1.2838] }
        }]"#;
        assert_eq!(first_point(features), Some(LngLat::new(103.8611, 1.2838)));
    }

    #[test]
    fn test_first_point_accepts_three_member_position() {
        let features = r#"[{ "geometry": { "type": "Point", "coordinates": [103.8611, 1.2838, 0.0] } }]"#;
        assert_eq!(first_point(features), Some(LngLat::new(103.8611, 1.2838)));
    }

    #[test]
    fn test_first_point_empty_or_malformed() {
        assert_eq!(first_point("[]"), None);
        assert_eq!(first_point("null"), None);
        assert_eq!(first_point("not json"), None);
        assert_eq!(first_point(r#"[{ "type": "Feature" }]"#), None);
    }

    #[test]
    fn test_first_point_ignores_non_point_geometry() {
        let features = r#"[{ "geometry": { "type": "LineString", "coordinates": [[0, 0], [1, 1]] } }]"#;
        assert_eq!(first_point(features), None);
    }
}
