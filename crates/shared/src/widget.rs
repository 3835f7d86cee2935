use crate::geo::LngLat;
use crate::geojson::{CircleLayer, GeoJsonSource};

/// The slice of a map widget the view controller drives.
///
/// Implemented over Mapbox GL JS in the frontend and by a recording fake in
/// tests. Layer events registered through [`MapWidget::listen`] are routed
/// back to the controller by the implementation.
pub trait MapWidget {
    /// Place a marker; `None` uses the library's default color.
    fn add_marker(&mut self, position: LngLat, color: Option<&str>);

    fn has_source(&self, id: &str) -> bool;

    fn add_source(&mut self, id: &str, source: &GeoJsonSource);

    fn has_layer(&self, id: &str) -> bool;

    fn add_layer(&mut self, layer: &CircleLayer);

    /// Subscribe to click, pointer-enter and pointer-leave on `layer_id`.
    fn listen(&mut self, layer_id: &str);

    /// Set the cursor over the map canvas; `""` restores the default.
    fn set_cursor(&mut self, cursor: &str);

    /// Tear the widget down. No rendering or event dispatch happens afterwards.
    fn remove(self);
}
