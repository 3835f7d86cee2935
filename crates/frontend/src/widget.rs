use std::rc::Rc;

use landmark_shared::geojson::{self, CircleLayer, GeoJsonSource, MarkerOptions, WidgetOptions};
use landmark_shared::{LngLat, MapWidget, ViewError};
use wasm_bindgen::prelude::*;

use crate::mapbox;

/// Something the map reported; forwarded to the view controller.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    Ready,
    Click(Option<LngLat>),
    PointerEnter,
    PointerLeave,
}

pub type EventSink = Rc<dyn Fn(WidgetEvent)>;

/// A Mapbox GL map plus everything registered on it.
///
/// The closures handed to the library are owned here and only dropped after
/// `Map::remove`, so the library never calls into a freed closure.
pub struct MapboxWidget {
    map: mapbox::Map,
    markers: Vec<mapbox::Marker>,
    sink: EventSink,
    _on_load: Closure<dyn FnMut()>,
    layer_listeners: Vec<Closure<dyn FnMut(JsValue)>>,
}

impl MapboxWidget {
    pub fn create(options: &WidgetOptions, sink: EventSink) -> Result<Self, ViewError> {
        let js_options =
            mapbox::to_js(options).map_err(|e| ViewError::Widget(mapbox::describe(&e)))?;
        let map =
            mapbox::Map::new(&js_options).map_err(|e| ViewError::Widget(mapbox::describe(&e)))?;

        let ready = sink.clone();
        let on_load = Closure::<dyn FnMut()>::new(move || ready(WidgetEvent::Ready));
        map.once("load", &on_load);

        Ok(MapboxWidget {
            map,
            markers: Vec::new(),
            sink,
            _on_load: on_load,
            layer_listeners: Vec::new(),
        })
    }

    fn on_layer(&mut self, event: &str, layer_id: &str, to_event: fn(&JsValue) -> WidgetEvent) {
        let sink = self.sink.clone();
        let listener =
            Closure::<dyn FnMut(JsValue)>::new(move |evt: JsValue| sink(to_event(&evt)));
        self.map.on_layer(event, layer_id, &listener);
        self.layer_listeners.push(listener);
    }
}

/// Point geometry of the first feature under the cursor, if any.
fn clicked_point(event: &JsValue) -> Option<LngLat> {
    let features = js_sys::Reflect::get(event, &JsValue::from_str("features")).ok()?;
    if mapbox::is_absent(&features) {
        return None;
    }
    let json = js_sys::JSON::stringify(&features).ok()?;
    geojson::first_point(&String::from(json))
}

impl MapWidget for MapboxWidget {
    fn add_marker(&mut self, position: LngLat, color: Option<&str>) {
        let options = MarkerOptions {
            color: color.map(str::to_string),
        };
        let (options, lng_lat) = match (mapbox::to_js(&options), mapbox::to_js(&position)) {
            (Ok(o), Ok(p)) => (o, p),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(error = %mapbox::describe(&e), "Could not build marker");
                return;
            }
        };
        let marker = mapbox::Marker::new(&options)
            .set_lng_lat(&lng_lat)
            .add_to(&self.map);
        self.markers.push(marker);
    }

    fn has_source(&self, id: &str) -> bool {
        !mapbox::is_absent(&self.map.get_source(id))
    }

    fn add_source(&mut self, id: &str, source: &GeoJsonSource) {
        let result = mapbox::to_js(source).and_then(|s| self.map.add_source(id, &s));
        if let Err(e) = result {
            tracing::warn!(source = id, error = %mapbox::describe(&e), "addSource failed");
        }
    }

    fn has_layer(&self, id: &str) -> bool {
        !mapbox::is_absent(&self.map.get_layer(id))
    }

    fn add_layer(&mut self, layer: &CircleLayer) {
        let result = mapbox::to_js(layer).and_then(|l| self.map.add_layer(&l));
        if let Err(e) = result {
            tracing::warn!(layer = %layer.id, error = %mapbox::describe(&e), "addLayer failed");
        }
    }

    fn listen(&mut self, layer_id: &str) {
        self.on_layer("click", layer_id, |evt| WidgetEvent::Click(clicked_point(evt)));
        self.on_layer("mouseenter", layer_id, |_| WidgetEvent::PointerEnter);
        self.on_layer("mouseleave", layer_id, |_| WidgetEvent::PointerLeave);
    }

    fn set_cursor(&mut self, cursor: &str) {
        if let Err(e) = self.map.get_canvas().style().set_property("cursor", cursor) {
            tracing::debug!(error = %mapbox::describe(&e), "Could not set cursor");
        }
    }

    fn remove(self) {
        for marker in &self.markers {
            marker.remove();
        }
        self.map.remove();
    }
}
