//! Lifecycle of the landmark map view.
//!
//! `ViewController` owns at most one widget. The widget is acquired by
//! [`ViewController::mount`] and released by [`ViewController::unmount`] or
//! when the controller is dropped. Setup runs once, on the first ready
//! notification; later notifications are ignored.

use crate::config::{GeolocationOptions, MapConfig};
use crate::diagnostics::Diagnostic;
use crate::error::{GeolocationError, ViewError};
use crate::geo::LngLat;
use crate::geojson::{CircleLayer, GeoJsonSource, WidgetOptions};
use crate::widget::MapWidget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unmounted,
    /// Widget constructed, style and assets still loading.
    Loading,
    /// Marker, overlay and listeners are in place.
    Configured,
}

struct Mounted<W> {
    widget: W,
    configured: bool,
    user_location: Option<LngLat>,
}

pub struct ViewController<W: MapWidget> {
    config: MapConfig,
    mounted: Option<Mounted<W>>,
}

impl<W: MapWidget> ViewController<W> {
    pub fn new(config: MapConfig) -> Self {
        ViewController {
            config,
            mounted: None,
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        match &self.mounted {
            None => Phase::Unmounted,
            Some(m) if m.configured => Phase::Configured,
            Some(_) => Phase::Loading,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn user_location(&self) -> Option<LngLat> {
        self.mounted.as_ref().and_then(|m| m.user_location)
    }

    /// Construct the widget inside `container`.
    ///
    /// `container` is the id of a live DOM element, or `None` when the element
    /// is not in the document. `build` is only called when a widget will be
    /// kept, so at most one exists per mount.
    pub fn mount<F>(&mut self, container: Option<&str>, build: F) -> Result<(), ViewError>
    where
        F: FnOnce(WidgetOptions) -> Result<W, ViewError>,
    {
        if self.mounted.is_some() {
            return Err(ViewError::AlreadyMounted);
        }
        let container = container.ok_or(ViewError::MissingContainer)?;

        let widget = build(WidgetOptions::from_config(&self.config, container))?;
        self.mounted = Some(Mounted {
            widget,
            configured: false,
            user_location: None,
        });
        tracing::info!(container, zoom = self.config.zoom, "Map widget created");
        Ok(())
    }

    /// Handle the widget's ready notification.
    ///
    /// Returns the geolocation request to issue, once, after the first
    /// successful setup. Duplicate notifications and notifications for a
    /// released widget return `None` and change nothing.
    pub fn on_ready(&mut self) -> Option<GeolocationOptions> {
        let config = &self.config;
        let Some(mounted) = self.mounted.as_mut() else {
            tracing::debug!("Ready notification with no mounted map");
            return None;
        };
        if mounted.configured {
            tracing::debug!("Duplicate ready notification ignored");
            return None;
        }

        let widget = &mut mounted.widget;
        widget.add_marker(config.landmark, config.landmark_marker_color.as_deref());

        if !widget.has_source(&config.source_id) {
            widget.add_source(&config.source_id, &GeoJsonSource::single_point(config.landmark));
        }
        if !widget.has_layer(&config.layer_id) {
            widget.add_layer(&CircleLayer::new(
                &config.layer_id,
                &config.source_id,
                &config.overlay,
            ));
        }
        widget.listen(&config.layer_id);

        mounted.configured = true;
        tracing::info!(layer = %config.layer_id, "Map configured");
        Some(config.geolocation)
    }

    /// Click on the overlay. `feature` is the clicked point, if the event
    /// carried one; otherwise the landmark is reported.
    pub fn on_overlay_click(&mut self, feature: Option<LngLat>) -> Option<Diagnostic> {
        if self.phase() != Phase::Configured {
            return None;
        }
        let diagnostic = Diagnostic::OverlayClicked(feature.unwrap_or(self.config.landmark));
        diagnostic.emit();
        Some(diagnostic)
    }

    pub fn on_pointer_enter(&mut self) {
        self.set_cursor("pointer");
    }

    pub fn on_pointer_leave(&mut self) {
        self.set_cursor("");
    }

    fn set_cursor(&mut self, cursor: &str) {
        if let Some(mounted) = self.mounted.as_mut().filter(|m| m.configured) {
            mounted.widget.set_cursor(cursor);
        }
    }

    /// Handle the outcome of the location request issued after setup.
    ///
    /// A fix places the user marker; a failure only reports. Results that
    /// arrive after unmount, or after a marker was already placed, are dropped.
    pub fn on_geolocation(&mut self, result: Result<LngLat, GeolocationError>) -> Diagnostic {
        let color = &self.config.user_marker_color;
        let mounted = self
            .mounted
            .as_mut()
            .filter(|m| m.configured && m.user_location.is_none());

        let diagnostic = match (mounted, result) {
            (None, _) => Diagnostic::LateGeolocation,
            (Some(mounted), Ok(at)) => {
                if !at.is_valid() {
                    tracing::warn!(lng = at.lng, lat = at.lat, "Location outside WGS84 range");
                }
                mounted.widget.add_marker(at, Some(color.as_str()));
                mounted.user_location = Some(at);
                Diagnostic::UserLocated(at)
            }
            (Some(_), Err(err)) => Diagnostic::from(err),
        };
        diagnostic.emit();
        diagnostic
    }

    /// Release the widget. Returns `false` when nothing was mounted.
    pub fn unmount(&mut self) -> bool {
        match self.mounted.take() {
            Some(mounted) => {
                mounted.widget.remove();
                tracing::info!("Map widget released");
                true
            }
            None => false,
        }
    }
}

impl<W: MapWidget> Drop for ViewController<W> {
    fn drop(&mut self) {
        self.unmount();
    }
}
