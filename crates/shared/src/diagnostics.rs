use crate::error::GeolocationError;
use crate::geo::LngLat;

/// Developer-facing report of an interaction or a degraded feature.
///
/// Nothing here reaches the end user; `emit` writes to the tracing
/// subscriber, which in the browser is the console.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    OverlayClicked(LngLat),
    UserLocated(LngLat),
    GeolocationUnsupported,
    GeolocationFailed(GeolocationError),
    /// A location fix arrived with no configured map to take it, or after
    /// the user marker was already placed.
    LateGeolocation,
}

impl Diagnostic {
    pub fn emit(&self) {
        match self {
            Diagnostic::OverlayClicked(at) => {
                tracing::info!(lng = at.lng, lat = at.lat, "Landmark overlay clicked");
            }
            Diagnostic::UserLocated(at) => {
                tracing::info!(lng = at.lng, lat = at.lat, "User's current location");
            }
            Diagnostic::GeolocationUnsupported => {
                tracing::warn!("Geolocation not supported in this browser");
            }
            Diagnostic::GeolocationFailed(err) => {
                tracing::warn!(error = %err, "Geolocation error");
            }
            Diagnostic::LateGeolocation => {
                tracing::debug!("Discarding geolocation result");
            }
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Diagnostic::GeolocationUnsupported | Diagnostic::GeolocationFailed(_)
        )
    }
}

impl From<GeolocationError> for Diagnostic {
    fn from(err: GeolocationError) -> Self {
        match err {
            GeolocationError::Unsupported => Diagnostic::GeolocationUnsupported,
            other => Diagnostic::GeolocationFailed(other),
        }
    }
}
