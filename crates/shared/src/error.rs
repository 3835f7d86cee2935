use thiserror::Error;

/// Why a mount did not produce a widget. None of these are fatal to the page.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error("map container is not in the document")]
    MissingContainer,

    #[error("a map widget is already mounted")]
    AlreadyMounted,

    #[error("map widget could not be created: {0}")]
    Widget(String),
}

/// Outcome of a failed device location request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeolocationError {
    #[error("geolocation is not supported by this browser")]
    Unsupported,

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("position unavailable: {0}")]
    PositionUnavailable(String),

    #[error("timed out: {0}")]
    Timeout(String),

    #[error("{0}")]
    Other(String),
}

impl GeolocationError {
    // GeolocationPositionError codes
    pub const PERMISSION_DENIED: u16 = 1;
    pub const POSITION_UNAVAILABLE: u16 = 2;
    pub const TIMEOUT: u16 = 3;

    pub fn from_code(code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            Self::PERMISSION_DENIED => GeolocationError::PermissionDenied(message),
            Self::POSITION_UNAVAILABLE => GeolocationError::PositionUnavailable(message),
            Self::TIMEOUT => GeolocationError::Timeout(message),
            _ => GeolocationError::Other(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_maps_position_error_codes() {
        assert_eq!(
            GeolocationError::from_code(1, "User denied Geolocation"),
            GeolocationError::PermissionDenied("User denied Geolocation".into())
        );
        assert_eq!(
            GeolocationError::from_code(2, "no fix"),
            GeolocationError::PositionUnavailable("no fix".into())
        );
        assert_eq!(
            GeolocationError::from_code(3, "Timeout expired"),
            GeolocationError::Timeout("Timeout expired".into())
        );
        assert_eq!(
            GeolocationError::from_code(42, "odd"),
            GeolocationError::Other("odd".into())
        );
    }

    #[test]
    fn test_display_carries_reason() {
        let err = GeolocationError::PermissionDenied("User denied Geolocation".into());
        assert_eq!(err.to_string(), "permission denied: User denied Geolocation");
    }
}
