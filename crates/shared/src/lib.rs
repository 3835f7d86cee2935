pub mod config;
pub mod diagnostics;
pub mod error;
pub mod geo;
pub mod geojson;
pub mod view;
pub mod widget;

pub use config::MapConfig;
pub use diagnostics::Diagnostic;
pub use error::{GeolocationError, ViewError};
pub use geo::LngLat;
pub use view::{Phase, ViewController};
pub use widget::MapWidget;
