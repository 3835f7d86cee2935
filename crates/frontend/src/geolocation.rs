use landmark_shared::config::GeolocationOptions;
use landmark_shared::{GeolocationError, LngLat};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{GeolocationPosition, GeolocationPositionError, PositionOptions};

use crate::mapbox;

/// One-shot device location request.
///
/// Resolves once the platform calls back; the timeout is enforced by the
/// browser from `options`. Dropping the future abandons the result.
pub async fn current_position(options: &GeolocationOptions) -> Result<LngLat, GeolocationError> {
    let navigator = web_sys::window()
        .ok_or(GeolocationError::Unsupported)?
        .navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("geolocation"))
        .unwrap_or(false);
    if !supported {
        return Err(GeolocationError::Unsupported);
    }
    let geolocation = navigator
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    let position_options = PositionOptions::new();
    position_options.set_enable_high_accuracy(options.enable_high_accuracy);
    position_options.set_timeout(options.timeout_ms);
    position_options.set_maximum_age(options.maximum_age_ms);

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
            &resolve,
            Some(&reject),
            &position_options,
        ) {
            let _ = reject.call1(&JsValue::UNDEFINED, &err);
        }
    });

    match JsFuture::from(promise).await {
        Ok(value) => {
            let coords = value.unchecked_into::<GeolocationPosition>().coords();
            Ok(LngLat::new(coords.longitude(), coords.latitude()))
        }
        Err(err) => Err(position_error(err)),
    }
}

fn position_error(err: JsValue) -> GeolocationError {
    match err.dyn_into::<GeolocationPositionError>() {
        Ok(e) => GeolocationError::from_code(e.code(), e.message()),
        Err(other) => GeolocationError::Other(mapbox::describe(&other)),
    }
}
