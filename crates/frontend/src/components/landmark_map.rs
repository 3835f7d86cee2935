use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;
use landmark_shared::{MapConfig, ViewController, ViewError};

use crate::geolocation;
use crate::widget::{EventSink, MapboxWidget, WidgetEvent};

type SharedController = Rc<RefCell<ViewController<MapboxWidget>>>;

/// Handle of the in-flight location request, cancelled on unmount.
type LocationTask = Rc<Cell<Option<Task>>>;

/// The container element, if it is attached to the document.
fn live_container(id: &str) -> Option<&str> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)
        .map(|_| id)
}

fn dispatch(controller: &SharedController, locating: &LocationTask, event: WidgetEvent) {
    match event {
        WidgetEvent::Ready => {
            let request = controller.borrow_mut().on_ready();
            if let Some(request) = request {
                let controller = controller.clone();
                let task = spawn(async move {
                    let result = geolocation::current_position(&request).await;
                    controller.borrow_mut().on_geolocation(result);
                });
                locating.set(Some(task));
            }
        }
        WidgetEvent::Click(feature) => {
            controller.borrow_mut().on_overlay_click(feature);
        }
        WidgetEvent::PointerEnter => controller.borrow_mut().on_pointer_enter(),
        WidgetEvent::PointerLeave => controller.borrow_mut().on_pointer_leave(),
    }
}

/// Interactive map centered on the landmark.
///
/// The widget is created once the container is in the DOM and released when
/// the component unmounts. Map callbacks only enqueue `WidgetEvent`s; the
/// coroutine below applies them to the controller, so a callback never runs
/// while the controller is borrowed.
#[component]
pub fn LandmarkMap() -> Element {
    let controller: SharedController = use_hook(|| {
        let config = MapConfig::from_build_env();
        if config.has_placeholder_token() {
            tracing::warn!("MAPBOX_ACCESS_TOKEN was not set at build time; tiles will not load");
        }
        Rc::new(RefCell::new(ViewController::new(config)))
    });
    let locating: LocationTask = use_hook(|| Rc::new(Cell::new(None)));

    let events = use_coroutine({
        let controller = controller.clone();
        let locating = locating.clone();
        move |mut rx: UnboundedReceiver<WidgetEvent>| {
            let controller = controller.clone();
            let locating = locating.clone();
            async move {
                while let Some(event) = rx.next().await {
                    dispatch(&controller, &locating, event);
                }
            }
        }
    });

    use_drop({
        let controller = controller.clone();
        let locating = locating.clone();
        move || {
            if let Some(task) = locating.take() {
                task.cancel();
            }
            controller.borrow_mut().unmount();
        }
    });

    let container_id = controller.borrow().config().container_id.clone();

    let on_mounted = {
        let controller = controller.clone();
        move |_: MountedEvent| {
            let tx = events.tx();
            let sink: EventSink = Rc::new(move |event: WidgetEvent| {
                // Closed once the coroutine is gone; nothing left to notify.
                let _ = tx.unbounded_send(event);
            });

            let mut controller = controller.borrow_mut();
            let container_id = controller.config().container_id.clone();
            let result = controller.mount(live_container(&container_id), |options| {
                MapboxWidget::create(&options, sink)
            });
            match result {
                Ok(()) => {}
                Err(ViewError::MissingContainer) => {
                    tracing::debug!(container = %container_id, "Map container missing, skipping setup");
                }
                Err(e) => tracing::warn!(error = %e, "Map not shown"),
            }
        }
    };

    rsx! {
        div {
            id: "{container_id}",
            class: "w-full aspect-video",
            onmounted: on_mounted,
        }
    }
}
