mod components;
mod geolocation;
mod mapbox;
mod pages;
mod widget;

use dioxus::prelude::*;
use tracing::Level;

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        pages::home::Home {}
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // The launcher installs a default subscriber if this one is rejected.
    let _ = dioxus::logger::init(level);
    launch(App);
}
