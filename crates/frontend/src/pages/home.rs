use dioxus::prelude::*;

use crate::components::landmark_map::LandmarkMap;

#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "w-full flex flex-col items-center",
            div { class: "w-full max-w-screen-lg p-4",
                LandmarkMap {}
            }
        }
    }
}
