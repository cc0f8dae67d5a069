use dioxus::prelude::*;

use crate::Route;

/// Top navigation bar, shared by every page. The link matching the current
/// route gets the active style.
#[component]
pub fn Navigation() -> Element {
    let current = use_route::<Route>();

    let links = [
        ("Home", Route::Home {}),
        ("Fisheries", Route::Fisheries {}),
        ("Research", Route::Research {}),
        ("Ocean Map", Route::OceanMap {}),
        ("SOS", Route::Sos {}),
    ];

    rsx! {
        nav { class: "navbar",
            Link { class: "brand", to: Route::Home {}, "Tidewatch" }
            div { class: "nav-links",
                for (label, route) in links {
                    {
                        let cls = if current == route {
                            "nav-link active"
                        } else {
                            "nav-link"
                        };
                        rsx! {
                            Link { class: "{cls}", to: route, "{label}" }
                        }
                    }
                }
            }
        }
    }
}
