use dioxus::prelude::*;

use crate::components::navigation::Navigation;
use crate::Route;

#[component]
pub fn Home() -> Element {
    let features = [
        (
            Route::Fisheries {},
            "Fisheries Management",
            "Monitor fish populations, track catch data, and optimize fishing zones for sustainable resource management.",
        ),
        (
            Route::Research {},
            "Scientific Research",
            "Collaborate on marine research, publish findings, and access comprehensive oceanographic data.",
        ),
        (
            Route::OceanMap {},
            "Ocean Monitoring",
            "Real-time ocean conditions, temperature mapping, and disaster alert systems.",
        ),
        (
            Route::Sos {},
            "SOS Emergency System",
            "Emergency response coordination for fishermen and marine vessels in distress.",
        ),
    ];

    let stats = [
        ("2,847", "Marine Species Catalogued"),
        ("156", "Research Publications"),
        ("1.2M+", "Ocean Data Points"),
        ("12,500", "Fishermen Protected"),
    ];

    rsx! {
        div { class: "page",
            Navigation {}

            section { class: "hero",
                h1 { "Tidewatch" }
                p { class: "tagline", "Integrated marine data platform for Indian waters" }
                p { class: "lead",
                    "Ocean monitoring, fisheries analytics and emergency response coordination in one place."
                }
                div { class: "hero-actions",
                    Link { class: "button", to: Route::Fisheries {}, "Explore Fisheries Data" }
                    Link { class: "button secondary", to: Route::OceanMap {}, "Open Ocean Map" }
                }
            }

            section { class: "features",
                h2 { "One Platform, Four Watch Desks" }
                p { class: "caption",
                    "Comprehensive tools for marine research, fisheries management, and emergency response coordination"
                }
                div { class: "feature-grid",
                    for (route, title, blurb) in features {
                        Link { class: "feature-card", to: route,
                            h3 { "{title}" }
                            p { "{blurb}" }
                        }
                    }
                }
            }

            section { class: "stats",
                div { class: "stat-grid",
                    for (value, label) in stats {
                        div { class: "stat-card",
                            span { class: "stat-value", "{value}" }
                            span { class: "stat-label", "{label}" }
                        }
                    }
                }
            }

            footer { class: "footer",
                p { "Tidewatch \u{2014} marine intelligence for the Indian Ocean" }
            }
        }
    }
}
