use dioxus::logger::tracing;
use dioxus::prelude::*;

use tidewatch_shared::geo;
use tidewatch_shared::models::{HazardNotice, Severity, VizMode};

use crate::components::heat_map::HeatMap;
use crate::components::navigation::Navigation;
use crate::components::stat_card::StatCard;
use crate::components::toast::{show_toast, Toast, ToastHost};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MapTab {
    Overview,
    Temperature,
    Disasters,
}

fn hazards() -> Vec<HazardNotice> {
    fn notice(
        kind: &str,
        severity: Severity,
        location: &str,
        latitude: f64,
        longitude: f64,
        reported: &str,
        description: &str,
        affected_vessels: u32,
    ) -> HazardNotice {
        HazardNotice {
            kind: kind.to_string(),
            severity,
            location: location.to_string(),
            latitude,
            longitude,
            reported: reported.to_string(),
            description: description.to_string(),
            affected_vessels,
        }
    }

    vec![
        notice(
            "Cyclone",
            Severity::High,
            "Bay of Bengal",
            16.5,
            82.3,
            "2 hours ago",
            "Tropical cyclone forming with wind speeds up to 120 km/h",
            45,
        ),
        notice(
            "High Waves",
            Severity::Medium,
            "Arabian Sea",
            18.0,
            70.1,
            "4 hours ago",
            "Wave heights reaching 4-6 meters, hazardous for small vessels",
            23,
        ),
        notice(
            "Temperature Anomaly",
            Severity::Low,
            "Lakshadweep Sea",
            12.3,
            71.7,
            "6 hours ago",
            "Unusual temperature rise detected, monitoring marine life impact",
            8,
        ),
    ]
}

fn severity_badge_class(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "badge badge-alert",
        Severity::Medium => "badge badge-medium",
        Severity::Low => "badge badge-low",
    }
}

#[component]
pub fn OceanMap() -> Element {
    let mut tab = use_signal(|| MapTab::Overview);
    let mut selected_hazard = use_signal(|| None::<String>);
    let toast = use_signal(|| None::<Toast>);

    let notices = hazards();
    let current_tab = *tab.read();
    // Snapshot selection to avoid borrow conflicts with the row handlers.
    let selected = selected_hazard.read().clone();

    rsx! {
        div { class: "page",
            Navigation {}

            main { class: "container",
                div { class: "page-header",
                    h1 { "Ocean Monitoring System" }
                    p { "Real-time ocean conditions and disaster alert management" }
                }

                div { class: "tab-strip",
                    button {
                        class: if current_tab == MapTab::Overview { "active" } else { "" },
                        onclick: move |_| tab.set(MapTab::Overview),
                        "Overview"
                    }
                    button {
                        class: if current_tab == MapTab::Temperature { "active" } else { "" },
                        onclick: move |_| tab.set(MapTab::Temperature),
                        "Temperature Map"
                    }
                    button {
                        class: if current_tab == MapTab::Disasters { "active" } else { "" },
                        onclick: move |_| tab.set(MapTab::Disasters),
                        "Disaster Alerts"
                    }
                }

                if current_tab == MapTab::Overview {
                    div { class: "grid-wide",
                        HeatMap {
                            title: "Ocean Condition Overview",
                            mode: VizMode::Disaster,
                            show_alerts: true,
                        }

                        div { class: "panel",
                            h3 { "Active Alerts" }
                            p { class: "caption", "Current ocean hazards and warnings" }
                            for notice in &notices {
                                {
                                    let is_selected = selected.as_deref() == Some(notice.kind.as_str());
                                    let kind = notice.kind.clone();
                                    rsx! {
                                        div {
                                            class: if is_selected { "list-row selectable selected" } else { "list-row selectable" },
                                            onclick: move |_| selected_hazard.set(Some(kind.clone())),
                                            div {
                                                h4 { "{notice.kind}" }
                                                p { class: "caption", "{notice.location}" }
                                                p { class: "caption", "{notice.reported}" }
                                            }
                                            span { class: "{severity_badge_class(notice.severity)}",
                                                "{notice.severity}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                if current_tab == MapTab::Temperature {
                    div { class: "grid-stack",
                        HeatMap {
                            title: "Sea Surface Temperature Forecast",
                            mode: VizMode::Temperature,
                        }

                        div { class: "stat-grid three",
                            StatCard {
                                label: "Temperature Range",
                                value: "26\u{00b0}C - 31\u{00b0}C",
                                note: "Current sea surface range",
                            }
                            StatCard {
                                label: "Average Temperature",
                                value: "28.7\u{00b0}C",
                                note: "+0.8\u{00b0}C from seasonal average",
                            }
                            StatCard {
                                label: "Anomaly Zones",
                                value: "3",
                                note: "Areas requiring monitoring",
                                accent: true,
                            }
                        }
                    }
                }

                if current_tab == MapTab::Disasters {
                    div { class: "grid-wide",
                        HeatMap {
                            title: "Disaster Alert Zones",
                            mode: VizMode::Disaster,
                            show_alerts: true,
                        }

                        div { class: "panel",
                            h3 { "Alert Details" }
                            p { class: "caption", "Comprehensive disaster information" }
                            for notice in &notices {
                                {
                                    let is_selected = selected.as_deref() == Some(notice.kind.as_str());
                                    let kind = notice.kind.clone();
                                    let vessels = notice.affected_vessels;
                                    rsx! {
                                        div { class: if is_selected { "alert-card selected" } else { "alert-card" },
                                            div { class: "alert-card-header",
                                                h4 { "{notice.kind}" }
                                                span { class: "{severity_badge_class(notice.severity)}",
                                                    "{notice.severity}"
                                                }
                                            }
                                            p { "{notice.description}" }
                                            p { class: "caption",
                                                "{geo::format_position(notice.latitude, notice.longitude)}"
                                            }
                                            p { class: "caption", "{notice.reported}" }
                                            p { class: "caption", "{notice.affected_vessels} vessels affected" }
                                            button {
                                                class: "secondary",
                                                onclick: move |_| {
                                                    tracing::info!(hazard = %kind, vessels, "Broadcast alert to vessels");
                                                    show_toast(
                                                        toast,
                                                        "Alert Broadcast",
                                                        &format!("Warning sent to {vessels} vessels near {kind}."),
                                                    );
                                                },
                                                "Send Alert to Vessels"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            ToastHost { slot: toast }
        }
    }
}
