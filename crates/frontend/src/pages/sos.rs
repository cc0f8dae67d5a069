use dioxus::logger::tracing;
use dioxus::prelude::*;

use tidewatch_shared::geo::{self, INDIAN_WATERS};
use tidewatch_shared::models::{Priority, SosAlert, SosStatus};

use crate::components::navigation::Navigation;
use crate::components::stat_card::StatCard;
use crate::components::toast::{show_toast, Toast, ToastHost};
use crate::selection::Selection;

fn sos_alerts() -> Vec<SosAlert> {
    fn alert(
        id: &str,
        fisherman: &str,
        boat_name: &str,
        latitude: f64,
        longitude: f64,
        distance_nm: f64,
        reported: &str,
        emergency: &str,
        priority: Priority,
        status: SosStatus,
        crew_size: u8,
        contact: &str,
        description: &str,
    ) -> SosAlert {
        SosAlert {
            id: id.to_string(),
            fisherman: fisherman.to_string(),
            boat_name: boat_name.to_string(),
            latitude,
            longitude,
            distance_nm,
            reported: reported.to_string(),
            emergency: emergency.to_string(),
            priority,
            status,
            crew_size,
            contact: contact.to_string(),
            description: description.to_string(),
        }
    }

    vec![
        alert(
            "SOS001",
            "Ravi Kumar",
            "Sea Explorer",
            19.2,
            72.8,
            12.0,
            "15 minutes ago",
            "Engine Failure",
            Priority::High,
            SosStatus::Active,
            4,
            "+91 98765 43210",
            "Engine has completely failed. Boat is drifting. Need immediate assistance.",
        ),
        alert(
            "SOS002",
            "Suresh Nair",
            "Ocean Pride",
            18.5,
            70.2,
            25.0,
            "1 hour ago",
            "Medical Emergency",
            Priority::Critical,
            SosStatus::Dispatched,
            3,
            "+91 98765 43211",
            "Crew member injured during fishing operations. Requires medical evacuation.",
        ),
        alert(
            "SOS003",
            "Ajay Patel",
            "Marine Star",
            16.8,
            73.1,
            18.0,
            "2 hours ago",
            "Navigation System Down",
            Priority::Medium,
            SosStatus::Resolved,
            2,
            "+91 98765 43212",
            "GPS and communication equipment malfunctioned during storm.",
        ),
    ]
}

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "critical",
        Priority::High => "high",
        Priority::Medium => "medium",
    }
}

fn priority_badge_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "badge badge-alert",
        Priority::High => "badge badge-warning",
        Priority::Medium => "badge badge-notice",
    }
}

fn status_badge_class(status: SosStatus) -> &'static str {
    match status {
        SosStatus::Active => "badge badge-alert",
        SosStatus::Dispatched => "badge badge-info",
        SosStatus::Resolved => "badge badge-muted",
    }
}

#[component]
pub fn Sos() -> Element {
    let mut report_open = use_signal(|| false);
    let mut report_name = use_signal(|| String::new());
    let mut report_boat = use_signal(|| String::new());
    let mut report_contact = use_signal(|| String::new());
    let mut report_lat = use_signal(|| String::new());
    let mut report_lng = use_signal(|| String::new());
    let mut report_crew = use_signal(|| String::new());
    let mut report_description = use_signal(|| String::new());

    let mut selection = use_signal(Selection::new);
    let toast = use_signal(|| None::<Toast>);

    let alerts = sos_alerts();
    let active_count = alerts
        .iter()
        .filter(|s| s.status == SosStatus::Active)
        .count();
    let dispatched_count = alerts
        .iter()
        .filter(|s| s.status == SosStatus::Dispatched)
        .count();

    // Snapshot selection to avoid borrow conflicts with the marker handlers.
    let selected_id: Option<String> = selection.read().selected_id().map(str::to_string);
    let selected_sos: Option<SosAlert> = selected_id
        .as_deref()
        .and_then(|id| alerts.iter().find(|s| s.id == id))
        .cloned();

    rsx! {
        div { class: "page",
            Navigation {}

            main { class: "container",
                div { class: "page-header split",
                    div {
                        h1 { "SOS Alert System" }
                        p { "Emergency response coordination for fishermen and marine vessels" }
                    }
                    button { class: "danger", onclick: move |_| report_open.set(true),
                        "Send SOS Alert"
                    }
                }

                div { class: "stat-grid",
                    StatCard {
                        label: "Active Alerts",
                        value: "{active_count}",
                        note: "Requiring immediate attention",
                        accent: true,
                    }
                    StatCard {
                        label: "In Progress",
                        value: "{dispatched_count}",
                        note: "Rescue teams en route",
                    }
                    StatCard {
                        label: "Total Rescued",
                        value: "147",
                        note: "Fishermen saved this year",
                    }
                    StatCard {
                        label: "Response Time",
                        value: "18 min",
                        note: "Average emergency response",
                    }
                }

                div { class: "grid-wide",
                    div { class: "panel",
                        h3 { "SOS Location Map" }
                        p { class: "caption", "Real-time positions of emergency alerts" }

                        div { class: "map-surface",
                            svg {
                                class: "coastline",
                                view_box: "0 0 400 300",
                                preserve_aspect_ratio: "none",
                                path {
                                    d: "M80,50 Q120,60 140,80 L160,120 Q180,140 200,160 L220,200 Q200,220 180,240 L120,250 Q100,230 90,200 L80,160 Q70,100 80,50Z",
                                    fill: "#12344a",
                                    opacity: "0.6",
                                }
                            }

                            for sos in &alerts {
                                {
                                    let (x, y) = geo::normalize(sos.latitude, sos.longitude, INDIAN_WATERS);
                                    let style = format!("left:{:.2}%;top:{:.2}%;", x * 100.0, y * 100.0);
                                    let is_selected = selected_id.as_deref() == Some(sos.id.as_str());
                                    let cls = format!(
                                        "sos-marker {}{}",
                                        priority_class(sos.priority),
                                        if is_selected { " selected" } else { "" },
                                    );
                                    let sos_id = sos.id.clone();
                                    rsx! {
                                        div {
                                            class: "{cls}",
                                            style: "{style}",
                                            title: "{sos.boat_name}",
                                            onclick: move |_| selection.write().click(&sos_id),
                                            "\u{26a0}"
                                        }
                                    }
                                }
                            }

                            if let Some(sos) = &selected_sos {
                                div { class: "sos-detail",
                                    div { class: "sos-detail-header",
                                        div {
                                            h4 { "{sos.fisherman}" }
                                            p { class: "caption", "{sos.boat_name}" }
                                        }
                                        span { class: "{priority_badge_class(sos.priority)}",
                                            "{sos.priority}"
                                        }
                                    }
                                    p { "{sos.emergency}" }
                                    div { class: "sos-detail-footer",
                                        span { "{sos.distance_nm:.0} nautical miles from coast" }
                                        span { "{sos.reported}" }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "panel",
                        h3 { "Emergency Alerts" }
                        p { class: "caption", "Current SOS situations requiring attention" }

                        for sos in &alerts {
                            {
                                let position = geo::format_position(sos.latitude, sos.longitude);
                                let sos_id = sos.id.clone();
                                let copy_position = position.clone();
                                rsx! {
                                    div { class: "alert-card",
                                        div { class: "alert-card-header",
                                            div {
                                                h4 { "{sos.fisherman}" }
                                                p { class: "caption", "{sos.boat_name}" }
                                            }
                                            div { class: "badge-col",
                                                span { class: "{priority_badge_class(sos.priority)}",
                                                    "{sos.priority}"
                                                }
                                                span { class: "{status_badge_class(sos.status)}",
                                                    "{sos.status}"
                                                }
                                            }
                                        }

                                        p { "{sos.emergency}" }
                                        p { class: "caption",
                                            "{position} ({sos.distance_nm:.0} nautical miles)"
                                        }
                                        p { class: "caption", "{sos.reported}" }
                                        p { class: "caption", "{sos.crew_size} crew members" }
                                        p { class: "caption", "{sos.contact}" }
                                        p { class: "quote", "\u{201c}{sos.description}\u{201d}" }

                                        div { class: "alert-card-actions",
                                            if sos.status == SosStatus::Active {
                                                button {
                                                    onclick: move |_| {
                                                        tracing::info!(sos = %sos_id, "Rescue dispatch requested");
                                                        show_toast(
                                                            toast,
                                                            "Rescue Team Dispatched",
                                                            &format!("Coast Guard vessel en route to SOS location {sos_id}"),
                                                        );
                                                    },
                                                    "Dispatch Rescue"
                                                }
                                            }
                                            button {
                                                class: "secondary",
                                                onclick: move |_| {
                                                    let text = copy_position.clone();
                                                    wasm_bindgen_futures::spawn_local(async move {
                                                        if let Some(window) = web_sys::window() {
                                                            let clipboard = window.navigator().clipboard();
                                                            let _ = wasm_bindgen_futures::JsFuture::from(
                                                                clipboard.write_text(&text)
                                                            ).await;
                                                        }
                                                    });
                                                    show_toast(
                                                        toast,
                                                        "Position Copied",
                                                        &format!("{copy_position} copied to clipboard."),
                                                    );
                                                },
                                                "Copy Position"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if *report_open.read() {
                div { class: "dialog-backdrop", onclick: move |_| report_open.set(false),
                    div {
                        class: "dialog",
                        onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                        h2 { "Emergency SOS Alert" }
                        p { class: "caption",
                            "Fill in emergency details. This will immediately alert Coast Guard and rescue services."
                        }

                        label { "Fisherman Name" }
                        input {
                            r#type: "text",
                            placeholder: "Enter your name",
                            value: "{report_name}",
                            oninput: move |evt: Event<FormData>| {
                                report_name.set(evt.value().to_string());
                            },
                        }

                        label { "Boat Name/Number" }
                        input {
                            r#type: "text",
                            placeholder: "Enter boat identification",
                            value: "{report_boat}",
                            oninput: move |evt: Event<FormData>| {
                                report_boat.set(evt.value().to_string());
                            },
                        }

                        label { "Emergency Contact" }
                        input {
                            r#type: "text",
                            placeholder: "+91 XXXXX XXXXX",
                            value: "{report_contact}",
                            oninput: move |evt: Event<FormData>| {
                                report_contact.set(evt.value().to_string());
                            },
                        }

                        div { class: "field-row",
                            div {
                                label { "Latitude" }
                                input {
                                    r#type: "text",
                                    placeholder: "19.0760",
                                    value: "{report_lat}",
                                    oninput: move |evt: Event<FormData>| {
                                        report_lat.set(evt.value().to_string());
                                    },
                                }
                            }
                            div {
                                label { "Longitude" }
                                input {
                                    r#type: "text",
                                    placeholder: "72.8777",
                                    value: "{report_lng}",
                                    oninput: move |evt: Event<FormData>| {
                                        report_lng.set(evt.value().to_string());
                                    },
                                }
                            }
                        }

                        label { "Crew Size" }
                        input {
                            r#type: "number",
                            min: "1",
                            placeholder: "Number of people on board",
                            value: "{report_crew}",
                            oninput: move |evt: Event<FormData>| {
                                report_crew.set(evt.value().to_string());
                            },
                        }

                        label { "Emergency Description" }
                        textarea {
                            rows: "3",
                            placeholder: "Describe the emergency situation in detail",
                            value: "{report_description}",
                            oninput: move |evt: Event<FormData>| {
                                report_description.set(evt.value().to_string());
                            },
                        }

                        div { class: "dialog-actions",
                            button {
                                class: "secondary",
                                onclick: move |_| report_open.set(false),
                                "Cancel"
                            }
                            button {
                                class: "danger",
                                onclick: move |_| {
                                    let lat = report_lat.read().trim().parse::<f64>();
                                    let lng = report_lng.read().trim().parse::<f64>();
                                    match (lat, lng) {
                                        (Ok(latitude), Ok(longitude)) => {
                                            let name = report_name.read().clone();
                                            tracing::info!(
                                                fisherman = %name,
                                                latitude,
                                                longitude,
                                                "SOS alert submitted"
                                            );
                                            show_toast(
                                                toast,
                                                "SOS Alert Sent Successfully",
                                                "Coast Guard and rescue teams have been notified. Help is on the way.",
                                            );
                                            report_name.set(String::new());
                                            report_boat.set(String::new());
                                            report_contact.set(String::new());
                                            report_lat.set(String::new());
                                            report_lng.set(String::new());
                                            report_crew.set(String::new());
                                            report_description.set(String::new());
                                            report_open.set(false);
                                        }
                                        _ => {
                                            show_toast(
                                                toast,
                                                "Invalid Position",
                                                "Latitude and longitude must be decimal degrees.",
                                            );
                                        }
                                    }
                                },
                                "Send SOS Alert"
                            }
                        }
                    }
                }
            }

            ToastHost { slot: toast }
        }
    }
}
