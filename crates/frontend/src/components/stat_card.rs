use dioxus::prelude::*;

/// Compact metric card used on dashboard stat rows.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    note: String,
    #[props(default)] accent: bool,
) -> Element {
    let cls = if accent { "stat-card accent" } else { "stat-card" };

    rsx! {
        div { class: "{cls}",
            span { class: "stat-label", "{label}" }
            span { class: "stat-value", "{value}" }
            span { class: "stat-note", "{note}" }
        }
    }
}
