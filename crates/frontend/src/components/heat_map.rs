use dioxus::prelude::*;
use tidewatch_shared::classify::{classify, legend};
use tidewatch_shared::geo::{self, ProjectedPoint, INDIAN_WATERS};
use tidewatch_shared::models::{DensityClass, VizMode, ZoneRecord};
use tidewatch_shared::zones::ZoneRegistry;

use crate::selection::Selection;

/// Stylized coastline silhouette drawn behind the markers, in the surface's
/// 400x300 viewBox.
const COASTLINE_PATH: &str = "M70,0 L70,38 Q95,52 118,78 Q138,102 160,96 \
Q184,88 204,108 Q222,128 246,122 Q270,114 292,136 L312,158 Q330,180 324,202 \
L314,226 Q296,248 272,240 L250,230 Q228,220 206,230 L184,242 Q162,252 142,240 \
L120,226 Q100,212 88,190 L80,168 Q72,146 76,116 L72,86 Q68,60 70,38 Z";

// ---------------------------------------------------------------------------
// Pure render helpers
// ---------------------------------------------------------------------------

/// Inline offset style placing a marker at its projected position.
fn position_style(point: &ProjectedPoint) -> String {
    format!(
        "left:{:.2}%;top:{:.2}%;",
        point.x_norm * 100.0,
        point.y_norm * 100.0
    )
}

/// Marker class for the mode/selection combination. Temperature markers
/// render as soft blobs, the other modes as pins.
fn marker_class(mode: VizMode, selected: bool) -> &'static str {
    match (mode, selected) {
        (VizMode::Temperature, false) => "zone-marker temp",
        (VizMode::Temperature, true) => "zone-marker temp selected",
        (_, false) => "zone-marker",
        (_, true) => "zone-marker selected",
    }
}

/// Resolve the current selection against the registry. A stale id resolves
/// to nothing and the detail panel stays hidden.
fn detail_zone<'a>(registry: &'a ZoneRegistry, selection: &Selection) -> Option<&'a ZoneRecord> {
    registry.get(selection.selected_id()?)
}

/// Badge class for the fish-density chip in the detail panel.
fn density_badge_class(class: DensityClass) -> &'static str {
    match class {
        DensityClass::High => "badge badge-high",
        DensityClass::Medium => "badge badge-medium",
        DensityClass::Low => "badge badge-low",
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// Interactive zone map: one marker per registry zone at its projected
/// position, colored by the active mode's classification, with a matching
/// legend and a click-to-inspect detail panel.
///
/// `show_alerts` composites a hazard glyph onto alert-carrying zones on top
/// of whatever the primary mode renders. Clicking a marker toggles its
/// selection; clicking the water deliberately does not clear it.
#[component]
pub fn HeatMap(title: String, mode: VizMode, #[props(default)] show_alerts: bool) -> Element {
    let mut selection = use_signal(Selection::new);

    let registry = ZoneRegistry::indian_waters();
    let bounds = INDIAN_WATERS;

    // Snapshot selection once to avoid borrow conflicts with the marker
    // click handlers below.
    let selected_id: Option<String> = selection.read().selected_id().map(str::to_string);
    let detail = detail_zone(&registry, &selection.read()).cloned();
    let caption = mode.caption();
    let legend_rows = legend(mode);

    rsx! {
        div { class: "map-card",
            div { class: "map-card-header",
                h3 { "{title}" }
                p { class: "caption", "Interactive heat map showing {caption} across Indian waters" }
            }

            div { class: "map-surface",
                svg {
                    class: "coastline",
                    view_box: "0 0 400 300",
                    preserve_aspect_ratio: "none",
                    path { d: COASTLINE_PATH, fill: "#12344a", opacity: "0.6" }
                }

                for zone in registry.zones().iter().cloned() {
                    {
                        let point = geo::project(&zone, bounds);
                        let band = classify(&zone, mode);
                        let is_selected = selected_id.as_deref() == Some(zone.id.as_str());
                        let cls = marker_class(mode, is_selected);
                        let style = format!("{}background:{};", position_style(&point), band.color);
                        let flag_alert = show_alerts && zone.has_alert();
                        let zone_id = zone.id.clone();
                        rsx! {
                            div {
                                class: "{cls}",
                                style: "{style}",
                                title: "{zone.name}",
                                onclick: move |_| selection.write().click(&zone_id),
                                if flag_alert {
                                    span { class: "alert-glyph", "\u{26a0}" }
                                }
                            }
                        }
                    }
                }

                if let Some(zone) = &detail {
                    {
                        let density_cls = density_badge_class(zone.density_class);
                        let position = geo::format_position(zone.latitude, zone.longitude);
                        rsx! {
                            div { class: "zone-detail",
                                h4 { "{zone.name}" }
                                div { class: "badge-row",
                                    span { class: "badge badge-temp",
                                        "Temp: {zone.temperature_c:.1}\u{00b0}C"
                                    }
                                    span { class: "{density_cls}", "Fish: {zone.density_class}" }
                                    if let Some(alert) = &zone.alert {
                                        span { class: "badge badge-alert", "\u{26a0} {alert}" }
                                    }
                                }
                                p { class: "detail-position", "{position}" }
                            }
                        }
                    }
                }
            }

            div { class: "legend",
                for band in legend_rows {
                    div { class: "legend-item",
                        span { class: "legend-swatch", style: "background:{band.color};" }
                        span { class: "legend-label", "{band.label}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidewatch_shared::models::DensityClass;

    fn record(id: &str, latitude: f64, longitude: f64, temperature_c: f64) -> ZoneRecord {
        ZoneRecord {
            id: id.to_string(),
            name: format!("Zone {id}"),
            latitude,
            longitude,
            temperature_c,
            density_class: DensityClass::Medium,
            alert: None,
        }
    }

    #[test]
    fn test_position_style_percentages() {
        let point = ProjectedPoint {
            zone_id: "z".to_string(),
            x_norm: 0.5,
            y_norm: 0.25,
        };
        assert_eq!(position_style(&point), "left:50.00%;top:25.00%;");
    }

    #[test]
    fn test_position_style_at_clamped_edge() {
        let point = ProjectedPoint {
            zone_id: "z".to_string(),
            x_norm: 1.0,
            y_norm: 0.0,
        };
        assert_eq!(position_style(&point), "left:100.00%;top:0.00%;");
    }

    #[test]
    fn test_marker_class_variants() {
        assert_eq!(marker_class(VizMode::Fish, false), "zone-marker");
        assert_eq!(marker_class(VizMode::Fish, true), "zone-marker selected");
        assert_eq!(marker_class(VizMode::Temperature, false), "zone-marker temp");
        assert_eq!(
            marker_class(VizMode::Temperature, true),
            "zone-marker temp selected"
        );
        assert_eq!(marker_class(VizMode::Disaster, false), "zone-marker");
    }

    #[test]
    fn test_density_badge_class_is_exhaustive() {
        assert_eq!(density_badge_class(DensityClass::High), "badge badge-high");
        assert_eq!(
            density_badge_class(DensityClass::Medium),
            "badge badge-medium"
        );
        assert_eq!(density_badge_class(DensityClass::Low), "badge badge-low");
    }

    #[test]
    fn test_detail_zone_resolves_selection() {
        let registry = ZoneRegistry::indian_waters();
        let mut selection = Selection::new();
        selection.click("zone3");
        let zone = detail_zone(&registry, &selection).unwrap();
        assert_eq!(zone.name, "Bay of Bengal");
    }

    #[test]
    fn test_detail_zone_stale_selection_is_hidden() {
        // A selection that no longer resolves renders no panel.
        let registry = ZoneRegistry::indian_waters();
        let mut selection = Selection::new();
        selection.click("ghost");
        assert!(detail_zone(&registry, &selection).is_none());
    }

    #[test]
    fn test_detail_zone_empty_selection() {
        let registry = ZoneRegistry::indian_waters();
        assert!(detail_zone(&registry, &Selection::new()).is_none());
    }

    #[test]
    fn test_surface_flow_project_classify_select() {
        let registry = ZoneRegistry::from_records(vec![
            record("z1", 20.0, 70.0, 26.2),
            record("z2", 12.0, 76.0, 31.5),
        ]);

        let z1 = registry.get("z1").unwrap();
        let p1 = geo::project(z1, INDIAN_WATERS);
        assert!((p1.x_norm - 0.118).abs() < 1e-3);
        assert!((p1.y_norm - 0.294).abs() < 1e-3);
        assert_eq!(classify(z1, VizMode::Temperature).label, "26-27\u{00b0}C");

        let z2 = registry.get("z2").unwrap();
        assert_eq!(classify(z2, VizMode::Temperature).label, "31\u{00b0}C+");

        let mut selection = Selection::new();
        selection.click("z1");
        let shown = detail_zone(&registry, &selection).unwrap();
        assert!((shown.temperature_c - 26.2).abs() < 1e-9);

        selection.click("z1");
        assert!(detail_zone(&registry, &selection).is_none());
    }
}
