use dioxus::prelude::*;

use tidewatch_shared::geo;
use tidewatch_shared::models::{ChartPoint, DensityClass, FishingZoneStatus, VizMode, ZoneHealth};

use crate::components::data_chart::{ChartKind, DataChart};
use crate::components::heat_map::HeatMap;
use crate::components::navigation::Navigation;
use crate::components::stat_card::StatCard;

fn zone_statuses() -> Vec<FishingZoneStatus> {
    fn status(
        zone: &str,
        health: ZoneHealth,
        density_class: DensityClass,
        latitude: f64,
        longitude: f64,
    ) -> FishingZoneStatus {
        FishingZoneStatus {
            zone: zone.to_string(),
            health,
            density_class,
            latitude,
            longitude,
        }
    }

    vec![
        status("Zone A1", ZoneHealth::Optimal, DensityClass::High, 19.0, 72.0),
        status("Zone B2", ZoneHealth::Good, DensityClass::Medium, 15.0, 74.0),
        status("Zone C3", ZoneHealth::Poor, DensityClass::Low, 12.0, 75.0),
        status("Zone D4", ZoneHealth::Optimal, DensityClass::High, 21.0, 70.0),
    ]
}

fn health_badge_class(health: ZoneHealth) -> &'static str {
    match health {
        ZoneHealth::Optimal => "badge badge-optimal",
        ZoneHealth::Good => "badge badge-good",
        ZoneHealth::Poor => "badge badge-poor",
    }
}

fn density_chip_class(class: DensityClass) -> &'static str {
    match class {
        DensityClass::High => "badge badge-high",
        DensityClass::Medium => "badge badge-medium",
        DensityClass::Low => "badge badge-low",
    }
}

#[component]
pub fn Fisheries() -> Element {
    let species = vec![
        ChartPoint::new("Tuna", 35.0),
        ChartPoint::new("Sardine", 25.0),
        ChartPoint::new("Mackerel", 20.0),
        ChartPoint::new("Pomfret", 12.0),
        ChartPoint::new("Others", 8.0),
    ];

    let monthly = vec![
        ChartPoint::new("Jan", 2400.0),
        ChartPoint::new("Feb", 1398.0),
        ChartPoint::new("Mar", 9800.0),
        ChartPoint::new("Apr", 3908.0),
        ChartPoint::new("May", 4800.0),
        ChartPoint::new("Jun", 3800.0),
    ];

    let zones = zone_statuses();

    rsx! {
        div { class: "page",
            Navigation {}

            main { class: "container",
                div { class: "page-header",
                    h1 { "Fisheries Dashboard" }
                    p { "Real-time marine fishing data and analytics for sustainable resource management" }
                }

                div { class: "grid-wide",
                    HeatMap { title: "Fish Population Heat Map", mode: VizMode::Fish }
                    DataChart {
                        title: "Fish Species Distribution",
                        kind: ChartKind::Pie,
                        points: species,
                    }
                }

                div { class: "stat-grid",
                    StatCard {
                        label: "Total Catch",
                        value: "2,450 tons",
                        note: "+12.5% from last month",
                    }
                    StatCard {
                        label: "Active Vessels",
                        value: "1,247",
                        note: "+8.2% from last week",
                    }
                    StatCard {
                        label: "High Density Zones",
                        value: "7",
                        note: "2 new zones identified",
                    }
                    StatCard {
                        label: "Seasonal Peak",
                        value: "March",
                        note: "Expected in 2 weeks",
                    }
                }

                div { class: "grid-split",
                    DataChart {
                        title: "Monthly Fishing Volume",
                        kind: ChartKind::Bar,
                        points: monthly,
                    }

                    div { class: "panel",
                        h3 { "Fishing Zone Status" }
                        p { class: "caption", "Current status of major fishing zones" }
                        for z in &zones {
                            div { class: "list-row",
                                div {
                                    h4 { "{z.zone}" }
                                    p { class: "caption",
                                        "{geo::format_position(z.latitude, z.longitude)}"
                                    }
                                }
                                div { class: "badge-row",
                                    span { class: "{health_badge_class(z.health)}", "{z.health}" }
                                    span { class: "{density_chip_class(z.density_class)}",
                                        "{z.density_class} Fish"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
