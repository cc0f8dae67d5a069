use dioxus::logger::tracing;
use dioxus::prelude::*;

use tidewatch_shared::models::{ChartPoint, PubStatus, Publication, VizMode};

use crate::components::data_chart::{ChartKind, DataChart};
use crate::components::heat_map::HeatMap;
use crate::components::navigation::Navigation;
use crate::components::stat_card::StatCard;
use crate::components::toast::{show_toast, Toast, ToastHost};

fn publications() -> Vec<Publication> {
    fn paper(title: &str, author: &str, date: &str, status: PubStatus, citations: u32) -> Publication {
        Publication {
            title: title.to_string(),
            author: author.to_string(),
            date: date.to_string(),
            status,
            citations,
        }
    }

    vec![
        paper(
            "Impact of Climate Change on Marine Biodiversity in the Arabian Sea",
            "Dr. Priya Sharma",
            "2024-01-15",
            PubStatus::Published,
            23,
        ),
        paper(
            "Otolith Morphology Analysis of Indian Ocean Fish Species",
            "Dr. Raj Kumar",
            "2024-02-03",
            PubStatus::UnderReview,
            0,
        ),
        paper(
            "Environmental DNA Detection Methods for Marine Species",
            "Dr. Anita Menon",
            "2024-01-28",
            PubStatus::Published,
            15,
        ),
    ]
}

fn status_badge_class(status: PubStatus) -> &'static str {
    match status {
        PubStatus::Published => "badge badge-published",
        PubStatus::UnderReview => "badge badge-review",
    }
}

#[component]
pub fn Research() -> Element {
    let mut publish_open = use_signal(|| false);
    let mut paper_title = use_signal(|| String::new());
    let mut paper_abstract = use_signal(|| String::new());
    let mut paper_keywords = use_signal(|| String::new());
    let toast = use_signal(|| None::<Toast>);

    let research_mix = vec![
        ChartPoint::new("Biodiversity Studies", 45.0),
        ChartPoint::new("Climate Impact", 30.0),
        ChartPoint::new("Fish Behavior", 15.0),
        ChartPoint::new("Ocean Chemistry", 10.0),
    ];

    let sea_temps = vec![
        ChartPoint::new("Jan", 26.5),
        ChartPoint::new("Feb", 27.2),
        ChartPoint::new("Mar", 28.8),
        ChartPoint::new("Apr", 29.5),
        ChartPoint::new("May", 30.1),
        ChartPoint::new("Jun", 29.8),
    ];

    let papers = publications();

    rsx! {
        div { class: "page",
            Navigation {}

            main { class: "container",
                div { class: "page-header split",
                    div {
                        h1 { "Research Dashboard" }
                        p { "Research collaboration platform for marine scientists" }
                    }
                    button { onclick: move |_| publish_open.set(true), "Publish Research" }
                }

                div { class: "grid-wide",
                    HeatMap {
                        title: "Ocean Temperature Distribution",
                        mode: VizMode::Temperature,
                    }
                    DataChart {
                        title: "Research Categories",
                        kind: ChartKind::Pie,
                        points: research_mix,
                    }
                }

                div { class: "stat-grid",
                    StatCard {
                        label: "Active Projects",
                        value: "47",
                        note: "+3 new projects",
                    }
                    StatCard {
                        label: "Publications",
                        value: "156",
                        note: "+12 this month",
                    }
                    StatCard {
                        label: "Collaborations",
                        value: "23",
                        note: "International partners",
                    }
                    StatCard {
                        label: "Data Sets",
                        value: "2,847",
                        note: "TB of research data",
                    }
                }

                div { class: "grid-split",
                    DataChart {
                        title: "Average Sea Temperature",
                        kind: ChartKind::Bar,
                        points: sea_temps,
                    }

                    div { class: "panel",
                        h3 { "Recent Publications" }
                        p { class: "caption", "Latest research papers from Tidewatch scientists" }
                        for paper in &papers {
                            div { class: "list-row",
                                div {
                                    h4 { "{paper.title}" }
                                    p { class: "caption", "{paper.author}" }
                                    p { class: "caption",
                                        if paper.citations > 0 {
                                            "{paper.date} \u{2022} {paper.citations} citations"
                                        } else {
                                            "{paper.date}"
                                        }
                                    }
                                }
                                span { class: "{status_badge_class(paper.status)}",
                                    "{paper.status}"
                                }
                            }
                        }
                    }
                }
            }

            if *publish_open.read() {
                div { class: "dialog-backdrop", onclick: move |_| publish_open.set(false),
                    div {
                        class: "dialog",
                        onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                        h2 { "Publish New Research" }
                        p { class: "caption",
                            "Submit your research paper to the Tidewatch scientific database"
                        }

                        label { "Research Title" }
                        input {
                            r#type: "text",
                            placeholder: "Enter research paper title",
                            value: "{paper_title}",
                            oninput: move |evt: Event<FormData>| {
                                paper_title.set(evt.value().to_string());
                            },
                        }

                        label { "Abstract" }
                        textarea {
                            rows: "4",
                            placeholder: "Enter research abstract",
                            value: "{paper_abstract}",
                            oninput: move |evt: Event<FormData>| {
                                paper_abstract.set(evt.value().to_string());
                            },
                        }

                        label { "Keywords" }
                        input {
                            r#type: "text",
                            placeholder: "marine biology, climate change, biodiversity",
                            value: "{paper_keywords}",
                            oninput: move |evt: Event<FormData>| {
                                paper_keywords.set(evt.value().to_string());
                            },
                        }

                        div { class: "dialog-actions",
                            button {
                                class: "secondary",
                                onclick: move |_| publish_open.set(false),
                                "Cancel"
                            }
                            button {
                                onclick: move |_| {
                                    let title = paper_title.read().clone();
                                    tracing::info!(title = %title, "Research paper submitted");
                                    show_toast(
                                        toast,
                                        "Research Published Successfully",
                                        "Your research paper has been submitted to the Tidewatch database.",
                                    );
                                    paper_title.set(String::new());
                                    paper_abstract.set(String::new());
                                    paper_keywords.set(String::new());
                                    publish_open.set(false);
                                },
                                "Publish Research"
                            }
                        }
                    }
                }
            }

            ToastHost { slot: toast }
        }
    }
}
