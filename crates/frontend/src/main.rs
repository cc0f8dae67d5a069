mod components;
mod pages;
mod selection;

use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/fisheries")]
    Fisheries {},
    #[route("/research")]
    Research {},
    #[route("/ocean-map")]
    OceanMap {},
    #[route("/sos")]
    Sos {},
}

#[component]
fn Home() -> Element {
    rsx! {
        pages::home::Home {}
    }
}

#[component]
fn Fisheries() -> Element {
    rsx! {
        pages::fisheries::Fisheries {}
    }
}

#[component]
fn Research() -> Element {
    rsx! {
        pages::research::Research {}
    }
}

#[component]
fn OceanMap() -> Element {
    rsx! {
        pages::ocean_map::OceanMap {}
    }
}

#[component]
fn Sos() -> Element {
    rsx! {
        pages::sos::Sos {}
    }
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    launch(App);
}
