use dioxus::prelude::*;

mod api;
mod components;
mod store;
mod views;

use views::{Dashboard, NotFound, Tasks, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/usuarios")]
    Users {},
    #[route("/tarefas")]
    Tasks {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The store is owned here and reaches every view through context.
    store::provide_store();

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
