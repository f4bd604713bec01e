use dioxus::prelude::*;

use ui::ApiProvider;
use views::{Home, Projects, Shell, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/users")]
        Users {},
        #[route("/projects")]
        Projects {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("Failed to initialize logger");
    tracing::info!("Starting web client");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ApiProvider {
            Router::<Route> {}
        }
    }
}
