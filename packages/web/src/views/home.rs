//! Landing page.

use dioxus::prelude::*;

use crate::Route;

const FEATURES: [(&str, &str); 3] = [
    (
        "⚡ Fast Backend",
        "A JSON REST API serving users and projects under /api/v1",
    ),
    (
        "🦀 Rust Frontend",
        "Dioxus components compiled to WebAssembly with typed API models",
    ),
    (
        "🗄️ PostgreSQL Ready",
        "Records are persisted by the backend; the client only reads snapshots",
    ),
];

const STEPS: [&str; 3] = [
    "Start the backend so it listens on http://localhost:8000",
    "Set API_URL at build time to point at another backend",
    "Serve the client: dx serve --package web --features web",
];

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-page",

            div {
                class: "hero",
                h1 { "🚀 Hackathon Project" }
                p { class: "tagline", "A fullstack application template with a Rust web client" }
            }

            div {
                class: "features",
                for (title, text) in FEATURES {
                    div {
                        key: "{title}",
                        class: "feature-card",
                        h2 { "{title}" }
                        p { "{text}" }
                    }
                }
            }

            div {
                class: "cta-section",
                h2 { "Explore the Data" }
                div {
                    class: "button-group",
                    Link { to: Route::Users {}, class: "btn btn-primary", "View Users" }
                    Link { to: Route::Projects {}, class: "btn btn-secondary", "View Projects" }
                }
            }

            div {
                class: "info-section",
                h3 { "Getting Started" }
                ol {
                    for step in STEPS {
                        li { key: "{step}", "{step}" }
                    }
                }
            }
        }
    }
}
