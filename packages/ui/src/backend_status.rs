//! Backend reachability indicator for the navbar.

use dioxus::prelude::*;

use crate::api_provider::use_api;

/// A small badge reflecting one `GET /health` made on mount.
///
/// - **Checking**: request in flight
/// - **Online**: backend answered `healthy`
/// - **Offline**: anything else
#[component]
pub fn BackendStatus() -> Element {
    let api = use_api();
    let health = use_resource(move || {
        let api = api.clone();
        async move {
            match api.health().await {
                Ok(status) => status.is_healthy(),
                Err(e) => {
                    tracing::warn!("Backend health check failed: {}", e);
                    false
                }
            }
        }
    });

    let status = *health.read();
    match status {
        None => rsx! {
            span {
                class: "backend-status backend-status--checking",
                title: "Checking backend...",
                "Checking"
            }
        },
        Some(true) => rsx! {
            span {
                class: "backend-status backend-status--online",
                title: "Backend reachable",
                "● Online"
            }
        },
        Some(false) => rsx! {
            span {
                class: "backend-status backend-status--offline",
                title: "Backend unreachable",
                "○ Offline"
            }
        },
    }
}
