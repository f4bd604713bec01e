//! Persistent frame around every page.

use dioxus::prelude::*;
use ui::{Footer, Navbar};

use crate::Route;

#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            class: "app",

            Navbar {
                brand: rsx! {
                    Link { to: Route::Home {}, class: "nav-logo", "Hackathon" }
                },
                li { class: "nav-item",
                    Link { to: Route::Home {}, class: "nav-link", "Home" }
                }
                li { class: "nav-item",
                    Link { to: Route::Users {}, class: "nav-link", "Users" }
                }
                li { class: "nav-item",
                    Link { to: Route::Projects {}, class: "nav-link", "Projects" }
                }
            }

            main {
                class: "main-content",
                Outlet::<Route> {}
            }

            Footer {}
        }
    }
}
