use dioxus::prelude::*;

use crate::BackendStatus;

const SHELL_CSS: Asset = asset!("/assets/shell.css");

/// Top navigation bar. `brand` is the logo link, `children` the menu items.
#[component]
pub fn Navbar(brand: Element, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: SHELL_CSS }
        nav {
            class: "navbar",
            div {
                class: "nav-container",
                {brand}
                ul { class: "nav-menu", {children} }
                BackendStatus {}
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            p { "© 2025 Hackathon Project. Built with Dioxus + Rust" }
        }
    }
}
