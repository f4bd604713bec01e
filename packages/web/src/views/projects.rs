use dioxus::prelude::*;
use ui::ProjectList;

#[component]
pub fn Projects() -> Element {
    rsx! {
        div { class: "page", ProjectList {} }
    }
}
