use dioxus::prelude::*;
use ui::UserList;

#[component]
pub fn Users() -> Element {
    rsx! {
        div { class: "page", UserList {} }
    }
}
