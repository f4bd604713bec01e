//! Users grid.

use api::{User, UserApi};
use dioxus::prelude::*;

use crate::api_provider::use_api;
use crate::format::format_date;
use crate::list::{empty_message, loading_message, use_entity_list, EntitySource, ListView};

const LISTS_CSS: Asset = asset!("/assets/lists.css");

impl EntitySource for UserApi {
    type Item = User;
    const NOUN: &'static str = "users";

    async fn fetch_all(&self) -> Result<Vec<User>, api::ApiError> {
        self.get_all().await
    }
}

/// Display fields of one user card.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCard {
    pub id: i64,
    pub name: String,
    /// Badge text and CSS modifier.
    pub role: &'static str,
    pub email: String,
    pub status_class: &'static str,
    pub status_label: &'static str,
    pub joined: String,
}

impl From<&User> for UserCard {
    fn from(user: &User) -> Self {
        let (status_class, status_label) = if user.is_active {
            ("active", "● Active")
        } else {
            ("inactive", "○ Inactive")
        };
        Self {
            id: user.id,
            name: user.name.clone(),
            role: user.role.label(),
            email: user.email.clone(),
            status_class,
            status_label,
            joined: format!("Joined: {}", format_date(&user.created_at)),
        }
    }
}

#[component]
fn UserCardItem(card: UserCard) -> Element {
    rsx! {
        div {
            class: "card",
            div {
                class: "card-header",
                h3 { "{card.name}" }
                span { class: "badge {card.role}", "{card.role}" }
            }
            div {
                class: "card-body",
                p { class: "email", "{card.email}" }
                p {
                    class: "meta",
                    span { class: "status {card.status_class}", "{card.status_label}" }
                    span { class: "date", "{card.joined}" }
                }
            }
        }
    }
}

/// Fetches every user on mount and renders them as cards.
#[component]
pub fn UserList() -> Element {
    let api = use_api();
    let list = use_entity_list(api.users());
    let state = list.state();
    let state = state.read();
    let noun = <UserApi as EntitySource>::NOUN;

    let loading = loading_message(noun);
    let empty = empty_message(noun);

    let body = match state.view() {
        ListView::Loading => rsx! {
            div {
                class: "loading",
                div { class: "spinner" }
                p { "{loading}" }
            }
        },
        ListView::Failed(message) => rsx! {
            div {
                class: "error",
                p { "{message}" }
                button { onclick: move |_| list.retry(), "Retry" }
            }
        },
        ListView::Empty => rsx! {
            div {
                class: "user-list",
                h2 { "Users" }
                div {
                    class: "list-container",
                    p { "{empty}" }
                }
            }
        },
        ListView::Items(users) => rsx! {
            div {
                class: "user-list",
                h2 { "Users" }
                div {
                    class: "list-container",
                    div {
                        class: "grid",
                        for user in users {
                            UserCardItem { key: "{user.id}", card: UserCard::from(user) }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        document::Stylesheet { href: LISTS_CSS }
        {body}
    }
}
