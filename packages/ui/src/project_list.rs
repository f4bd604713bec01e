//! Projects grid.

use api::{ApiError, Project, ProjectApi};
use dioxus::prelude::*;

use crate::api_provider::use_api;
use crate::format::format_date;
use crate::list::{empty_message, loading_message, use_entity_list, EntitySource, ListView};

const LISTS_CSS: Asset = asset!("/assets/lists.css");

pub const NO_DESCRIPTION: &str = "No description provided";

/// Project listing, optionally narrowed to one owner.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectQuery {
    api: ProjectApi,
    owner_id: Option<i64>,
}

impl ProjectQuery {
    pub fn new(api: ProjectApi, owner_id: Option<i64>) -> Self {
        Self { api, owner_id }
    }
}

impl EntitySource for ProjectQuery {
    type Item = Project;
    const NOUN: &'static str = "projects";

    async fn fetch_all(&self) -> Result<Vec<Project>, ApiError> {
        self.api.get_all(self.owner_id).await
    }
}

/// Display fields of one project card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub id: i64,
    pub name: String,
    pub status: &'static str,
    pub description: String,
    pub owner: String,
    pub updated: String,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        let description = project
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DESCRIPTION);
        Self {
            id: project.id,
            name: project.name.clone(),
            status: project.status.label(),
            description: description.to_string(),
            owner: format!("Owner ID: {}", project.owner_id),
            updated: format!("Updated: {}", format_date(&project.updated_at)),
        }
    }
}

#[component]
fn ProjectCardItem(card: ProjectCard) -> Element {
    rsx! {
        div {
            class: "card",
            div {
                class: "card-header",
                h3 { "{card.name}" }
                span { class: "badge {card.status}", "{card.status}" }
            }
            div {
                class: "card-body",
                p { class: "description", "{card.description}" }
                p {
                    class: "meta",
                    span { "{card.owner}" }
                    span { class: "date", "{card.updated}" }
                }
            }
        }
    }
}

/// Fetches projects on mount, and again when `owner_id` changes, and renders them as cards.
#[component]
pub fn ProjectList(
    /// Only list projects owned by this user.
    #[props(default)]
    owner_id: Option<i64>,
) -> Element {
    let api = use_api();
    let list = use_entity_list(ProjectQuery::new(api.projects(), owner_id));
    let state = list.state();
    let state = state.read();
    let noun = ProjectQuery::NOUN;

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
                class: "project-list",
                h2 { "Projects" }
                div {
                    class: "list-container",
                    p { "{empty}" }
                }
            }
        },
        ListView::Items(projects) => rsx! {
            div {
                class: "project-list",
                h2 { "Projects" }
                div {
                    class: "list-container",
                    div {
                        class: "grid",
                        for project in projects {
                            ProjectCardItem { key: "{project.id}", card: ProjectCard::from(project) }
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

#[cfg(test)]
mod tests {
    use super::*;
    use api::ProjectStatus;

    fn project(description: Option<&str>, updated_at: &str) -> Project {
        Project {
            id: 4,
            name: "Web Dashboard".into(),
            description: description.map(str::to_string),
            status: ProjectStatus::Completed,
            owner_id: 2,
            owner_name: None,
            created_at: "2025-01-01T00:00:00".into(),
            updated_at: updated_at.into(),
        }
    }

    #[test]
    fn test_project_card_fields() {
        let card = ProjectCard::from(&project(
            Some("Interactive dashboard"),
            "2025-03-09T18:45:10.5",
        ));
        assert_eq!(card.name, "Web Dashboard");
        assert_eq!(card.status, "completed");
        assert_eq!(card.description, "Interactive dashboard");
        assert_eq!(card.owner, "Owner ID: 2");
        assert_eq!(card.updated, "Updated: 3/9/2025");
    }

    #[test]
    fn test_missing_description_uses_placeholder() {
        assert_eq!(
            ProjectCard::from(&project(None, "")).description,
            NO_DESCRIPTION
        );
        assert_eq!(
            ProjectCard::from(&project(Some(""), "")).description,
            NO_DESCRIPTION
        );
    }

    #[test]
    fn test_malformed_update_date() {
        let card = ProjectCard::from(&project(None, "2025-99-99"));
        assert_eq!(card.updated, "Updated: Unknown date");
    }

    #[test]
    fn test_empty_listing_message() {
        assert_eq!(empty_message(ProjectQuery::NOUN), "No projects found.");
    }

    mod rendered {
        use super::*;
        use crate::test_support::{count, project_json, render_until, Backend, Reply};
        use crate::ApiProvider;
        use serde_json::json;
        use std::time::Duration;

        #[derive(Props, Clone, PartialEq)]
        struct Mounted {
            base_url: String,
        }

        fn all_projects(props: Mounted) -> Element {
            rsx! {
                ApiProvider { base_url: props.base_url, ProjectList {} }
            }
        }

        fn owner_switch(props: Mounted) -> Element {
            rsx! {
                ApiProvider { base_url: props.base_url, OwnerSwitch {} }
            }
        }

        /// Shows owner 1's projects, then owner 2's.
        #[component]
        fn OwnerSwitch() -> Element {
            let mut owner = use_signal(|| Some(1_i64));
            use_future(move || async move {
                tokio::time::sleep(Duration::from_millis(200)).await;
                owner.set(Some(2));
            });
            rsx! {
                ProjectList { owner_id: owner() }
            }
        }

        fn mount(root: fn(Mounted) -> Element, backend: &Backend) -> VirtualDom {
            let mut dom = VirtualDom::new_with_props(
                root,
                Mounted {
                    base_url: backend.base_url.clone(),
                },
            );
            dom.rebuild_in_place();
            dom
        }

        #[tokio::test]
        async fn test_empty_listing_renders_message_without_cards() {
            let backend = Backend::serve(Reply::Json(json!([])), Reply::Json(json!([]))).await;
            let mut dom = mount(all_projects, &backend);

            let html = render_until(&mut dom, |html| !html.contains("Loading projects...")).await;
            assert!(html.contains("No projects found."), "{html}");
            assert_eq!(count(&html, r#"class="card""#), 0);
            assert_eq!(backend.project_queries(), vec![None]);
        }

        #[tokio::test]
        async fn test_cards_follow_listing() {
            let projects = json!([project_json(1, 7), project_json(2, 7)]);
            let backend = Backend::serve(Reply::Json(json!([])), Reply::Json(projects)).await;
            let mut dom = mount(all_projects, &backend);

            let html = render_until(&mut dom, |html| html.contains(r#"class="grid""#)).await;
            assert_eq!(count(&html, r#"class="card""#), 2);
            assert_eq!(count(&html, NO_DESCRIPTION), 2);
            assert_eq!(count(&html, "Owner ID: 7"), 2);
        }

        #[tokio::test]
        async fn test_owner_change_refetches() {
            let backend = Backend::serve(Reply::Json(json!([])), Reply::PerOwner).await;
            let mut dom = mount(owner_switch, &backend);

            let html = render_until(&mut dom, |html| html.contains("Owner ID: 2")).await;
            assert!(html.contains("Project 20"), "{html}");
            assert!(!html.contains("Owner ID: 1"));
            assert_eq!(
                backend.project_queries(),
                vec![Some("owner_id=1".to_string()), Some("owner_id=2".to_string())]
            );
        }
    }
}
