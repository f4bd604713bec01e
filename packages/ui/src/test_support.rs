//! In-process backend and VirtualDom driver for component tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use dioxus::prelude::*;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// What the fake backend answers on one endpoint.
#[derive(Clone, Debug)]
pub(crate) enum Reply {
    Json(Value),
    Status(u16),
    /// One project owned by the `owner_id` query parameter.
    PerOwner,
}

struct Plan {
    users: Reply,
    projects: Reply,
    project_queries: Mutex<Vec<Option<String>>>,
}

pub(crate) struct Backend {
    pub base_url: String,
    plan: Arc<Plan>,
    server: JoinHandle<()>,
}

impl Backend {
    pub async fn serve(users: Reply, projects: Reply) -> Self {
        let plan = Arc::new(Plan {
            users,
            projects,
            project_queries: Mutex::default(),
        });
        let router = Router::new()
            .route("/api/v1/users", get(list_users))
            .route("/api/v1/projects", get(list_projects))
            .with_state(plan.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            plan,
            server,
        }
    }

    /// Query strings of every `GET /api/v1/projects`, in arrival order.
    pub fn project_queries(&self) -> Vec<Option<String>> {
        self.plan.project_queries.lock().unwrap().clone()
    }
}

impl Drop for Backend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn list_users(State(plan): State<Arc<Plan>>) -> Response {
    respond(&plan.users, None)
}

async fn list_projects(State(plan): State<Arc<Plan>>, RawQuery(query): RawQuery) -> Response {
    plan.project_queries.lock().unwrap().push(query.clone());
    respond(&plan.projects, query.as_deref())
}

fn respond(reply: &Reply, query: Option<&str>) -> Response {
    match reply {
        Reply::Json(body) => Json(body.clone()).into_response(),
        Reply::Status(code) => (StatusCode::from_u16(*code).unwrap(), "boom").into_response(),
        Reply::PerOwner => {
            let owner_id = query
                .and_then(|q| q.strip_prefix("owner_id="))
                .and_then(|id| id.parse::<i64>().ok())
                .unwrap_or(0);
            Json(json!([project_json(owner_id * 10, owner_id)])).into_response()
        }
    }
}

pub(crate) fn user_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "email": format!("user{id}@example.com"),
        "name": name,
        "role": "researcher",
        "is_active": true,
        "created_at": "2025-01-15T10:30:00"
    })
}

pub(crate) fn project_json(id: i64, owner_id: i64) -> Value {
    json!({
        "id": id,
        "name": format!("Project {id}"),
        "description": null,
        "status": "active",
        "owner_id": owner_id,
        "created_at": "2025-01-15T10:30:00",
        "updated_at": "2025-02-01T08:00:00"
    })
}

/// Drive `dom` until its server-rendered HTML satisfies `done`, or give up after a few seconds.
pub(crate) async fn render_until(dom: &mut VirtualDom, done: impl Fn(&str) -> bool) -> String {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let html = dioxus_ssr::render(dom);
        if done(&html) || Instant::now() >= deadline {
            return html;
        }
        let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        dom.render_immediate_to_vec();
    }
}

pub(crate) fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}
