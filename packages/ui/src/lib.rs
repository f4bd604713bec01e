//! This crate contains all shared UI for the workspace.

mod api_provider;
pub use api_provider::{use_api, ApiProvider};

pub mod format;
pub use format::format_date;

pub mod list;
pub use list::{use_entity_list, EntityList, EntitySource, ListState, ListView, LoadStatus};

mod user_list;
pub use user_list::{UserCard, UserList};

mod project_list;
pub use project_list::{ProjectCard, ProjectList, ProjectQuery};

mod backend_status;
pub use backend_status::BackendStatus;

mod navbar;
pub use navbar::{Footer, Navbar};

#[cfg(test)]
mod test_support;
