//! Records exchanged with the backend.

mod project;
mod user;

pub use project::{Project, ProjectCreate, ProjectStatus, ProjectUpdate};
pub use user::{Role, User, UserCreate, UserUpdate};
