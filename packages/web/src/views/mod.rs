mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod users;
pub use users::Users;

mod projects;
pub use projects::Projects;
