pub mod cli;
pub mod config;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;
pub mod upstream;

pub use config::Config;
pub use routes::{AppState, router};
