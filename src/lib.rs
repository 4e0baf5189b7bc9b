pub mod config;
pub mod error;
pub mod observability;
pub mod routes;
pub mod server;
pub mod submit;

pub use config::Config;
pub use routes::{AppState, router};
