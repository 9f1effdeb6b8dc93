pub mod app;
pub mod config;

pub use app::{ApiDoc, app, build_router, build_services};
pub use config::AppConfig;
