pub mod classify;
pub mod config;
pub mod error;
pub mod introspect;
pub mod logging;
pub mod pages;
pub mod render;
pub mod routes;
pub mod schema;
pub mod store;

// Re-export them for easier access from main.rs
pub use classify::*;
pub use config::*;
pub use error::*;
pub use introspect::*;
pub use logging::*;
pub use pages::*;
pub use render::*;
pub use routes::{AppState, configure};
pub use schema::*;
pub use store::*;
