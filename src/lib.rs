pub mod config;
pub mod models;
pub mod services;
pub mod shared;
pub mod templates;

pub use config::*;
pub use models::*;
pub use services::*;
pub use templates::*;
