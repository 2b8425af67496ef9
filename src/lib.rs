pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;


pub use config::{Config, ConfigError};
pub use error::{AppError, Result};
pub use routes::build_router;
