pub mod config;
pub mod controller;
pub mod error;
pub mod rocket;

pub use error::{ConfigError, GameError};
