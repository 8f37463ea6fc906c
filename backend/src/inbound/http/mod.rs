//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod state;
pub mod styles;
pub mod teachers;
pub mod validation;

pub use error::{ApiResult, json_config};
