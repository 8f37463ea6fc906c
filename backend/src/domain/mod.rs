//! Domain entities, ports, and services.
//!
//! Everything here is transport agnostic: HTTP concerns live in
//! [`crate::inbound::http`], storage concerns behind the traits in
//! [`ports`].

pub mod error;
pub mod ports;
pub mod prompt;
pub mod rating;
pub mod search;
pub mod teacher;
pub mod teacher_service;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::teacher_service::{TeacherCommandService, TeacherQueryService};
