//! Domain ports: driven storage traits and driving use-case traits.

mod macros;
mod teacher_directory;
mod teacher_repository;
mod user_repository;

pub use teacher_directory::{TeacherCommand, TeacherQuery};
pub use teacher_repository::{TeacherRepository, TeacherRepositoryError};
pub use user_repository::{UserRepository, UserRepositoryError};

#[cfg(test)]
pub use teacher_directory::{MockTeacherCommand, MockTeacherQuery};
#[cfg(test)]
pub use teacher_repository::MockTeacherRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
