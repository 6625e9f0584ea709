pub mod error;
pub mod model;
pub mod repo;
pub mod service;

pub use error::DomainError;
pub use model::{NewProject, Project};
pub use repo::ProjectsRepository;
pub use service::Service;
