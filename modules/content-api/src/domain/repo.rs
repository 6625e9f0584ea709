use async_trait::async_trait;
use uuid::Uuid;

use super::error::DomainError;
use super::model::Project;

#[async_trait]
pub trait ProjectsRepository: Send + Sync {
    /// All projects, newest first.
    async fn list(&self) -> Result<Vec<Project>, DomainError>;

    async fn insert(&self, project: Project) -> Result<(), DomainError>;

    /// Returns `false` when no project has `id`.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
