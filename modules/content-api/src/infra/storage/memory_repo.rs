use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::Project;
use crate::domain::repo::ProjectsRepository;

/// Process-local project store.
pub struct InMemoryProjectsRepository {
    projects: DashMap<Uuid, Project>,
}

impl InMemoryProjectsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            projects: DashMap::new(),
        }
    }
}

impl Default for InMemoryProjectsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectsRepository for InMemoryProjectsRepository {
    async fn list(&self) -> Result<Vec<Project>, DomainError> {
        let mut all: Vec<Project> = self.projects.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn insert(&self, project: Project) -> Result<(), DomainError> {
        if self.projects.contains_key(&project.id) {
            return Err(DomainError::Internal(format!(
                "duplicate project id {}",
                project.id
            )));
        }
        self.projects.insert(project.id, project);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.projects.remove(&id).is_some())
    }
}
