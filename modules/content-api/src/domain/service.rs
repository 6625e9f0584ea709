use std::sync::Arc;

use chrono::Utc;
use folio_security::AuthenticatedUser;
use uuid::Uuid;

use super::error::DomainError;
use super::model::{NewProject, Project};
use super::repo::ProjectsRepository;
use crate::config::ContentApiConfig;

pub struct Service {
    repo: Arc<dyn ProjectsRepository>,
    max_title_length: usize,
}

impl Service {
    #[must_use]
    pub fn new(cfg: &ContentApiConfig, repo: Arc<dyn ProjectsRepository>) -> Self {
        Self {
            repo,
            max_title_length: cfg.max_title_length,
        }
    }

    /// # Errors
    ///
    /// Repository failures.
    pub async fn list_projects(&self) -> Result<Vec<Project>, DomainError> {
        self.repo.list().await
    }

    /// Validate and store a new project on behalf of `admin`.
    ///
    /// # Errors
    ///
    /// - [`DomainError::Validation`] for an empty or overlong title
    /// - repository failures
    pub async fn create_project(
        &self,
        admin: &AuthenticatedUser,
        input: NewProject,
    ) -> Result<Project, DomainError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(DomainError::validation("title", "must not be empty"));
        }
        if title.chars().count() > self.max_title_length {
            return Err(DomainError::validation(
                "title",
                format!("must be at most {} characters", self.max_title_length),
            ));
        }

        let project = Project {
            id: Uuid::new_v4(),
            title: title.to_owned(),
            summary: input.summary.trim().to_owned(),
            url: input.url.filter(|u| !u.trim().is_empty()),
            created_by: admin.subject().to_owned(),
            created_at: Utc::now(),
        };
        self.repo.insert(project.clone()).await?;
        tracing::info!(project_id = %project.id, admin = %admin.subject(), "project created");
        Ok(project)
    }

    /// # Errors
    ///
    /// - [`DomainError::NotFound`] when no project has `id`
    /// - repository failures
    pub async fn delete_project(
        &self,
        admin: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::NotFound);
        }
        tracing::info!(project_id = %id, admin = %admin.subject(), "project deleted");
        Ok(())
    }
}
