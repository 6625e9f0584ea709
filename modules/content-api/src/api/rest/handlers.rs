use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use folio_auth::axum_ext::RequireAdmin;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::{NewProject, Project};
use crate::domain::service::Service;

/// `GET /api/projects`
#[tracing::instrument(skip_all)]
pub async fn list_projects(
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<Vec<Project>>, DomainError> {
    Ok(Json(svc.list_projects().await?))
}

/// `POST /api/projects`
#[tracing::instrument(skip_all)]
pub async fn create_project(
    RequireAdmin(admin): RequireAdmin,
    Extension(svc): Extension<Arc<Service>>,
    body: Result<Json<NewProject>, JsonRejection>,
) -> Result<(StatusCode, Json<Project>), DomainError> {
    let Json(body) = body.map_err(|e| DomainError::validation("body", e.body_text()))?;
    let created = svc.create_project(&admin, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `DELETE /api/projects/{id}`
#[tracing::instrument(skip_all)]
pub async fn delete_project(
    RequireAdmin(admin): RequireAdmin,
    Extension(svc): Extension<Arc<Service>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, DomainError> {
    let Path(id) = id.map_err(|e| DomainError::validation("id", e.body_text()))?;
    svc.delete_project(&admin, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
