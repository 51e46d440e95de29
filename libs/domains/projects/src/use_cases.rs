//! One struct per project operation, each borrowing the repository of the
//! current unit of work.

use app_core::{Page, PageRequest, UseCase};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DbErr;
use uuid::Uuid;

use crate::commands::{
    ChangeProjectStatusInput, CreateProjectInput, ProjectOutput, UpdateProjectInput,
};
use crate::error::{ProjectError, ProjectResult};
use crate::mapper;
use crate::models::{Project, ProjectSort};
use crate::repository::ProjectRepository;

async fn load(repository: &dyn ProjectRepository, uuid: Uuid) -> ProjectResult<Project> {
    repository
        .find_by_uuid(uuid)
        .await?
        .ok_or(ProjectError::NotFound(uuid))
}

pub struct CreateProject<'r> {
    repository: &'r dyn ProjectRepository,
}

impl<'r> CreateProject<'r> {
    pub fn new(repository: &'r dyn ProjectRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<'r> UseCase for CreateProject<'r> {
    type Input = CreateProjectInput;
    type Output = ProjectOutput;
    type Error = ProjectError;

    async fn execute(&self, input: CreateProjectInput) -> ProjectResult<ProjectOutput> {
        let record = mapper::create_input_to_record(input, Uuid::new_v4(), Utc::now());
        let saved = self.repository.save(record).await?;
        Ok(mapper::record_to_output(saved))
    }
}

pub struct FindProject<'r> {
    repository: &'r dyn ProjectRepository,
}

impl<'r> FindProject<'r> {
    pub fn new(repository: &'r dyn ProjectRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<'r> UseCase for FindProject<'r> {
    type Input = Uuid;
    type Output = ProjectOutput;
    type Error = ProjectError;

    async fn execute(&self, uuid: Uuid) -> ProjectResult<ProjectOutput> {
        let record = load(self.repository, uuid).await?;
        Ok(mapper::record_to_output(record))
    }
}

pub struct ListProjects<'r> {
    repository: &'r dyn ProjectRepository,
}

impl<'r> ListProjects<'r> {
    pub fn new(repository: &'r dyn ProjectRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<'r> UseCase for ListProjects<'r> {
    type Input = PageRequest<ProjectSort>;
    type Output = Page<ProjectOutput>;
    type Error = ProjectError;

    async fn execute(&self, request: PageRequest<ProjectSort>) -> ProjectResult<Page<ProjectOutput>> {
        let records = self
            .repository
            .find_page(request.offset()?, request.limit(), request.sort)
            .await?;
        let total = self.repository.count().await?;
        Ok(mapper::records_to_page(records, &request, total))
    }
}

pub struct UpdateProject<'r> {
    repository: &'r dyn ProjectRepository,
}

impl<'r> UpdateProject<'r> {
    pub fn new(repository: &'r dyn ProjectRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<'r> UseCase for UpdateProject<'r> {
    type Input = UpdateProjectInput;
    type Output = ProjectOutput;
    type Error = ProjectError;

    async fn execute(&self, input: UpdateProjectInput) -> ProjectResult<ProjectOutput> {
        let existing = load(self.repository, input.uuid).await?;
        let record = mapper::update_input_to_record(input, existing, Utc::now());
        let saved = self.repository.save(record).await?;
        Ok(mapper::record_to_output(saved))
    }
}

/// Moves a project to any status; no transition is refused.
pub struct ChangeProjectStatus<'r> {
    repository: &'r dyn ProjectRepository,
}

impl<'r> ChangeProjectStatus<'r> {
    pub fn new(repository: &'r dyn ProjectRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<'r> UseCase for ChangeProjectStatus<'r> {
    type Input = ChangeProjectStatusInput;
    type Output = ProjectOutput;
    type Error = ProjectError;

    async fn execute(&self, input: ChangeProjectStatusInput) -> ProjectResult<ProjectOutput> {
        let existing = load(self.repository, input.uuid).await?;
        let previous = existing.status;

        let record = mapper::change_status_to_record(input, existing, Utc::now());
        let saved = self.repository.save(record).await?;

        tracing::info!(
            project_uuid = %saved.uuid,
            from = %previous,
            to = %saved.status,
            "Project status changed"
        );
        Ok(mapper::record_to_output(saved))
    }
}

pub struct DeleteProject<'r> {
    repository: &'r dyn ProjectRepository,
}

impl<'r> DeleteProject<'r> {
    pub fn new(repository: &'r dyn ProjectRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<'r> UseCase for DeleteProject<'r> {
    type Input = Uuid;
    type Output = ();
    type Error = ProjectError;

    async fn execute(&self, uuid: Uuid) -> ProjectResult<()> {
        let existing = load(self.repository, uuid).await?;

        let Some(id) = existing.id else {
            return Err(
                DbErr::Custom(format!("Project {uuid} was loaded without a row id")).into(),
            );
        };
        self.repository.delete(id).await?;
        tracing::info!(project_uuid = %uuid, "Project removed");
        Ok(())
    }
}
