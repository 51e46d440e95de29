use app_core::{Page, PageParams, PageRequest, UseCase};
use async_trait::async_trait;
use uuid::Uuid;

use crate::commands::ChangeProjectStatusInput;
use crate::error::ProjectResult;
use crate::mapper;
use crate::models::{ProjectRequest, ProjectResponse, ProjectSort, ProjectStatus};
use crate::repository::ProjectUnitOfWork;
use crate::use_cases::{
    ChangeProjectStatus, CreateProject, DeleteProject, FindProject, ListProjects, UpdateProject,
};

/// Inbound operations on projects, as seen by the HTTP layer
#[async_trait]
pub trait ProjectPort: Send + Sync {
    async fn create(&self, request: ProjectRequest) -> ProjectResult<ProjectResponse>;

    async fn find(&self, uuid: Uuid) -> ProjectResult<ProjectResponse>;

    async fn list(&self, params: PageParams) -> ProjectResult<Page<ProjectResponse>>;

    async fn update(&self, uuid: Uuid, request: ProjectRequest) -> ProjectResult<ProjectResponse>;

    async fn change_status(
        &self,
        uuid: Uuid,
        status: ProjectStatus,
    ) -> ProjectResult<ProjectResponse>;

    async fn delete(&self, uuid: Uuid) -> ProjectResult<()>;
}

pub struct ProjectService<U> {
    uow: U,
}

impl<U: ProjectUnitOfWork> ProjectService<U> {
    pub fn new(uow: U) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: ProjectUnitOfWork> ProjectPort for ProjectService<U> {
    async fn create(&self, request: ProjectRequest) -> ProjectResult<ProjectResponse> {
        let input = mapper::request_to_create_input(request);
        let output = self
            .uow
            .transactional("project.create", move |repo| {
                Box::pin(async move { CreateProject::new(repo).execute(input).await })
            })
            .await?;
        Ok(mapper::output_to_response(output))
    }

    async fn find(&self, uuid: Uuid) -> ProjectResult<ProjectResponse> {
        let output = self
            .uow
            .read(move |repo| Box::pin(async move { FindProject::new(repo).execute(uuid).await }))
            .await?;
        Ok(mapper::output_to_response(output))
    }

    async fn list(&self, params: PageParams) -> ProjectResult<Page<ProjectResponse>> {
        let request = PageRequest::from_params(params, ProjectSort::Name)?;
        let page = self
            .uow
            .read(move |repo| Box::pin(async move { ListProjects::new(repo).execute(request).await }))
            .await?;
        Ok(mapper::page_to_response(page))
    }

    async fn update(&self, uuid: Uuid, request: ProjectRequest) -> ProjectResult<ProjectResponse> {
        let input = mapper::request_to_update_input(uuid, request);
        let output = self
            .uow
            .transactional("project.update", move |repo| {
                Box::pin(async move { UpdateProject::new(repo).execute(input).await })
            })
            .await?;
        Ok(mapper::output_to_response(output))
    }

    async fn change_status(
        &self,
        uuid: Uuid,
        status: ProjectStatus,
    ) -> ProjectResult<ProjectResponse> {
        let input = ChangeProjectStatusInput { uuid, status };
        let output = self
            .uow
            .transactional("project.change_status", move |repo| {
                Box::pin(async move { ChangeProjectStatus::new(repo).execute(input).await })
            })
            .await?;
        Ok(mapper::output_to_response(output))
    }

    async fn delete(&self, uuid: Uuid) -> ProjectResult<()> {
        self.uow
            .transactional("project.delete", move |repo| {
                Box::pin(async move { DeleteProject::new(repo).execute(uuid).await })
            })
            .await
    }
}
