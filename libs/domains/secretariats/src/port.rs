use app_core::{Page, PageParams, PageRequest, UseCase};
use async_trait::async_trait;
use uuid::Uuid;

use crate::error::SecretariatResult;
use crate::mapper;
use crate::models::{SecretariatRequest, SecretariatResponse, SecretariatSort};
use crate::repository::SecretariatUnitOfWork;
use crate::use_cases::{
    CreateSecretariat, DeleteSecretariat, FindSecretariat, ListSecretariats, UpdateSecretariat,
};

/// Everything the HTTP layer can ask of the secretariat domain.
#[async_trait]
pub trait SecretariatPort: Send + Sync {
    async fn create(&self, request: SecretariatRequest) -> SecretariatResult<SecretariatResponse>;

    async fn find(&self, uuid: Uuid) -> SecretariatResult<SecretariatResponse>;

    async fn list(&self, params: PageParams) -> SecretariatResult<Page<SecretariatResponse>>;

    async fn update(
        &self,
        uuid: Uuid,
        request: SecretariatRequest,
    ) -> SecretariatResult<SecretariatResponse>;

    async fn delete(&self, uuid: Uuid) -> SecretariatResult<()>;
}

/// Port implementation that runs each use case in a unit of work.
///
/// Reads go through `read`; every mutation goes through `transactional`.
pub struct SecretariatService<U> {
    uow: U,
}

impl<U: SecretariatUnitOfWork> SecretariatService<U> {
    pub fn new(uow: U) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: SecretariatUnitOfWork> SecretariatPort for SecretariatService<U> {
    async fn create(&self, request: SecretariatRequest) -> SecretariatResult<SecretariatResponse> {
        let input = mapper::request_to_create_input(request);
        let output = self
            .uow
            .transactional("secretariat.create", move |repo| {
                Box::pin(async move { CreateSecretariat::new(repo).execute(input).await })
            })
            .await?;
        Ok(mapper::output_to_response(output))
    }

    async fn find(&self, uuid: Uuid) -> SecretariatResult<SecretariatResponse> {
        let output = self
            .uow
            .read(move |repo| Box::pin(async move { FindSecretariat::new(repo).execute(uuid).await }))
            .await?;
        Ok(mapper::output_to_response(output))
    }

    async fn list(&self, params: PageParams) -> SecretariatResult<Page<SecretariatResponse>> {
        let request = PageRequest::from_params(params, SecretariatSort::Name)?;
        let page = self
            .uow
            .read(move |repo| {
                Box::pin(async move { ListSecretariats::new(repo).execute(request).await })
            })
            .await?;
        Ok(mapper::page_to_response(page))
    }

    async fn update(
        &self,
        uuid: Uuid,
        request: SecretariatRequest,
    ) -> SecretariatResult<SecretariatResponse> {
        let input = mapper::request_to_update_input(uuid, request);
        let output = self
            .uow
            .transactional("secretariat.update", move |repo| {
                Box::pin(async move { UpdateSecretariat::new(repo).execute(input).await })
            })
            .await?;
        Ok(mapper::output_to_response(output))
    }

    async fn delete(&self, uuid: Uuid) -> SecretariatResult<()> {
        self.uow
            .transactional("secretariat.delete", move |repo| {
                Box::pin(async move { DeleteSecretariat::new(repo).execute(uuid).await })
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SecretariatError;
    use crate::repository::InMemorySecretariatRepository;
    use app_core::PagingError;

    fn request(name: &str) -> SecretariatRequest {
        SecretariatRequest {
            name: name.to_string(),
            description: Some("Budget".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let service = SecretariatService::new(InMemorySecretariatRepository::new());

        let created = service.create(request("Finance")).await.unwrap();
        let found = service.find(created.uuid).await.unwrap();

        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_sort() {
        let service = SecretariatService::new(InMemorySecretariatRepository::new());

        let result = service
            .list(PageParams {
                sort: Some("colour".to_string()),
                ..PageParams::default()
            })
            .await;

        assert!(matches!(
            result,
            Err(SecretariatError::Paging(PagingError::UnknownSortProperty(_)))
        ));
    }

    #[tokio::test]
    async fn test_list_pages_cover_every_record_once() {
        let service = SecretariatService::new(InMemorySecretariatRepository::new());
        for i in 0..7 {
            service.create(request(&format!("S{:02}", i))).await.unwrap();
        }

        let mut seen = Vec::new();
        let mut page_index = 0;
        loop {
            let page = service
                .list(PageParams {
                    page: page_index,
                    size: 3,
                    sort: Some("name,desc".to_string()),
                })
                .await
                .unwrap();
            assert_eq!(page.total_pages, 3);
            if page.content.is_empty() {
                break;
            }
            seen.extend(page.content.into_iter().map(|s| s.name));
            page_index += 1;
        }

        let expected: Vec<String> = (0..7).rev().map(|i| format!("S{:02}", i)).collect();
        assert_eq!(seen, expected);
        assert_eq!(page_index, 3);
    }

    #[tokio::test]
    async fn test_delete_then_find_is_not_found() {
        let service = SecretariatService::new(InMemorySecretariatRepository::new());
        let created = service.create(request("Finance")).await.unwrap();

        service.delete(created.uuid).await.unwrap();

        assert!(matches!(
            service.find(created.uuid).await,
            Err(SecretariatError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(created.uuid).await,
            Err(SecretariatError::NotFound(_))
        ));
    }
}
