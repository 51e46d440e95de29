use app_core::{Page, PageParams, PageRequest, UseCase};
use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AccountableResult;
use crate::mapper;
use crate::models::{AccountableRequest, AccountableResponse, AccountableSort};
use crate::repository::AccountableUnitOfWork;
use crate::use_cases::{
    CreateAccountable, DeleteAccountable, FindAccountable, ListAccountables, UpdateAccountable,
};

#[async_trait]
pub trait AccountablePort: Send + Sync {
    async fn create(&self, request: AccountableRequest) -> AccountableResult<AccountableResponse>;

    async fn find(&self, uuid: Uuid) -> AccountableResult<AccountableResponse>;

    async fn list(&self, params: PageParams) -> AccountableResult<Page<AccountableResponse>>;

    async fn update(
        &self,
        uuid: Uuid,
        request: AccountableRequest,
    ) -> AccountableResult<AccountableResponse>;

    async fn delete(&self, uuid: Uuid) -> AccountableResult<()>;
}

pub struct AccountableService<U> {
    uow: U,
}

impl<U: AccountableUnitOfWork> AccountableService<U> {
    pub fn new(uow: U) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: AccountableUnitOfWork> AccountablePort for AccountableService<U> {
    async fn create(&self, request: AccountableRequest) -> AccountableResult<AccountableResponse> {
        let input = mapper::request_to_create_input(request);
        let output = self
            .uow
            .transactional("accountable.create", move |repo| {
                Box::pin(async move { CreateAccountable::new(repo).execute(input).await })
            })
            .await?;
        Ok(mapper::output_to_response(output))
    }

    async fn find(&self, uuid: Uuid) -> AccountableResult<AccountableResponse> {
        let output = self
            .uow
            .read(move |repo| Box::pin(async move { FindAccountable::new(repo).execute(uuid).await }))
            .await?;
        Ok(mapper::output_to_response(output))
    }

    async fn list(&self, params: PageParams) -> AccountableResult<Page<AccountableResponse>> {
        let request = PageRequest::from_params(params, AccountableSort::Name)?;
        let page = self
            .uow
            .read(move |repo| {
                Box::pin(async move { ListAccountables::new(repo).execute(request).await })
            })
            .await?;
        Ok(mapper::page_to_response(page))
    }

    async fn update(
        &self,
        uuid: Uuid,
        request: AccountableRequest,
    ) -> AccountableResult<AccountableResponse> {
        let input = mapper::request_to_update_input(uuid, request);
        let output = self
            .uow
            .transactional("accountable.update", move |repo| {
                Box::pin(async move { UpdateAccountable::new(repo).execute(input).await })
            })
            .await?;
        Ok(mapper::output_to_response(output))
    }

    async fn delete(&self, uuid: Uuid) -> AccountableResult<()> {
        self.uow
            .transactional("accountable.delete", move |repo| {
                Box::pin(async move { DeleteAccountable::new(repo).execute(uuid).await })
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AccountableError;
    use crate::repository::InMemoryAccountableRepository;

    fn request(email: &str) -> AccountableRequest {
        AccountableRequest {
            name: "Ana".to_string(),
            email: email.to_string(),
            role: "Dev".to_string(),
            secretariat_id: None,
        }
    }

    #[tokio::test]
    async fn test_second_email_differing_by_case_conflicts() {
        let service = AccountableService::new(InMemoryAccountableRepository::new());

        service.create(request("ana@example.com")).await.unwrap();
        let result = service.create(request("ANA@Example.com")).await;

        assert!(matches!(
            result,
            Err(AccountableError::EmailAlreadyRegistered(_))
        ));
        let page = service.list(PageParams::default()).await.unwrap();
        assert_eq!(page.total_elements, 1);
    }

    #[tokio::test]
    async fn test_find_returns_request_fields() {
        let service = AccountableService::new(InMemoryAccountableRepository::new());
        let secretariat = Uuid::new_v4();

        let created = service
            .create(AccountableRequest {
                secretariat_id: Some(secretariat),
                ..request("ana@example.com")
            })
            .await
            .unwrap();
        let found = service.find(created.uuid).await.unwrap();

        assert_eq!(found.name, "Ana");
        assert_eq!(found.email, "ana@example.com");
        assert_eq!(found.role, "Dev");
        assert_eq!(found.secretariat_id, Some(secretariat));
    }
}
