//! One struct per secretariat operation, each borrowing the repository of the
//! current unit of work.

use app_core::{Page, PageRequest, UseCase};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DbErr;
use uuid::Uuid;

use crate::commands::{CreateSecretariatInput, SecretariatOutput, UpdateSecretariatInput};
use crate::error::{SecretariatError, SecretariatResult};
use crate::mapper;
use crate::models::SecretariatSort;
use crate::repository::SecretariatRepository;

pub struct CreateSecretariat<'r> {
    repository: &'r dyn SecretariatRepository,
}

impl<'r> CreateSecretariat<'r> {
    pub fn new(repository: &'r dyn SecretariatRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<'r> UseCase for CreateSecretariat<'r> {
    type Input = CreateSecretariatInput;
    type Output = SecretariatOutput;
    type Error = SecretariatError;

    async fn execute(&self, input: CreateSecretariatInput) -> SecretariatResult<SecretariatOutput> {
        let record = mapper::create_input_to_record(input, Uuid::new_v4(), Utc::now());
        let saved = self.repository.save(record).await?;
        Ok(mapper::record_to_output(saved))
    }
}

pub struct FindSecretariat<'r> {
    repository: &'r dyn SecretariatRepository,
}

impl<'r> FindSecretariat<'r> {
    pub fn new(repository: &'r dyn SecretariatRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<'r> UseCase for FindSecretariat<'r> {
    type Input = Uuid;
    type Output = SecretariatOutput;
    type Error = SecretariatError;

    async fn execute(&self, uuid: Uuid) -> SecretariatResult<SecretariatOutput> {
        let record = self
            .repository
            .find_by_uuid(uuid)
            .await?
            .ok_or(SecretariatError::NotFound(uuid))?;
        Ok(mapper::record_to_output(record))
    }
}

/// Page scan plus total count; the two reads are not isolated from each other.
pub struct ListSecretariats<'r> {
    repository: &'r dyn SecretariatRepository,
}

impl<'r> ListSecretariats<'r> {
    pub fn new(repository: &'r dyn SecretariatRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<'r> UseCase for ListSecretariats<'r> {
    type Input = PageRequest<SecretariatSort>;
    type Output = Page<SecretariatOutput>;
    type Error = SecretariatError;

    async fn execute(
        &self,
        request: PageRequest<SecretariatSort>,
    ) -> SecretariatResult<Page<SecretariatOutput>> {
        let records = self
            .repository
            .find_page(request.offset()?, request.limit(), request.sort)
            .await?;
        let total = self.repository.count().await?;
        Ok(mapper::records_to_page(records, &request, total))
    }
}

pub struct UpdateSecretariat<'r> {
    repository: &'r dyn SecretariatRepository,
}

impl<'r> UpdateSecretariat<'r> {
    pub fn new(repository: &'r dyn SecretariatRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<'r> UseCase for UpdateSecretariat<'r> {
    type Input = UpdateSecretariatInput;
    type Output = SecretariatOutput;
    type Error = SecretariatError;

    async fn execute(&self, input: UpdateSecretariatInput) -> SecretariatResult<SecretariatOutput> {
        let existing = self
            .repository
            .find_by_uuid(input.uuid)
            .await?
            .ok_or(SecretariatError::NotFound(input.uuid))?;

        let record = mapper::update_input_to_record(input, existing, Utc::now());
        let saved = self.repository.save(record).await?;
        Ok(mapper::record_to_output(saved))
    }
}

pub struct DeleteSecretariat<'r> {
    repository: &'r dyn SecretariatRepository,
}

impl<'r> DeleteSecretariat<'r> {
    pub fn new(repository: &'r dyn SecretariatRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<'r> UseCase for DeleteSecretariat<'r> {
    type Input = Uuid;
    type Output = ();
    type Error = SecretariatError;

    async fn execute(&self, uuid: Uuid) -> SecretariatResult<()> {
        let existing = self
            .repository
            .find_by_uuid(uuid)
            .await?
            .ok_or(SecretariatError::NotFound(uuid))?;

        let Some(id) = existing.id else {
            return Err(
                DbErr::Custom(format!("Secretariat {uuid} was loaded without a row id")).into(),
            );
        };
        self.repository.delete(id).await?;
        tracing::info!(secretariat_uuid = %uuid, "Secretariat removed");
        Ok(())
    }
}
