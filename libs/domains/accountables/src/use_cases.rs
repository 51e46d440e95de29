use app_core::{Page, PageRequest, UseCase};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DbErr;
use uuid::Uuid;

use crate::commands::{AccountableOutput, CreateAccountableInput, UpdateAccountableInput};
use crate::error::{AccountableError, AccountableResult};
use crate::mapper;
use crate::models::AccountableSort;
use crate::repository::AccountableRepository;

/// Registers a new accountable.
///
/// The e-mail pre-check only short-circuits the common case; two concurrent
/// creates can both pass it, and then the `lower(email)` unique index rejects
/// the second insert, which is reported as the same conflict.
pub struct CreateAccountable<'r> {
    repository: &'r dyn AccountableRepository,
}

impl<'r> CreateAccountable<'r> {
    pub fn new(repository: &'r dyn AccountableRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<'r> UseCase for CreateAccountable<'r> {
    type Input = CreateAccountableInput;
    type Output = AccountableOutput;
    type Error = AccountableError;

    async fn execute(&self, input: CreateAccountableInput) -> AccountableResult<AccountableOutput> {
        if self
            .repository
            .exists_by_email_ignore_case(&input.email)
            .await?
        {
            tracing::warn!("Rejected accountable with an already registered e-mail");
            return Err(AccountableError::EmailAlreadyRegistered(input.email));
        }

        let email = input.email.clone();
        let record = mapper::create_input_to_record(input, Uuid::new_v4(), Utc::now());
        let saved = self
            .repository
            .save(record)
            .await
            .map_err(|e| e.on_duplicate_email(&email))?;
        Ok(mapper::record_to_output(saved))
    }
}

pub struct FindAccountable<'r> {
    repository: &'r dyn AccountableRepository,
}

impl<'r> FindAccountable<'r> {
    pub fn new(repository: &'r dyn AccountableRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<'r> UseCase for FindAccountable<'r> {
    type Input = Uuid;
    type Output = AccountableOutput;
    type Error = AccountableError;

    async fn execute(&self, uuid: Uuid) -> AccountableResult<AccountableOutput> {
        let record = self
            .repository
            .find_by_uuid(uuid)
            .await?
            .ok_or(AccountableError::NotFound(uuid))?;
        Ok(mapper::record_to_output(record))
    }
}

pub struct ListAccountables<'r> {
    repository: &'r dyn AccountableRepository,
}

impl<'r> ListAccountables<'r> {
    pub fn new(repository: &'r dyn AccountableRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<'r> UseCase for ListAccountables<'r> {
    type Input = PageRequest<AccountableSort>;
    type Output = Page<AccountableOutput>;
    type Error = AccountableError;

    async fn execute(
        &self,
        request: PageRequest<AccountableSort>,
    ) -> AccountableResult<Page<AccountableOutput>> {
        let records = self
            .repository
            .find_page(request.offset()?, request.limit(), request.sort)
            .await?;
        let total = self.repository.count().await?;
        Ok(mapper::records_to_page(records, &request, total))
    }
}

pub struct UpdateAccountable<'r> {
    repository: &'r dyn AccountableRepository,
}

impl<'r> UpdateAccountable<'r> {
    pub fn new(repository: &'r dyn AccountableRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<'r> UseCase for UpdateAccountable<'r> {
    type Input = UpdateAccountableInput;
    type Output = AccountableOutput;
    type Error = AccountableError;

    async fn execute(&self, input: UpdateAccountableInput) -> AccountableResult<AccountableOutput> {
        let existing = self
            .repository
            .find_by_uuid(input.uuid)
            .await?
            .ok_or(AccountableError::NotFound(input.uuid))?;

        // Keeping one's own address under a different case is not a conflict
        let email_changed = existing.email.to_lowercase() != input.email.to_lowercase();
        if email_changed
            && self
                .repository
                .exists_by_email_ignore_case(&input.email)
                .await?
        {
            return Err(AccountableError::EmailAlreadyRegistered(input.email));
        }

        let email = input.email.clone();
        let record = mapper::update_input_to_record(input, existing, Utc::now());
        let saved = self
            .repository
            .save(record)
            .await
            .map_err(|e| e.on_duplicate_email(&email))?;
        Ok(mapper::record_to_output(saved))
    }
}

pub struct DeleteAccountable<'r> {
    repository: &'r dyn AccountableRepository,
}

impl<'r> DeleteAccountable<'r> {
    pub fn new(repository: &'r dyn AccountableRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<'r> UseCase for DeleteAccountable<'r> {
    type Input = Uuid;
    type Output = ();
    type Error = AccountableError;

    async fn execute(&self, uuid: Uuid) -> AccountableResult<()> {
        let existing = self
            .repository
            .find_by_uuid(uuid)
            .await?
            .ok_or(AccountableError::NotFound(uuid))?;

        let Some(id) = existing.id else {
            return Err(
                DbErr::Custom(format!("Accountable {uuid} was loaded without a row id")).into(),
            );
        };
        self.repository.delete(id).await?;
        tracing::info!(accountable_uuid = %uuid, "Accountable removed");
        Ok(())
    }
}
