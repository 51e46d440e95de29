use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accountable::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accountable::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(uuid(Accountable::Uuid).unique_key())
                    .col(ColumnDef::new(Accountable::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Accountable::Email).string_len(150).not_null())
                    .col(ColumnDef::new(Accountable::Role).string_len(50).not_null())
                    .col(uuid_null(Accountable::SecretariatId))
                    .col(
                        timestamp_with_time_zone(Accountable::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Accountable::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accountable_secretariat")
                            .from(Accountable::Table, Accountable::SecretariatId)
                            .to(Secretariat::Table, Secretariat::Uuid)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Case-insensitive e-mail uniqueness
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX ux_accountable_email_lower ON accountable (lower(email))",
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_accountable_secretariat_id")
                    .table(Accountable::Table)
                    .col(Accountable::SecretariatId)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER accountable_touch_updated_at
                    BEFORE UPDATE ON accountable
                    FOR EACH ROW
                    EXECUTE FUNCTION util.touch_updated_at()
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS accountable_touch_updated_at ON accountable")
            .await?;

        manager
            .drop_table(Table::drop().table(Accountable::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Accountable {
    Table,
    Id,
    Uuid,
    Name,
    Email,
    Role,
    SecretariatId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Secretariat {
    Table,
    Uuid,
}
