use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Project::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(uuid(Project::Uuid).unique_key())
                    .col(ColumnDef::new(Project::Name).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Project::Status)
                            .string_len(50)
                            .not_null()
                            .default("TODO"),
                    )
                    .col(timestamp_with_time_zone(Project::ExpectedStart))
                    .col(timestamp_with_time_zone(Project::ExpectedEnd))
                    .col(timestamp_with_time_zone_null(Project::StartActual))
                    .col(timestamp_with_time_zone_null(Project::EndActual))
                    .col(integer(Project::DaysLate).default(0))
                    .col(double(Project::PercentageOfTimeRemaining).default(0.0))
                    .col(uuid_null(Project::SecretariatId))
                    .col(
                        timestamp_with_time_zone(Project::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Project::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_secretariat")
                            .from(Project::Table, Project::SecretariatId)
                            .to(Secretariat::Table, Secretariat::Uuid)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_project_status")
                    .table(Project::Table)
                    .col(Project::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_project_secretariat_id")
                    .table(Project::Table)
                    .col(Project::SecretariatId)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER project_touch_updated_at
                    BEFORE UPDATE ON project
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
            .execute_unprepared("DROP TRIGGER IF EXISTS project_touch_updated_at ON project")
            .await?;

        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
    Uuid,
    Name,
    Status,
    ExpectedStart,
    ExpectedEnd,
    StartActual,
    EndActual,
    DaysLate,
    PercentageOfTimeRemaining,
    SecretariatId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Secretariat {
    Table,
    Uuid,
}
