use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Secretariat::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Secretariat::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(uuid(Secretariat::Uuid).unique_key())
                    .col(ColumnDef::new(Secretariat::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Secretariat::Description).string_len(255).null())
                    .col(
                        timestamp_with_time_zone(Secretariat::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Secretariat::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_secretariat_name")
                    .table(Secretariat::Table)
                    .col(Secretariat::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER secretariat_touch_updated_at
                    BEFORE UPDATE ON secretariat
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
            .execute_unprepared("DROP TRIGGER IF EXISTS secretariat_touch_updated_at ON secretariat")
            .await?;

        manager
            .drop_table(Table::drop().table(Secretariat::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Secretariat {
    Table,
    Id,
    Uuid,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}
