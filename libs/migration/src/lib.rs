pub use sea_orm_migration::prelude::*;

mod m20250101_000000_bootstrap;
mod m20250101_000001_create_secretariat;
mod m20250101_000002_create_accountable;
mod m20250101_000003_create_project;
mod m20250101_000004_create_project_accountables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000000_bootstrap::Migration),
            Box::new(m20250101_000001_create_secretariat::Migration),
            Box::new(m20250101_000002_create_accountable::Migration),
            Box::new(m20250101_000003_create_project::Migration),
            Box::new(m20250101_000004_create_project_accountables::Migration),
        ]
    }
}
