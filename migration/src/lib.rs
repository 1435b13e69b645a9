pub use sea_orm_migration::prelude::*;

mod m20251017_000001_job_board_enums;
mod m20251017_000002_auth_identity;
mod m20251017_000003_profile;
mod m20251017_000004_job;
mod m20251017_000005_application;
mod m20251017_000006_saved_job;
mod m20251017_000007_storage_object;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_job_board_enums::Migration),
            Box::new(m20251017_000002_auth_identity::Migration),
            Box::new(m20251017_000003_profile::Migration),
            Box::new(m20251017_000004_job::Migration),
            Box::new(m20251017_000005_application::Migration),
            Box::new(m20251017_000006_saved_job::Migration),
            Box::new(m20251017_000007_storage_object::Migration),
        ]
    }
}
