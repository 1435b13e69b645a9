//! Schema statements for the in-memory test database.
//!
//! Tables are generated from the entities, which carries the cascading foreign
//! keys. Composite unique indexes are not derivable from the entities so they
//! are declared here, matching the migrations.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    DbBackend, Schema,
};

/// CREATE TABLE statements for every job board table, parents first.
pub fn job_board_tables() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::AuthIdentity),
        schema.create_table_from_entity(entity::prelude::Profile),
        schema.create_table_from_entity(entity::prelude::Job),
        schema.create_table_from_entity(entity::prelude::Application),
        schema.create_table_from_entity(entity::prelude::SavedJob),
        schema.create_table_from_entity(entity::prelude::StorageObject),
    ]
}

/// Unique indexes backing the one-row-per-pair invariants.
pub fn job_board_unique_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("idx-application-job_id-applicant_id")
            .table(entity::application::Entity)
            .col(entity::application::Column::JobId)
            .col(entity::application::Column::ApplicantId)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx-saved_job-job_id-user_id")
            .table(entity::saved_job::Entity)
            .col(entity::saved_job::Column::JobId)
            .col(entity::saved_job::Column::UserId)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx-storage_object-bucket-name")
            .table(entity::storage_object::Entity)
            .col(entity::storage_object::Column::Bucket)
            .col(entity::storage_object::Column::Name)
            .unique()
            .to_owned(),
    ]
}
