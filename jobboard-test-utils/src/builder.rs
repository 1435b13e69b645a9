//! Declarative test builder.
//!
//! Tables and fixtures are queued on the builder and executed in order during
//! [`TestBuilder::build`], yielding a ready [`TestContext`].

use entity::sea_orm_active_enums::{JobStatus, UserRole};
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};
use uuid::Uuid;

use crate::{error::TestError, schema, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    indexes: Vec<IndexCreateStatement>,
    include_job_board_tables: bool,

    // (profile_id, role)
    profiles: Vec<(Uuid, UserRole)>,
    // (job_id, recruiter_id, status)
    jobs: Vec<(Uuid, Uuid, JobStatus)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
            include_job_board_tables: false,
            profiles: Vec::new(),
            jobs: Vec::new(),
        }
    }

    /// Add every job board table along with the composite unique indexes.
    pub fn with_job_board_tables(mut self) -> Self {
        self.include_job_board_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Tables are created in the order they are added, so parents must come
    /// before the entities referencing them.
    ///
    /// ```no_run
    /// use entity::prelude::*;
    /// use jobboard_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), jobboard_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(AuthIdentity)
    ///     .with_table(Profile)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add an index statement executed after all tables are created.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Insert an identity with a profile of the given role.
    pub fn with_profile(mut self, profile_id: Uuid, role: UserRole) -> Self {
        self.profiles.push((profile_id, role));
        self
    }

    /// Insert a job owned by `recruiter_id`.
    ///
    /// The recruiter profile must be queued with [`TestBuilder::with_profile`].
    pub fn with_job(mut self, job_id: Uuid, recruiter_id: Uuid, status: JobStatus) -> Self {
        self.jobs.push((job_id, recruiter_id, status));
        self
    }

    /// Execute the queued statements and fixtures.
    ///
    /// Order of execution:
    /// 1. Tables (job board tables first when requested, then custom tables)
    /// 2. Indexes
    /// 3. Profile fixtures, then job fixtures
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Statement or fixture insertion failed
    /// - `Err(TestError::IoError)` - Temporary object store directory could not be created
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;

        let mut all_tables = Vec::new();
        let mut all_indexes = Vec::new();

        if self.include_job_board_tables {
            all_tables.extend(schema::job_board_tables());
            all_indexes.extend(schema::job_board_unique_indexes());
        }

        all_tables.extend(self.tables);
        all_indexes.extend(self.indexes);

        test.with_tables(all_tables).await?;
        test.with_indexes(all_indexes).await?;

        for (profile_id, role) in self.profiles {
            test.profile().insert_profile_with_id(profile_id, role).await?;
        }

        for (job_id, recruiter_id, status) in self.jobs {
            test.job()
                .insert_job_with_id(job_id, recruiter_id, status)
                .await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
