use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

pub struct StorageObjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StorageObjectRepository<'a, C> {
    /// Creates a new instance of [`StorageObjectRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts object metadata or replaces it when the bucket and name already exist
    pub async fn upsert(
        &self,
        bucket: &str,
        name: &str,
        owner_id: Uuid,
        content_type: &str,
        size: i64,
    ) -> Result<entity::storage_object::Model, DbErr> {
        // Insert with on_conflict skips ActiveModelBehavior, timestamps are set here
        let now = Utc::now().naive_utc();

        let object = entity::storage_object::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            bucket: ActiveValue::Set(bucket.to_string()),
            name: ActiveValue::Set(name.to_string()),
            owner_id: ActiveValue::Set(owner_id),
            content_type: ActiveValue::Set(content_type.to_string()),
            size: ActiveValue::Set(size),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        entity::prelude::StorageObject::insert(object)
            .on_conflict(
                OnConflict::columns([
                    entity::storage_object::Column::Bucket,
                    entity::storage_object::Column::Name,
                ])
                .update_columns([
                    entity::storage_object::Column::OwnerId,
                    entity::storage_object::Column::ContentType,
                    entity::storage_object::Column::Size,
                    entity::storage_object::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get(
        &self,
        bucket: &str,
        name: &str,
    ) -> Result<Option<entity::storage_object::Model>, DbErr> {
        entity::prelude::StorageObject::find()
            .filter(entity::storage_object::Column::Bucket.eq(bucket))
            .filter(entity::storage_object::Column::Name.eq(name))
            .one(self.db)
            .await
    }
}
