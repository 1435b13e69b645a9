use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};
use uuid::Uuid;

pub struct IdentityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IdentityRepository<'a, C> {
    /// Creates a new instance of [`IdentityRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new identity with a generated ID
    ///
    /// Fails with a unique constraint violation when the email is already registered.
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        full_name: Option<&str>,
    ) -> Result<entity::auth_identity::Model, DbErr> {
        let identity = entity::auth_identity::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            full_name: ActiveValue::Set(full_name.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::AuthIdentity::insert(identity)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::auth_identity::Model>, DbErr> {
        entity::prelude::AuthIdentity::find()
            .filter(entity::auth_identity::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
