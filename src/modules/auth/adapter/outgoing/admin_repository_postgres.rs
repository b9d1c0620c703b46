use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::Admin;
use crate::auth::application::ports::outgoing::admin_repository::{
    AdminRepository, AdminRepositoryError, NewAdminData,
};

use super::sea_orm_entity::admins::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct AdminRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminRepository for AdminRepositoryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AdminRepositoryError> {
        let normalized = email.trim().to_lowercase();

        let model = Entity::find()
            .filter(Column::Email.eq(normalized))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, AdminRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn count(&self) -> Result<u64, AdminRepositoryError> {
        Entity::find().count(&*self.db).await.map_err(map_db_err)
    }

    async fn create(&self, data: NewAdminData) -> Result<Admin, AdminRepositoryError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email.trim().to_lowercase()),
            name: Set(data.name),
            password_hash: Set(data.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            let msg = e.to_string().to_lowercase();
            if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
                AdminRepositoryError::AdminAlreadyExists
            } else {
                map_db_err(e)
            }
        })?;

        Ok(inserted.to_domain())
    }
}

fn map_db_err(e: DbErr) -> AdminRepositoryError {
    AdminRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::admins::Model;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase, RuntimeErr};
    use std::collections::BTreeMap;

    fn admin_model(email: &str) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: "Root".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn find_by_email_returns_admin() {
        let model = admin_model("admin@example.com");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let repo = AdminRepositoryPostgres::new(Arc::new(db));
        let admin = repo
            .find_by_email("  ADMIN@example.com ")
            .await
            .unwrap()
            .expect("admin should be found");

        assert_eq!(admin.id, model.id);
        assert_eq!(admin.email, "admin@example.com");
    }

    #[tokio::test]
    async fn find_by_id_missing_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let repo = AdminRepositoryPostgres::new(Arc::new(db));
        let result = repo.find_by_id(Uuid::new_v4()).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn count_reads_aggregate() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![BTreeMap::from([(
                "num_items".to_string(),
                Value::BigInt(Some(2)),
            )])]])
            .into_connection();

        let repo = AdminRepositoryPostgres::new(Arc::new(db));
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn create_returns_inserted_admin() {
        let model = admin_model("new@example.com");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let repo = AdminRepositoryPostgres::new(Arc::new(db));
        let admin = repo
            .create(NewAdminData {
                email: "New@Example.com".to_string(),
                name: "Root".to_string(),
                password_hash: "$argon2id$hash".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(admin.email, "new@example.com");
    }

    #[tokio::test]
    async fn create_maps_unique_violation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"admins_email_key\"".into(),
            ))])
            .into_connection();

        let repo = AdminRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create(NewAdminData {
                email: "dup@example.com".to_string(),
                name: "Root".to_string(),
                password_hash: "hash".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AdminRepositoryError::AdminAlreadyExists)));
    }
}
