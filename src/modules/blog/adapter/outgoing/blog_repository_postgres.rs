use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::blog::application::domain::entities::Blog;
use crate::blog::application::ports::outgoing::{
    BlogChanges, BlogRepository, BlogRepositoryError, NewBlogData,
};
use crate::shared::patch::PatchField;

use super::sea_orm_entity::blogs::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct BlogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn patch(field: PatchField<String>, column: &mut sea_orm::ActiveValue<Option<String>>) {
    match field {
        PatchField::Unset => {}
        PatchField::Null => *column = Set(None),
        PatchField::Value(v) => *column = Set(Some(v)),
    }
}

#[async_trait]
impl BlogRepository for BlogRepositoryPostgres {
    async fn create(&self, data: NewBlogData) -> Result<Blog, BlogRepositoryError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            slug: Set(data.slug),
            excerpt: Set(data.excerpt),
            content: Set(data.content),
            image_url: Set(data.image_url),
            author: Set(data.author),
            published: Set(data.published),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.into())
    }

    async fn update(&self, id: Uuid, changes: BlogChanges) -> Result<Blog, BlogRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(title) = changes.title {
            model.title = Set(title);
        }
        if let Some(slug) = changes.slug {
            model.slug = Set(slug);
        }
        patch(changes.excerpt, &mut model.excerpt);
        patch(changes.content, &mut model.content);
        patch(changes.image_url, &mut model.image_url);
        if let Some(author) = changes.author {
            model.author = Set(author);
        }
        if let Some(published) = changes.published {
            model.published = Set(published);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(Blog::from)
            .ok_or(BlogRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), BlogRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(BlogRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> BlogRepositoryError {
    BlogRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::adapter::outgoing::sea_orm_entity::blogs::{sample_model, Model};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn create_returns_inserted_post() {
        let model = sample_model(true);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let blog = repo
            .create(NewBlogData {
                title: model.title.clone(),
                slug: model.slug.clone(),
                excerpt: None,
                content: model.content.clone(),
                image_url: None,
                author: "Admin".to_string(),
                published: true,
            })
            .await
            .unwrap();

        assert_eq!(blog.id, model.id);
    }

    #[tokio::test]
    async fn update_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update(
                Uuid::new_v4(),
                BlogChanges {
                    published: Some(false),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(BlogRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete(Uuid::new_v4()).await;

        assert!(matches!(result, Err(BlogRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn delete_existing_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        assert!(repo.delete(Uuid::new_v4()).await.is_ok());
    }
}
