use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::blog::application::domain::entities::Blog;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub title: String,

    pub slug: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub excerpt: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,

    pub image_url: Option<String>,

    pub author: String,

    pub published: bool,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Blog {
    fn from(model: Model) -> Self {
        Blog {
            id: model.id,
            title: model.title,
            slug: model.slug,
            excerpt: model.excerpt,
            content: model.content,
            image_url: model.image_url,
            author: model.author,
            published: model.published,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_model(published: bool) -> Model {
    let now = chrono::Utc::now().fixed_offset();
    Model {
        id: Uuid::new_v4(),
        title: "Buying your first flat".to_string(),
        slug: "buying-your-first-flat".to_string(),
        excerpt: None,
        content: Some("<p>Start with the budget.</p>".to_string()),
        image_url: None,
        author: "Admin".to_string(),
        published,
        created_at: now,
        updated_at: now,
    }
}
