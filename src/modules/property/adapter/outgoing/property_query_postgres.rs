use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::property::application::domain::entities::{Property, PropertyView, SellerSummary};
use crate::property::application::domain::locations::escape_like;
use crate::property::application::domain::status::PropertyStatus;
use crate::property::application::ports::outgoing::{
    PropertyListFilter, PropertyQuery, PropertyQueryError,
};
use crate::seller::adapter::outgoing::sea_orm_entity::sellers;

use super::sea_orm_entity::properties::{Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct PropertyQueryPostgres {
    db: Arc<DatabaseConnection>,
}

#[derive(Debug, FromQueryResult)]
struct LocationRow {
    city: Option<String>,
    zip: Option<String>,
}

impl PropertyQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Loads the linked sellers in one query and pairs them with their listings.
    async fn attach_sellers(
        &self,
        models: Vec<Model>,
    ) -> Result<Vec<PropertyView>, PropertyQueryError> {
        let mut seller_ids: Vec<Uuid> = models.iter().filter_map(|m| m.seller_id).collect();
        seller_ids.sort();
        seller_ids.dedup();

        let sellers: HashMap<Uuid, SellerSummary> = if seller_ids.is_empty() {
            HashMap::new()
        } else {
            sellers::Entity::find()
                .filter(sellers::Column::Id.is_in(seller_ids))
                .all(&*self.db)
                .await
                .map_err(map_db_err)?
                .into_iter()
                .map(|s| {
                    (
                        s.id,
                        SellerSummary {
                            id: s.id,
                            name: s.name,
                            email: s.email,
                        },
                    )
                })
                .collect()
        };

        models
            .into_iter()
            .map(|model| {
                let seller = model.seller_id.and_then(|id| sellers.get(&id).cloned());
                Ok(PropertyView {
                    property: to_domain(&model)?,
                    seller,
                })
            })
            .collect()
    }
}

fn to_domain(model: &Model) -> Result<Property, PropertyQueryError> {
    model
        .to_domain()
        .map_err(PropertyQueryError::SerializationError)
}

#[async_trait]
impl PropertyQuery for PropertyQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, PropertyQueryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model.as_ref().map(to_domain).transpose()
    }

    async fn find_view(&self, id: Uuid) -> Result<Option<PropertyView>, PropertyQueryError> {
        let Some(model) = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        Ok(self.attach_sellers(vec![model]).await?.into_iter().next())
    }

    async fn list(
        &self,
        filter: PropertyListFilter,
    ) -> Result<Vec<PropertyView>, PropertyQueryError> {
        let mut select = Entity::find().filter(Column::Status.eq(filter.status.as_str()));

        if let Some(city) = filter.city {
            select = select.filter(Column::City.eq(city));
        }
        if let Some(country) = filter.country {
            select = select.filter(Column::Country.eq(country));
        }
        if let Some(property_type) = filter.property_type {
            select = select.filter(Column::PropertyType.eq(property_type));
        }
        if let Some(max_price) = filter.max_price {
            select = select.filter(Column::TotalPrice.lte(max_price));
        }
        if let Some(min_rooms) = filter.min_rooms {
            select = select.filter(Column::Rooms.gte(min_rooms));
        }

        let models = select
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.attach_sellers(models).await
    }

    async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<Property>, PropertyQueryError> {
        let models = Entity::find()
            .filter(Column::SellerId.eq(seller_id))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.iter().map(to_domain).collect()
    }

    async fn list_pending(&self) -> Result<Vec<PropertyView>, PropertyQueryError> {
        let models = Entity::find()
            .filter(Column::Status.eq(PropertyStatus::Pending.as_str()))
            .order_by_desc(Column::SubmittedAt)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.attach_sellers(models).await
    }

    async fn location_rows(
        &self,
        search: &str,
        limit: u64,
    ) -> Result<Vec<(Option<String>, Option<String>)>, PropertyQueryError> {
        let pattern = format!("%{}%", escape_like(&search.to_lowercase()));

        let rows = Entity::find()
            .select_only()
            .column(Column::City)
            .column(Column::Zip)
            .filter(
                Condition::any()
                    .add(Expr::expr(Func::lower(Expr::col(Column::City))).like(pattern.clone()))
                    .add(Expr::expr(Func::lower(Expr::col(Column::Zip))).like(pattern)),
            )
            .limit(limit)
            .into_model::<LocationRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|r| (r.city, r.zip)).collect())
    }
}

fn map_db_err(e: DbErr) -> PropertyQueryError {
    PropertyQueryError::DatabaseError(e.to_string())
}
