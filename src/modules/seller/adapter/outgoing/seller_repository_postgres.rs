use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::property::adapter::outgoing::sea_orm_entity::properties;
use crate::property::adapter::outgoing::seller_cascade::apply_seller_cascade;
use crate::property::application::domain::moderation::SellerCascade;
use crate::seller::application::domain::entities::Seller;
use crate::seller::application::ports::outgoing::{
    NewSellerData, SellerChanges, SellerRepository, SellerRepositoryError,
};
use crate::shared::patch::PatchField;

use super::sea_orm_entity::sellers::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct SellerRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SellerRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SellerRepository for SellerRepositoryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<Seller>, SellerRepositoryError> {
        let model = Entity::find()
            .filter(Column::Email.eq(email.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn create(&self, data: NewSellerData) -> Result<Seller, SellerRepositoryError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            company: Set(data.company),
            phone: Set(data.phone),
            city: Set(data.city),
            pincode: Set(data.pincode),
            is_active: Set(data.is_active),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_email_error)?;
        Ok(inserted.to_domain())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: SellerChanges,
    ) -> Result<Seller, SellerRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(name) = changes.name {
            model.name = Set(name);
        }
        if let Some(email) = changes.email {
            model.email = Set(email);
        }
        if let Some(hash) = changes.password_hash {
            model.password_hash = Set(hash);
        }
        match changes.company {
            PatchField::Unset => {}
            PatchField::Null => model.company = Set(None),
            PatchField::Value(company) => model.company = Set(Some(company)),
        }
        if let Some(phone) = changes.phone {
            model.phone = Set(phone);
        }
        if let Some(city) = changes.city {
            model.city = Set(city);
        }
        if let Some(pincode) = changes.pincode {
            model.pincode = Set(pincode);
        }
        if let Some(active) = changes.is_active {
            model.is_active = Set(active);
        }

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_email_error)?;

        updated
            .into_iter()
            .next()
            .map(|m| m.to_domain())
            .ok_or(SellerRepositoryError::NotFound)
    }

    async fn set_active(&self, id: Uuid, active: bool) -> Result<Seller, SellerRepositoryError> {
        let updated = Entity::update_many()
            .col_expr(Column::IsActive, Expr::value(active))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(|m| m.to_domain())
            .ok_or(SellerRepositoryError::NotFound)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<u64, SellerRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result = Entity::update_many()
            .col_expr(Column::IsDeleted, Expr::value(true))
            .col_expr(Column::IsActive, Expr::value(false))
            .filter(Column::Id.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SellerRepositoryError::NotFound);
        }

        let cascaded = apply_seller_cascade(&txn, id, SellerCascade::SoftDeleteAll)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(cascaded)
    }

    async fn hard_delete(&self, id: Uuid) -> Result<u64, SellerRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let removed = properties::Entity::delete_many()
            .filter(properties::Column::SellerId.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let result = Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SellerRepositoryError::NotFound);
        }

        txn.commit().await.map_err(map_db_err)?;
        Ok(removed.rows_affected)
    }

    async fn restore(&self, id: Uuid) -> Result<Seller, SellerRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let restored = Entity::update_many()
            .col_expr(Column::IsDeleted, Expr::value(false))
            .col_expr(Column::IsActive, Expr::value(true))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&txn)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(SellerRepositoryError::NotFound)?;

        apply_seller_cascade(&txn, id, SellerCascade::RestoreAll)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(restored.to_domain())
    }
}

fn map_email_error(e: DbErr) -> SellerRepositoryError {
    let msg = e.to_string().to_lowercase();
    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        SellerRepositoryError::EmailAlreadyExists
    } else {
        map_db_err(e)
    }
}

fn map_db_err(e: DbErr) -> SellerRepositoryError {
    SellerRepositoryError::DatabaseError(e.to_string())
}
