use chrono::Utc;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::property::application::domain::moderation::SellerCascade;

use super::sea_orm_entity::properties::{moderation_model, Column, Entity};

/// Applies a seller-wide moderation change on any connection, so seller
/// account changes can run it inside their own transaction.
/// Returns the number of listings updated.
pub async fn apply_seller_cascade<C>(
    conn: &C,
    seller_id: Uuid,
    cascade: SellerCascade,
) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let change = cascade
        .change(Utc::now())
        .map_err(|e| DbErr::Custom(e.to_string()))?;

    let mut update = Entity::update_many()
        .set(moderation_model(&change))
        .filter(Column::SellerId.eq(seller_id));

    if cascade.only_owner_removed() {
        update = update.filter(Column::OwnerRemoved.eq(true));
    }

    let result = update.exec(conn).await?;
    Ok(result.rows_affected)
}
