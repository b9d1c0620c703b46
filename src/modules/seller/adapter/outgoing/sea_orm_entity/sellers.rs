use sea_orm::entity::prelude::*;

use crate::seller::application::domain::entities::Seller;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sellers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(unique)]
    pub email: String,

    pub password_hash: String,

    pub company: Option<String>,
    pub phone: String,
    pub city: String,
    pub pincode: String,

    pub is_active: bool,
    pub is_deleted: bool,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Seller {
        Seller {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            password_hash: self.password_hash.clone(),
            company: self.company.clone(),
            phone: self.phone.clone(),
            city: self.city.clone(),
            pincode: self.pincode.clone(),
            is_active: self.is_active,
            is_deleted: self.is_deleted,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::property::adapter::outgoing::sea_orm_entity::properties::Entity"
    )]
    Properties,
}

impl Related<crate::modules::property::adapter::outgoing::sea_orm_entity::properties::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Properties.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
pub(crate) fn sample_model(is_active: bool, is_deleted: bool) -> Model {
    let now = chrono::Utc::now().fixed_offset();
    Model {
        id: Uuid::new_v4(),
        name: "Priya Nair".to_string(),
        email: "priya@example.com".to_string(),
        password_hash: "$argon2id$hash".to_string(),
        company: None,
        phone: "9876543210".to_string(),
        city: "Kochi".to_string(),
        pincode: "682001".to_string(),
        is_active,
        is_deleted,
        created_at: now,
        updated_at: now,
    }
}
