use sea_orm::entity::prelude::*;

use crate::enquiry::application::domain::entities::Enquiry;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "enquiries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub ref_number: String,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub property_id: Option<Uuid>,

    pub property_ref: Option<String>,
    pub property_title: Option<String>,

    pub name: String,
    pub email: String,
    pub phone: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    pub created_at: DateTimeWithTimeZone,
}

impl From<Model> for Enquiry {
    fn from(model: Model) -> Self {
        Enquiry {
            id: model.id,
            ref_number: model.ref_number,
            property_id: model.property_id,
            property_ref: model.property_ref,
            property_title: model.property_title,
            name: model.name,
            email: model.email,
            phone: model.phone,
            message: model.message,
            created_at: model.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::property::adapter::outgoing::sea_orm_entity::properties::Entity",
        from = "Column::PropertyId",
        to = "crate::modules::property::adapter::outgoing::sea_orm_entity::properties::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
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
pub(crate) fn sample_model(property_id: Option<Uuid>) -> Model {
    Model {
        id: Uuid::new_v4(),
        ref_number: if property_id.is_some() {
            "PROP-2025-1234".to_string()
        } else {
            "GEN-2025-1234".to_string()
        },
        property_id,
        property_ref: None,
        property_title: Some("General Enquiry".to_string()),
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        phone: None,
        message: "Hello".to_string(),
        created_at: chrono::Utc::now().fixed_offset(),
    }
}
