//! Customer database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Customer;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub document: Option<String>,
    pub email: String,
    pub phone: String,
    /// Insert time; only used to order listings
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Customer {
    fn from(model: Model) -> Self {
        Customer {
            id: Some(model.id),
            name: model.name,
            document: model.document,
            email: model.email,
            phone: model.phone,
        }
    }
}
