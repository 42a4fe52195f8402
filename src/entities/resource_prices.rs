//! SeaORM Entity for the append-only resource price history table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resource_prices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Allow-listed resource name (crop or ore)
    pub resource: String,
    /// Upstream-reported unit price, stored as-is
    pub price: f64,
    /// Upstream snapshot instant; shared by every row of one fetch cycle
    pub timestamp: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
