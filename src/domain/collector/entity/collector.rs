use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A monitored host reporting a heartbeat.
///
/// `lastSeen` is server-assigned unix milliseconds and overwritten on
/// every write; clients never control it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "collectors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub hostname: String,
    pub version: String,
    #[sea_orm(column_name = "lastSeen")]
    pub last_seen: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
