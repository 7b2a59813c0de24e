use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A named check definition bound to a plugin.
///
/// `runsOn` is the comma-delimited hostname list; `params` is an opaque
/// YAML blob interpreted by the named plugin, never parsed here.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "monitors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub plugin: String,
    pub enabled: bool,
    pub frequency: i32,
    #[sea_orm(column_name = "runsOn")]
    pub runs_on: String,
    pub params: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
