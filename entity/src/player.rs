//! Canonical player reference table.
//!
//! `overview_page` is the stable, human-assigned slug identifying a player;
//! `name` is the current display label and is neither unique nor stable.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub overview_page: String,
    pub name: String,
    pub country: Option<String>,
    pub role: Option<String>,
    pub team: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
