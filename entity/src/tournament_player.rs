//! Tournament roster fact table.
//!
//! Like scoreboard rows, roster entries carry the `name`/`link` strings that
//! were current when the roster was recorded. Append-only.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tournament_player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub link: Option<String>,
    pub team: String,
    pub role: Option<String>,
    pub tournament: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
