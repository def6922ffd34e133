use std::collections::BTreeSet;

use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    Condition, DatabaseConnection, DbErr, EntityTrait, ExprTrait, QueryFilter, QueryOrder,
};

pub struct FactRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FactRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All scoreboard rows whose recorded `name` or `link` matches any alias.
    ///
    /// Matching is case-insensitive on both columns: fact rows carry whatever
    /// capitalization was in use at event time, so exact matching here would
    /// silently drop games recorded under a recased name. Aliases are lowered
    /// in SQL alongside the columns so one collation governs both sides.
    pub async fn list_scoreboard_by_aliases(
        &self,
        aliases: &BTreeSet<String>,
    ) -> Result<Vec<entity::scoreboard_player::Model>, DbErr> {
        let lowered = lowered_values(aliases);

        entity::prelude::ScoreboardPlayer::find()
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(
                            entity::scoreboard_player::Column::Name,
                        )))
                        .is_in(lowered.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(
                            entity::scoreboard_player::Column::Link,
                        )))
                        .is_in(lowered),
                    ),
            )
            .order_by_asc(entity::scoreboard_player::Column::Id)
            .all(self.db)
            .await
    }

    /// All tournament roster rows whose recorded `name` or `link` matches any
    /// alias. Same case-insensitive policy as the scoreboard query.
    pub async fn list_tournament_entries_by_aliases(
        &self,
        aliases: &BTreeSet<String>,
    ) -> Result<Vec<entity::tournament_player::Model>, DbErr> {
        let lowered = lowered_values(aliases);

        entity::prelude::TournamentPlayer::find()
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(
                            entity::tournament_player::Column::Name,
                        )))
                        .is_in(lowered.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(
                            entity::tournament_player::Column::Link,
                        )))
                        .is_in(lowered),
                    ),
            )
            .order_by_asc(entity::tournament_player::Column::Id)
            .all(self.db)
            .await
    }
}

fn lowered_values(aliases: &BTreeSet<String>) -> Vec<SimpleExpr> {
    aliases
        .iter()
        .map(|alias| Func::lower(Expr::val(alias.as_str())).into())
        .collect()
}
