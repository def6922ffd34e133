use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait, QueryFilter,
};

use crate::data::RedirectLookup;

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_overview_page(
        &self,
        overview_page: &str,
    ) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::OverviewPage.eq(overview_page))
            .one(self.db)
            .await
    }

    /// Point lookup in the redirect table. Comparison is case-sensitive:
    /// redirect rows are curated identity links and must match exactly.
    pub async fn find_redirect_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::player_redirect::Model>, DbErr> {
        entity::prelude::PlayerRedirect::find()
            .filter(entity::player_redirect::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Case-insensitive lookup against the canonical slug. Both sides are
    /// lowered in SQL so one collation governs the comparison.
    pub async fn find_by_overview_page_ci(
        &self,
        name: &str,
    ) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(
                    entity::player::Column::OverviewPage,
                )))
                .eq(Func::lower(Expr::val(name))),
            )
            .one(self.db)
            .await
    }

    pub async fn list_redirects_by_overview_page(
        &self,
        overview_page: &str,
    ) -> Result<Vec<entity::player_redirect::Model>, DbErr> {
        entity::prelude::PlayerRedirect::find()
            .filter(entity::player_redirect::Column::OverviewPage.eq(overview_page))
            .all(self.db)
            .await
    }
}

impl RedirectLookup for PlayerRepository<'_> {
    async fn find_redirect_target(&self, name: &str) -> Result<Option<String>, DbErr> {
        Ok(self
            .find_redirect_by_name(name)
            .await?
            .map(|redirect| redirect.overview_page))
    }

    async fn find_canonical_page(&self, name: &str) -> Result<Option<String>, DbErr> {
        Ok(self
            .find_by_overview_page_ci(name)
            .await?
            .map(|player| player.overview_page))
    }

    async fn list_redirect_names(&self, overview_page: &str) -> Result<Vec<String>, DbErr> {
        Ok(self
            .list_redirects_by_overview_page(overview_page)
            .await?
            .into_iter()
            .map(|redirect| redirect.name)
            .collect())
    }
}
