use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait, QueryFilter,
};

use crate::data::RedirectLookup;

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_overview_page(
        &self,
        overview_page: &str,
    ) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::OverviewPage.eq(overview_page))
            .one(self.db)
            .await
    }

    pub async fn find_redirect_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::team_redirect::Model>, DbErr> {
        entity::prelude::TeamRedirect::find()
            .filter(entity::team_redirect::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn find_by_overview_page_ci(
        &self,
        name: &str,
    ) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::team::Column::OverviewPage)))
                    .eq(Func::lower(Expr::val(name))),
            )
            .one(self.db)
            .await
    }

    pub async fn list_redirects_by_overview_page(
        &self,
        overview_page: &str,
    ) -> Result<Vec<entity::team_redirect::Model>, DbErr> {
        entity::prelude::TeamRedirect::find()
            .filter(entity::team_redirect::Column::OverviewPage.eq(overview_page))
            .all(self.db)
            .await
    }
}

impl RedirectLookup for TeamRepository<'_> {
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
            .map(|team| team.overview_page))
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
