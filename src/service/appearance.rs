//! Fact-table queries keyed on a resolved alias set.
//!
//! Fact rows reference players by whatever name string was recorded at event
//! time, so every query here resolves the input first and then matches the
//! full alias set against both the `name` and `link` columns.

use std::collections::BTreeSet;

use sea_orm::DatabaseConnection;

use crate::{data::fact::FactRepository, error::Error, service::resolver::ResolverService};

pub struct AppearanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppearanceService<'a> {
    /// Creates a new instance of [`AppearanceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every scoreboard appearance for the player behind `input`, across all
    /// names the player has competed under.
    pub async fn list_player_appearances(
        &self,
        input: &str,
    ) -> Result<Vec<entity::scoreboard_player::Model>, Error> {
        let resolver = ResolverService::new(self.db);
        let fact_repo = FactRepository::new(self.db);

        let resolution = resolver.resolve_player(input).await?;

        Ok(fact_repo
            .list_scoreboard_by_aliases(&resolution.aliases)
            .await?)
    }

    /// Every tournament roster entry for the player behind `input`.
    pub async fn list_player_rosters(
        &self,
        input: &str,
    ) -> Result<Vec<entity::tournament_player::Model>, Error> {
        let resolver = ResolverService::new(self.db);
        let fact_repo = FactRepository::new(self.db);

        let resolution = resolver.resolve_player(input).await?;

        Ok(fact_repo
            .list_tournament_entries_by_aliases(&resolution.aliases)
            .await?)
    }

    /// Distinct tournaments the player appears in, across both fact tables,
    /// sorted by name.
    pub async fn list_player_tournaments(&self, input: &str) -> Result<Vec<String>, Error> {
        let resolver = ResolverService::new(self.db);
        let fact_repo = FactRepository::new(self.db);

        let resolution = resolver.resolve_player(input).await?;

        let mut tournaments = BTreeSet::new();

        for row in fact_repo
            .list_scoreboard_by_aliases(&resolution.aliases)
            .await?
        {
            tournaments.insert(row.tournament);
        }

        for row in fact_repo
            .list_tournament_entries_by_aliases(&resolution.aliases)
            .await?
        {
            tournaments.insert(row.tournament);
        }

        Ok(tournaments.into_iter().collect())
    }
}
