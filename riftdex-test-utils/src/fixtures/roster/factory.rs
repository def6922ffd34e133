//! Insert helpers for the reference and fact tables.
//!
//! All helpers write directly through sea-orm active models against the
//! in-memory SQLite database and return the inserted row.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, fixtures::roster::RosterFixtures};

impl<'a> RosterFixtures<'a> {
    pub async fn insert_player(
        &self,
        overview_page: &str,
        name: &str,
    ) -> Result<entity::player::Model, TestError> {
        let player = entity::player::ActiveModel {
            overview_page: ActiveValue::Set(overview_page.to_string()),
            name: ActiveValue::Set(name.to_string()),
            country: ActiveValue::Set(None),
            role: ActiveValue::Set(None),
            team: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(player.insert(&self.setup.state.db).await?)
    }

    pub async fn insert_player_redirect(
        &self,
        name: &str,
        overview_page: &str,
    ) -> Result<entity::player_redirect::Model, TestError> {
        let redirect = entity::player_redirect::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            overview_page: ActiveValue::Set(overview_page.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(redirect.insert(&self.setup.state.db).await?)
    }

    pub async fn insert_team(
        &self,
        overview_page: &str,
        name: &str,
    ) -> Result<entity::team::Model, TestError> {
        let team = entity::team::ActiveModel {
            overview_page: ActiveValue::Set(overview_page.to_string()),
            name: ActiveValue::Set(name.to_string()),
            region: ActiveValue::Set(None),
            league: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(team.insert(&self.setup.state.db).await?)
    }

    pub async fn insert_team_redirect(
        &self,
        name: &str,
        overview_page: &str,
    ) -> Result<entity::team_redirect::Model, TestError> {
        let redirect = entity::team_redirect::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            overview_page: ActiveValue::Set(overview_page.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(redirect.insert(&self.setup.state.db).await?)
    }

    pub async fn insert_scoreboard_row(
        &self,
        name: &str,
        link: Option<&str>,
        tournament: &str,
    ) -> Result<entity::scoreboard_player::Model, TestError> {
        let row = entity::scoreboard_player::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            link: ActiveValue::Set(link.map(str::to_string)),
            champion: ActiveValue::Set("Azir".to_string()),
            kills: ActiveValue::Set(4),
            deaths: ActiveValue::Set(1),
            assists: ActiveValue::Set(7),
            team: ActiveValue::Set("T1".to_string()),
            tournament: ActiveValue::Set(tournament.to_string()),
            game_id: ActiveValue::Set("ESPORTSTMNT01_3210800".to_string()),
            played_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(row.insert(&self.setup.state.db).await?)
    }

    pub async fn insert_tournament_row(
        &self,
        name: &str,
        link: Option<&str>,
        tournament: &str,
    ) -> Result<entity::tournament_player::Model, TestError> {
        let row = entity::tournament_player::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            link: ActiveValue::Set(link.map(str::to_string)),
            team: ActiveValue::Set("T1".to_string()),
            role: ActiveValue::Set(Some("Mid".to_string())),
            tournament: ActiveValue::Set(tournament.to_string()),
            ..Default::default()
        };

        Ok(row.insert(&self.setup.state.db).await?)
    }
}
