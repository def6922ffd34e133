pub use sea_orm_migration::prelude::*;

mod m20260825_000001_create_player_table;
mod m20260825_000002_create_team_table;
mod m20260825_000003_create_player_redirect_table;
mod m20260825_000004_create_team_redirect_table;
mod m20260825_000005_create_scoreboard_player_table;
mod m20260825_000006_create_tournament_player_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260825_000001_create_player_table::Migration),
            Box::new(m20260825_000002_create_team_table::Migration),
            Box::new(m20260825_000003_create_player_redirect_table::Migration),
            Box::new(m20260825_000004_create_team_redirect_table::Migration),
            Box::new(m20260825_000005_create_scoreboard_player_table::Migration),
            Box::new(m20260825_000006_create_tournament_player_table::Migration),
        ]
    }
}
