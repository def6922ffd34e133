use riftdex::service::appearance::AppearanceService;
use riftdex_test_utils::prelude::*;

/// Roster entries recorded under any alias are returned for the current name
#[tokio::test]
async fn collects_roster_entries_across_aliases() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(
        entity::prelude::Player,
        entity::prelude::PlayerRedirect,
        entity::prelude::TournamentPlayer
    )?;
    test.roster().insert_player("Faker", "Faker").await?;
    test.roster()
        .insert_player_redirect("SKT Faker", "Faker")
        .await?;
    test.roster()
        .insert_tournament_row("SKT Faker", None, "Worlds 2016")
        .await?;
    test.roster()
        .insert_tournament_row("faker", None, "Worlds 2024")
        .await?;

    let appearances = AppearanceService::new(&test.state.db);
    let result = appearances.list_player_rosters("Faker").await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().len(), 2);

    Ok(())
}

/// Tournament aggregation spans scoreboard and roster fact tables
#[tokio::test]
async fn tournaments_span_both_fact_tables() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(
        entity::prelude::Player,
        entity::prelude::PlayerRedirect,
        entity::prelude::ScoreboardPlayer,
        entity::prelude::TournamentPlayer
    )?;
    test.roster().insert_player("Faker", "Faker").await?;
    test.roster()
        .insert_scoreboard_row("Faker", None, "LCK 2025 Spring")
        .await?;
    test.roster()
        .insert_tournament_row("Faker", None, "MSI 2025")
        .await?;

    let appearances = AppearanceService::new(&test.state.db);
    let result = appearances.list_player_tournaments("Faker").await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), vec!["LCK 2025 Spring", "MSI 2025"]);

    Ok(())
}
