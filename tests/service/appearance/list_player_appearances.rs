use riftdex::service::appearance::AppearanceService;
use riftdex_test_utils::prelude::*;

/// Games recorded under old aliases, recased names, and the `link` column are
/// all found from a single current-name query
#[tokio::test]
async fn collects_appearances_across_aliases_and_columns() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(
        entity::prelude::Player,
        entity::prelude::PlayerRedirect,
        entity::prelude::ScoreboardPlayer
    )?;
    test.roster()
        .insert_player("Seo_Dae-gil", "Deokdam")
        .await?;
    test.roster()
        .insert_player_redirect("Deokdam", "Seo_Dae-gil")
        .await?;

    // Recorded under the alias at the time
    test.roster()
        .insert_scoreboard_row("Deokdam", None, "LCK 2023 Summer")
        .await?;
    // Recased by a later ingestion run
    test.roster()
        .insert_scoreboard_row("DEOKDAM", None, "LCK 2024 Spring")
        .await?;
    // Name field holds a sponsor tag, link carries the slug
    test.roster()
        .insert_scoreboard_row("DK Deokdam", Some("Seo_Dae-gil"), "LCK 2025 Spring")
        .await?;
    // Unrelated player
    test.roster()
        .insert_scoreboard_row("Chovy", None, "LCK 2024 Spring")
        .await?;

    let appearances = AppearanceService::new(&test.state.db);
    let result = appearances.list_player_appearances("Deokdam").await;

    assert!(result.is_ok());
    let rows = result.unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.name != "Chovy"));

    Ok(())
}

/// Querying by a retired alias returns the same rows as querying by the
/// current name
#[tokio::test]
async fn alias_and_current_name_queries_agree() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(
        entity::prelude::Player,
        entity::prelude::PlayerRedirect,
        entity::prelude::ScoreboardPlayer
    )?;
    test.roster().insert_player("Faker", "Faker").await?;
    test.roster()
        .insert_player_redirect("SKT Faker", "Faker")
        .await?;
    test.roster()
        .insert_scoreboard_row("SKT Faker", None, "LCK 2016 Summer")
        .await?;
    test.roster()
        .insert_scoreboard_row("Faker", None, "LCK 2024 Summer")
        .await?;

    let appearances = AppearanceService::new(&test.state.db);

    let by_current = appearances.list_player_appearances("Faker").await;
    let by_alias = appearances.list_player_appearances("SKT Faker").await;

    assert!(by_current.is_ok());
    assert!(by_alias.is_ok());
    let by_current = by_current.unwrap();
    assert_eq!(by_current.len(), 2);
    assert_eq!(by_current, by_alias.unwrap());

    Ok(())
}
