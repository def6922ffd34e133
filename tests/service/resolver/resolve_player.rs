use riftdex::service::resolver::ResolverService;
use riftdex_test_utils::prelude::*;

/// Resolving the same input twice against unchanged reference data returns an
/// identical resolution
#[tokio::test]
async fn repeated_resolution_is_identical() -> Result<(), TestError> {
    let mut test =
        test_setup_with_tables!(entity::prelude::Player, entity::prelude::PlayerRedirect)?;
    test.roster().insert_player("Faker", "Faker").await?;
    test.roster()
        .insert_player_redirect("SKT Faker", "Faker")
        .await?;
    test.roster()
        .insert_player_redirect("T1 Faker", "Faker")
        .await?;

    let resolver = ResolverService::new(&test.state.db);

    let first = resolver.resolve_player("SKT Faker").await;
    let second = resolver.resolve_player("SKT Faker").await;

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(first.unwrap(), second.unwrap());

    Ok(())
}

/// The alias set contains the canonical slug, the input, and every redirect
/// name pointing at the slug
#[tokio::test]
async fn aggregates_complete_alias_set() -> Result<(), TestError> {
    let mut test =
        test_setup_with_tables!(entity::prelude::Player, entity::prelude::PlayerRedirect)?;
    test.roster().insert_player("Faker", "Faker").await?;
    test.roster()
        .insert_player_redirect("Faker", "Faker")
        .await?;
    test.roster()
        .insert_player_redirect("SKT Faker", "Faker")
        .await?;
    test.roster()
        .insert_player_redirect("T1 Faker", "Faker")
        .await?;

    let resolver = ResolverService::new(&test.state.db);
    let resolution = resolver.resolve_player("SKT Faker").await;

    assert!(resolution.is_ok());
    let resolution = resolution.unwrap();

    assert_eq!(resolution.canonical_id, "Faker");
    for alias in ["Faker", "SKT Faker", "T1 Faker"] {
        assert!(
            resolution.aliases.contains(alias),
            "missing alias {:?} in {:?}",
            alias,
            resolution.aliases
        );
    }

    Ok(())
}

/// A lowercased current name misses the case-sensitive redirect lookup, hits
/// the canonical table case-insensitively, and still aggregates every
/// redirect for the canonical slug
#[tokio::test]
async fn lowercased_input_resolves_through_canonical_fallback() -> Result<(), TestError> {
    let mut test =
        test_setup_with_tables!(entity::prelude::Player, entity::prelude::PlayerRedirect)?;
    test.roster()
        .insert_player("Seo_Dae-gil", "Deokdam")
        .await?;
    test.roster()
        .insert_player_redirect("Deokdam", "Seo_Dae-gil")
        .await?;

    let resolver = ResolverService::new(&test.state.db);
    let resolution = resolver.resolve_player("seo_dae-gil").await;

    assert!(resolution.is_ok());
    let resolution = resolution.unwrap();

    assert_eq!(resolution.canonical_id, "Seo_Dae-gil");
    assert!(resolution.aliases.contains("Deokdam"));
    assert!(resolution.aliases.contains("Seo_Dae-gil"));

    Ok(())
}

/// A redirect hit includes the original input in the alias set even if no
/// redirect row exists for any other spelling
#[tokio::test]
async fn redirect_hit_includes_input_in_aliases() -> Result<(), TestError> {
    let mut test =
        test_setup_with_tables!(entity::prelude::Player, entity::prelude::PlayerRedirect)?;
    test.roster()
        .insert_player_redirect("Deokdam", "Seo_Dae-gil")
        .await?;

    let resolver = ResolverService::new(&test.state.db);
    let resolution = resolver.resolve_player("Deokdam").await;

    assert!(resolution.is_ok());
    let resolution = resolution.unwrap();

    assert!(resolution.aliases.contains("Deokdam"));
    assert!(resolution.aliases.contains("Seo_Dae-gil"));

    Ok(())
}
