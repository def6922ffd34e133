use riftdex::service::resolver::ResolverService;
use riftdex_test_utils::prelude::*;

/// Team resolution is idempotent over unchanged reference data
#[tokio::test]
async fn repeated_resolution_is_identical() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Team, entity::prelude::TeamRedirect)?;
    test.roster().insert_team("T1", "T1").await?;
    test.roster()
        .insert_team_redirect("SK Telecom T1", "T1")
        .await?;

    let resolver = ResolverService::new(&test.state.db);

    let first = resolver.resolve_team("SK Telecom T1").await;
    let second = resolver.resolve_team("SK Telecom T1").await;

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(first.unwrap(), second.unwrap());

    Ok(())
}

/// A miscased team slug resolves through the canonical table and picks up
/// every historical name
#[tokio::test]
async fn miscased_slug_aggregates_all_redirects() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Team, entity::prelude::TeamRedirect)?;
    test.roster().insert_team("T1", "T1").await?;
    test.roster()
        .insert_team_redirect("SK Telecom T1", "T1")
        .await?;
    test.roster()
        .insert_team_redirect("SKT T1 K", "T1")
        .await?;

    let resolver = ResolverService::new(&test.state.db);
    let resolution = resolver.resolve_team("t1").await;

    assert!(resolution.is_ok());
    let resolution = resolution.unwrap();

    assert_eq!(resolution.canonical_id, "T1");
    for alias in ["T1", "SK Telecom T1", "SKT T1 K"] {
        assert!(resolution.aliases.contains(alias));
    }

    Ok(())
}
