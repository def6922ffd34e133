//! Manual lookup binary.
//!
//! Resolves a player or team name from the command line and prints the
//! canonical slug, the full alias set, and (for players) fact-table hit
//! counts. This is the consolidated replacement for the pile of one-off
//! debug query scripts the resolver logic grew out of.

use sea_orm::DatabaseConnection;

use riftdex::{
    config::Config,
    data::{player::PlayerRepository, team::TeamRepository},
    error::{resolve::ResolveError, Error},
    service::{appearance::AppearanceService, resolver::ResolverService},
    startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let (kind, name) = match args.as_slice() {
        [_, kind, name] if kind == "player" || kind == "team" => (kind.as_str(), name.as_str()),
        _ => {
            eprintln!("Usage: riftdex <player|team> <name>");
            std::process::exit(2);
        }
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to connect to database");

    if let Err(err) = lookup(&db, kind, name).await {
        match err {
            Error::ResolveError(ResolveError::EntityNotFound(name)) => {
                eprintln!("No {} found for name {:?}", kind, name);
                std::process::exit(1);
            }
            err => {
                eprintln!("Lookup failed: {}", err);
                std::process::exit(1);
            }
        }
    }
}

async fn lookup(db: &DatabaseConnection, kind: &str, name: &str) -> Result<(), Error> {
    let resolver = ResolverService::new(db);

    let resolution = match kind {
        "player" => resolver.resolve_player(name).await?,
        _ => resolver.resolve_team(name).await?,
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&resolution).expect("resolution serializes to JSON")
    );

    if kind == "player" {
        if let Some(player) = PlayerRepository::new(db)
            .get_by_overview_page(&resolution.canonical_id)
            .await?
        {
            println!("current display name: {}", player.name);
        }

        let appearances = AppearanceService::new(db);

        let games = appearances.list_player_appearances(name).await?;
        let tournaments = appearances.list_player_tournaments(name).await?;

        println!("scoreboard appearances: {}", games.len());
        println!("tournaments: {}", tournaments.join(", "));
    } else if let Some(team) = TeamRepository::new(db)
        .get_by_overview_page(&resolution.canonical_id)
        .await?
    {
        println!("current display name: {}", team.name);
    }

    Ok(())
}
