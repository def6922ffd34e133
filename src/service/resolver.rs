//! Canonical identity resolution.
//!
//! Maps a free-form display name to the stable `overview_page` slug of a
//! player or team, plus the complete alias set that downstream fact-table
//! queries must search against. Resolution is a pure read over the reference
//! tables: repeated calls against unchanged data return identical results.

use std::collections::BTreeSet;

use sea_orm::DatabaseConnection;

use crate::{
    data::{player::PlayerRepository, team::TeamRepository, RedirectLookup},
    error::{resolve::ResolveError, Error},
    model::resolution::Resolution,
};

pub struct ResolverService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResolverService<'a> {
    /// Creates a new instance of [`ResolverService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolve a player name to its canonical slug and full alias set
    pub async fn resolve_player(&self, input: &str) -> Result<Resolution, Error> {
        self.resolve(&PlayerRepository::new(self.db), input).await
    }

    /// Resolve a team name to its canonical slug and full alias set
    pub async fn resolve_team(&self, input: &str) -> Result<Resolution, Error> {
        self.resolve(&TeamRepository::new(self.db), input).await
    }

    /// Fallback chain, in strict order:
    ///
    /// 1. Exact, case-sensitive redirect lookup. A redirect row is a curated
    ///    historical identity link and always wins over a relaxed-casing
    ///    canonical match.
    /// 2. Case-insensitive lookup against the canonical `overview_page`.
    /// 3. Aggregate every redirect name for the canonical slug, union the
    ///    slug itself and (on a step-1 hit) the original input.
    /// 4. Both lookups missed: `EntityNotFound`.
    async fn resolve<R: RedirectLookup>(
        &self,
        repo: &R,
        input: &str,
    ) -> Result<Resolution, Error> {
        let name = input.trim();
        if name.is_empty() {
            return Err(Error::InvalidName(input.to_string()));
        }

        let (canonical_id, matched_redirect) = match repo.find_redirect_target(name).await? {
            Some(target) => (target, true),
            None => match repo.find_canonical_page(name).await? {
                Some(page) => {
                    if page != name {
                        tracing::warn!(
                            input = name,
                            canonical = %page,
                            "resolved via case-insensitive canonical fallback"
                        );
                    }
                    (page, false)
                }
                None => return Err(ResolveError::EntityNotFound(name.to_string()).into()),
            },
        };

        let mut aliases: BTreeSet<String> = repo
            .list_redirect_names(&canonical_id)
            .await?
            .into_iter()
            .collect();
        aliases.insert(canonical_id.clone());
        if matched_redirect {
            aliases.insert(name.to_string());
        }

        tracing::debug!(
            input = name,
            canonical = %canonical_id,
            alias_count = aliases.len(),
            "resolved entity"
        );

        Ok(Resolution {
            canonical_id,
            aliases,
        })
    }
}
