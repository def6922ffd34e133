//! Data access layer repositories.
//!
//! Repositories wrap a borrowed [`sea_orm::DatabaseConnection`] and expose the
//! read queries the services need. All reference and fact tables are read-only
//! to this crate; ingestion is owned by an external process.

pub mod fact;
pub mod player;
pub mod team;

use sea_orm::DbErr;

/// Lookup seam shared by the player and team reference tables.
///
/// The resolver runs the same fallback chain for both entity kinds; each
/// repository implements these three queries against its own pair of tables.
pub(crate) trait RedirectLookup {
    /// Exact, case-sensitive redirect lookup. Returns the target overview page.
    async fn find_redirect_target(&self, name: &str) -> Result<Option<String>, DbErr>;

    /// Case-insensitive canonical lookup. Returns the stored overview page
    /// with its original casing.
    async fn find_canonical_page(&self, name: &str) -> Result<Option<String>, DbErr>;

    /// Every redirect name currently pointing at the given overview page.
    async fn list_redirect_names(&self, overview_page: &str) -> Result<Vec<String>, DbErr>;
}
