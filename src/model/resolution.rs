use std::collections::BTreeSet;

use serde::Serialize;

/// Outcome of resolving a free-form name to a canonical entity.
///
/// `aliases` always contains `canonical_id` itself plus every redirect name
/// pointing at it; downstream fact-table queries match against the whole set.
/// The ordered set keeps repeated resolutions of the same input identical.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub canonical_id: String,
    pub aliases: BTreeSet<String>,
}
