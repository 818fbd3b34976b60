//! The single entry point a UI layer calls per keystroke or submission.
//!
//! The pipeline has exactly two states. **Idle**: the query is blank — all
//! groups come back empty, nothing is computed, no suggestion. **Searching**:
//! the query is decomposed (sizes out, normalize, stop words, canonical
//! expansion) and matched per entity type; if every group is empty, the
//! suggestion engine gets one shot at a "did you mean".
//!
//! Idempotent: the same snapshot and query always produce the same
//! response. Callers driving this from a search box are expected to
//! debounce keystrokes; the engine itself does no rate limiting.

use crate::matcher::{match_entities, search_items};
use crate::suggest::suggest;
use crate::types::{CatalogIndex, Query, SearchGroups, SearchResponse};

/// Run one query against a snapshot: grouped, ranked matches, or a single
/// suggestion when nothing matched.
pub fn search(index: &CatalogIndex, raw_query: &str) -> SearchResponse {
    let query = Query::parse(raw_query);
    if query.is_blank() {
        return SearchResponse::default();
    }

    let groups = SearchGroups {
        shops: match_entities(index.shops.iter(), &query),
        items: search_items(index, &query),
        categories: match_entities(index.categories.iter(), &query),
        users: match_entities(index.users.iter(), &query),
    };

    let suggestion = if groups.is_empty() {
        suggest(index, raw_query)
    } else {
        String::new()
    };

    SearchResponse { groups, suggestion }
}
