//! The "did you mean" fallback.
//!
//! Only consulted when every per-entity-type search came back empty. One
//! permissive similarity pass over a flat corpus — every shop name, item
//! name, alias token, category name and user name — and the single best
//! candidate's original string wins. An empty corpus, or a query too far
//! from everything, yields an empty string; there is no error case.

use crate::fuzzy::similarity;
use crate::normalize::normalize;
use crate::scoring::SUGGESTION_FLOOR;
use crate::types::CatalogIndex;

/// Produce at most one alternate query string for a miss.
///
/// Ties break toward the shorter candidate, then lexicographically, so the
/// suggestion is deterministic for a given snapshot.
pub fn suggest(index: &CatalogIndex, raw_query: &str) -> String {
    let needle = normalize(raw_query);
    if needle.is_empty() {
        return String::new();
    }

    let mut best: Option<(f64, String)> = None;
    let mut consider = |candidate: &str| {
        if candidate.trim().is_empty() {
            return;
        }
        let score = similarity(&needle, &normalize(candidate), SUGGESTION_FLOOR);
        if score <= 0.0 {
            return;
        }
        let better = match &best {
            None => true,
            Some((top, current)) => {
                score > *top
                    || (score == *top && candidate.len() < current.len())
                    || (score == *top && candidate.len() == current.len() && candidate < current.as_str())
            }
        };
        if better {
            best = Some((score, candidate.to_string()));
        }
    };

    for shop in &index.shops {
        consider(&shop.name);
        for item in &shop.items {
            consider(&item.name);
            for token in &item.alias_tokens {
                consider(token);
            }
        }
    }
    for category in &index.categories {
        consider(&category.name);
    }
    for user in &index.users {
        consider(&user.name);
    }

    best.map(|(_, candidate)| candidate).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_index;
    use crate::types::{CategoryRecord, ItemRecord, ShopRecord, UserRecord};

    fn sample_index() -> CatalogIndex {
        let shops = vec![ShopRecord {
            id: "s1".into(),
            name: "Triwears".into(),
            ..ShopRecord::default()
        }];
        let items = vec![ItemRecord {
            id: "i1".into(),
            shop_id: "s1".into(),
            name: "Fustan Elegant".into(),
            ..ItemRecord::default()
        }];
        let categories = vec![CategoryRecord {
            name: "Dresses".into(),
        }];
        let users = vec![UserRecord {
            id: "u1".into(),
            name: "Drita Hoxha".into(),
            ..UserRecord::default()
        }];
        build_index(&shops, &items, &categories, &users)
    }

    #[test]
    fn near_miss_suggests_the_original_string() {
        let index = sample_index();
        assert_eq!(suggest(&index, "fustann"), "fustan");
    }

    #[test]
    fn empty_corpus_suggests_nothing() {
        let index = CatalogIndex::default();
        assert_eq!(suggest(&index, "anything"), "");
    }

    #[test]
    fn blank_query_suggests_nothing() {
        let index = sample_index();
        assert_eq!(suggest(&index, "   "), "");
    }

    #[test]
    fn hopeless_query_suggests_nothing() {
        let index = sample_index();
        assert_eq!(suggest(&index, "qqqqqqqqqqqqqqqq"), "");
    }

    #[test]
    fn suggestion_is_deterministic() {
        let index = sample_index();
        let first = suggest(&index, "tirwears");
        assert_eq!(first, suggest(&index, "tirwears"));
        assert_eq!(first, "Triwears");
    }
}
