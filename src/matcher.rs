//! Approximate matching of an expanded query against weighted entity fields.
//!
//! For each expanded query token, a target's best contribution is the
//! highest `weight × similarity` over all of its field tokens; a target's
//! relevance is the sum of those contributions across query tokens, so
//! covering more of the query always ranks higher than covering less.
//! Targets with no contributing token are discarded.
//!
//! Ties break by shorter display text (a tighter match) and then by id, so
//! ranking is deterministic for a given index snapshot.
//!
//! Purely functional: nothing here mutates the index or keeps state
//! between calls.

use crate::fuzzy::similarity;
use crate::normalize::{normalize, tokenize};
use crate::scoring::{SearchTarget, SIMILARITY_FLOOR};
use crate::types::{CatalogIndex, Query, Scored, SearchableItem};
use std::cmp::Ordering;

/// Score one set of targets against a parsed query.
///
/// The query's expanded tokens are compared against each target's weighted
/// fields; anything scoring zero is dropped and the rest come back ranked.
pub fn match_entities<'a, T, I>(targets: I, query: &Query) -> Vec<Scored<T>>
where
    T: SearchTarget + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if query.expanded_tokens.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<Scored<T>> = Vec::new();
    for target in targets {
        let fields: Vec<(f64, Vec<String>)> = target
            .weighted_fields()
            .into_iter()
            .map(|(weight, text)| (weight, tokenize(&normalize(&text))))
            .filter(|(_, tokens)| !tokens.is_empty())
            .collect();

        let score = relevance(&fields, &query.expanded_tokens);
        if score > 0.0 {
            hits.push(Scored {
                score,
                display: target.display().to_string(),
                entity: target.clone(),
            });
        }
    }

    rank(&mut hits);
    hits
}

/// Sum, over query tokens, of the best weighted field contribution.
fn relevance(fields: &[(f64, Vec<String>)], query_tokens: &[String]) -> f64 {
    query_tokens
        .iter()
        .map(|qt| {
            fields
                .iter()
                .map(|(weight, field_tokens)| {
                    let best = field_tokens
                        .iter()
                        .map(|ft| similarity(qt, ft, SIMILARITY_FLOOR))
                        .fold(0.0, f64::max);
                    weight * best
                })
                .fold(0.0, f64::max)
        })
        .sum()
}

fn rank<T: SearchTarget>(hits: &mut [Scored<T>]) {
    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.display.len().cmp(&b.display.len()))
            .then_with(|| a.entity.sort_id().cmp(b.entity.sort_id()))
    });
}

/// Item search with the size pre-filter.
///
/// When the query declares explicit sizes, candidates shrink to items whose
/// `size_tokens` cover all of them before any fuzzy scoring happens. A
/// size-only query ("M L") returns that filtered set as-is — the filter is
/// the whole answer, there is nothing left to rank.
pub fn search_items(index: &CatalogIndex, query: &Query) -> Vec<Scored<SearchableItem>> {
    let candidates: Vec<&SearchableItem> = if query.size_tokens.is_empty() {
        index.items().collect()
    } else {
        index
            .items()
            .filter(|item| query.size_tokens.is_subset(&item.size_tokens))
            .collect()
    };

    if !query.size_tokens.is_empty() && query.expanded_tokens.is_empty() {
        return candidates
            .into_iter()
            .map(|item| Scored {
                score: 1.0,
                display: item.name.clone(),
                entity: item.clone(),
            })
            .collect();
    }

    match_entities(candidates, query)
}
