// Copyright 2025-present Tregu Engineering
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog search index.
//!
//! Two layers live here. *Records* (`ShopRecord`, `ItemRecord`,
//! `CategoryRecord`, `UserRecord`) mirror the flat collections the frontend
//! fetches — camelCase, every field defaulted, aliases for the color-field
//! spellings upstream never agreed on. *Searchables* (`SearchableShop`,
//! `SearchableItem`) are what the indexer derives from them: records plus
//! the normalized `size_tokens` / `alias_tokens` sets the matcher runs on.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **SearchableItem**: `size_tokens ⊆` the legal size vocabulary;
//!   `alias_tokens` always contains the raw normalized tokens of every
//!   textual field, even when nothing maps to a canonical concept.
//! - **SearchableShop**: owns its items for one index build; items never
//!   outlive their shop's snapshot.
//! - **Query**: `expanded_tokens` derive from `non_size_text` only, so a
//!   size-bearing query never fuzzy-matches its own size letters.

use crate::dict::expand_tokens;
use crate::normalize::{normalize, remove_stop_words, tokenize};
use crate::size::{extract_size_tokens, parse_size_query, SizeField};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// RAW RECORDS (upstream shapes)
// =============================================================================

/// A shop as fetched from the marketplace API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopRecord {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub tax_id: String,
    pub phone: String,
    pub logo_url: String,
}

/// A catalog item as fetched from the marketplace API.
///
/// Color and size data are tolerated in every spelling and shape the
/// backend has ever produced; see [`ItemRecord::color_values`] and
/// [`SizeField`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemRecord {
    pub id: String,
    pub shop_id: String,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub images: Vec<String>,
    #[serde(alias = "colour")]
    pub color: Option<String>,
    #[serde(alias = "colours")]
    pub colors: Option<Vec<String>>,
    #[serde(alias = "sizes", alias = "sizeOptions", alias = "variants")]
    pub size: Option<SizeField>,
}

impl ItemRecord {
    /// Every color value the item declares, whichever field spelling the
    /// upstream used. Accessors are tried in a fixed order; the first one
    /// that yields anything wins.
    pub fn color_values(&self) -> Vec<&str> {
        type Probe = fn(&ItemRecord) -> Vec<&str>;
        const PROBES: &[Probe] = &[
            |item| item.color.as_deref().into_iter().collect(),
            |item| {
                item.colors
                    .as_ref()
                    .map(|cs| cs.iter().map(String::as_str).collect())
                    .unwrap_or_default()
            },
        ];
        PROBES
            .iter()
            .map(|probe| probe(self))
            .find(|values| !values.is_empty())
            .unwrap_or_default()
    }
}

/// A catalog category. Upstream carries nothing but the label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryRecord {
    pub name: String,
}

/// A marketplace user, searchable by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

// =============================================================================
// SEARCHABLES (index-owned, rebuilt on every data load)
// =============================================================================

/// An item flattened for matching: display fields plus the derived token
/// sets. Owned by the index; read-only to the matcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableItem {
    pub id: String,
    pub shop_id: String,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    /// Normalized sizes the item is available in. Always a subset of the
    /// legal size vocabulary; malformed upstream data leaves it empty.
    pub size_tokens: BTreeSet<String>,
    /// Raw tokens of every textual field ∪ expanded canonical concepts ∪
    /// size tokens. The matcher's primary target.
    pub alias_tokens: BTreeSet<String>,
}

impl SearchableItem {
    /// Derive a searchable item from its record. Pure; missing fields just
    /// produce a smaller alias set.
    pub fn from_record(record: &ItemRecord) -> Self {
        use crate::dict::{concepts_in_text, resolve_in_facet, Facet};

        let size_tokens = extract_size_tokens(record.size.as_ref());

        let mut alias_tokens: BTreeSet<String> = BTreeSet::new();
        // Raw normalized tokens of every textual field, unconditionally —
        // literal substring matches must keep working even when no token
        // maps to a concept.
        for field in [
            &record.name,
            &record.brand,
            &record.model,
            &record.description,
            &record.category,
        ] {
            alias_tokens.extend(tokenize(&normalize(field)));
        }

        // Concepts from the labeled fields
        for concept in resolve_in_facet(Facet::Category, &record.category) {
            alias_tokens.insert(concept.to_string());
        }
        for concept in resolve_in_facet(Facet::Brand, &record.brand) {
            alias_tokens.insert(concept.to_string());
        }
        for color in record.color_values() {
            for concept in resolve_in_facet(Facet::Color, color) {
                alias_tokens.insert(concept.to_string());
            }
        }

        // Style and color cues embedded in free text
        let prose = normalize(&format!("{} {}", record.name, record.description));
        for facet in [Facet::Style, Facet::Color] {
            for concept in concepts_in_text(facet, &prose) {
                alias_tokens.insert(concept.to_string());
            }
        }

        // Sizes share the token space, lowercased like everything else
        alias_tokens.extend(size_tokens.iter().map(|s| normalize(s)));

        SearchableItem {
            id: record.id.clone(),
            shop_id: record.shop_id.clone(),
            name: record.name.clone(),
            brand: record.brand.clone(),
            model: record.model.clone(),
            description: record.description.clone(),
            category: record.category.clone(),
            price: record.price,
            image: record.images.first().cloned().unwrap_or_default(),
            size_tokens,
            alias_tokens,
        }
    }
}

/// A shop flattened for matching, owning its searchable items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableShop {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub tax_id: String,
    pub phone: String,
    pub items: Vec<SearchableItem>,
}

/// An immutable index snapshot, rebuilt in full on every data refresh.
///
/// In-flight searches keep using the snapshot they were handed even if a
/// newer one is being built — there is no shared mutable state between
/// snapshots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogIndex {
    pub shops: Vec<SearchableShop>,
    pub categories: Vec<CategoryRecord>,
    pub users: Vec<UserRecord>,
}

impl CatalogIndex {
    /// Every searchable item across every shop.
    pub fn items(&self) -> impl Iterator<Item = &SearchableItem> {
        self.shops.iter().flat_map(|shop| shop.items.iter())
    }
}

// =============================================================================
// QUERY AND RESULTS
// =============================================================================

/// One search invocation's decomposed query.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub raw: String,
    /// Explicit size tokens pulled out of the raw text.
    pub size_tokens: BTreeSet<String>,
    /// The raw text minus size tokens, original order, spacing collapsed.
    pub non_size_text: String,
    /// Normalized, stop-word-free tokens plus their canonical concepts.
    pub expanded_tokens: Vec<String>,
}

impl Query {
    /// Decompose a raw query: size split, then normalize → tokenize →
    /// stop words → canonical expansion.
    pub fn parse(raw: &str) -> Self {
        let (size_tokens, non_size_text) = parse_size_query(raw);
        let tokens = remove_stop_words(tokenize(&normalize(&non_size_text)));
        let expanded_tokens = expand_tokens(&tokens);
        Query {
            raw: raw.to_string(),
            size_tokens,
            non_size_text,
            expanded_tokens,
        }
    }

    /// Blank queries put the pipeline in its idle state.
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

/// Which entity family a match belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Shop,
    Item,
    Category,
    User,
}

/// A matched entity with its relevance score and the display text used for
/// highlighting. Scores are non-negative; higher is better.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scored<T> {
    pub entity: T,
    pub score: f64,
    pub display: String,
}

/// Ranked matches, grouped per entity type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchGroups {
    pub shops: Vec<Scored<SearchableShop>>,
    pub items: Vec<Scored<SearchableItem>>,
    pub categories: Vec<Scored<CategoryRecord>>,
    pub users: Vec<Scored<UserRecord>>,
}

impl SearchGroups {
    /// True when no entity type produced a hit.
    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
            && self.items.is_empty()
            && self.categories.is_empty()
            && self.users.is_empty()
    }
}

/// What one `search` call hands back to the UI: grouped hits plus the
/// "did you mean" fallback (empty unless every group is empty).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub groups: SearchGroups,
    pub suggestion: String,
}
