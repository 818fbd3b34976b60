//! Bilingual fuzzy search and query understanding for marketplace catalogs.
//!
//! Kerko reconciles free-text queries — Albanian or English, slang,
//! diacritics, typos, embedded size filters — against heterogeneous catalog
//! records (shops, items, categories, users) and returns ranked, grouped
//! matches plus a "did you mean" fallback when nothing matched.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ normalize.rs │────▶│   dict.rs   │────▶│   types.rs   │
//! │ (fold, token,│     │ (facets,    │     │ (records,    │
//! │  stop words) │     │  expansion) │     │  searchables)│
//! └──────────────┘     └─────────────┘     └──────┬───────┘
//!        │                    │                   │
//!        ▼                    ▼                   ▼
//! ┌──────────────┐     ┌─────────────┐     ┌──────────────┐
//! │   size.rs    │────▶│  index.rs   │────▶│  matcher.rs  │
//! │ (query split,│     │ (build_index│     │ (weighted    │
//! │  5 shapes)   │     │  snapshot)  │     │  fuzzy rank) │
//! └──────────────┘     └─────────────┘     └──────┬───────┘
//!                                                 │
//!                            ┌─────────────┐      ▼
//!                            │ suggest.rs  │◀── search.rs
//!                            │ (did you    │    (entry point,
//!                            │  mean)      │     Idle/Searching)
//!                            └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use kerko::{build_index, search, ItemRecord, ShopRecord};
//!
//! let shops = vec![ShopRecord { id: "s1".into(), name: "Triwears".into(), ..Default::default() }];
//! let items = vec![ItemRecord {
//!     id: "i1".into(),
//!     shop_id: "s1".into(),
//!     name: "Basic Tee".into(),
//!     color: Some("black".into()),
//!     ..Default::default()
//! }];
//!
//! let index = build_index(&shops, &items, &[], &[]);
//! // "zi" is Albanian for black; canonical expansion bridges the languages
//! let response = search(&index, "zi");
//! assert_eq!(response.groups.items[0].entity.id, "i1");
//! ```
//!
//! The engine is pure and synchronous: fetch your collections, build a
//! snapshot, query it. Rebuilds are total; snapshots are immutable.

mod dict;
mod fuzzy;
mod index;
mod matcher;
mod normalize;
mod scoring;
mod search;
mod size;
mod suggest;
mod types;

// Re-exports for public API
pub use dict::{concepts_in_text, expand_tokens, resolve, resolve_in_facet, Facet, FACETS};
pub use fuzzy::{bounded_levenshtein, levenshtein, similarity};
pub use index::build_index;
pub use matcher::{match_entities, search_items};
pub use normalize::{normalize, remove_stop_words, tokenize};
pub use scoring::{SearchTarget, SIMILARITY_FLOOR, SUGGESTION_FLOOR};
pub use search::search;
pub use size::{
    canonical_size, extract_size_tokens, parse_size_query, SizeField, SizeVariant, LETTER_SIZES,
};
pub use suggest::suggest;
pub use types::{
    CatalogIndex, CategoryRecord, EntityKind, ItemRecord, Query, Scored, SearchGroups,
    SearchResponse, SearchableItem, SearchableShop, ShopRecord, UserRecord,
};
