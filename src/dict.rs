// Copyright 2025-present Tregu Engineering
// SPDX-License-Identifier: Apache-2.0

//! Canonical concept dictionaries and token expansion.
//!
//! A *canonical concept* is one stable lowercase key (`black`, `tshirt`,
//! `nike`, `oversized`) standing for one real-world attribute, no matter
//! which language or slang was used to name it. Concepts are partitioned
//! into four facets:
//!
//! | Facet    | Concepts for                   | Example aliases          |
//! |----------|--------------------------------|--------------------------|
//! | Color    | garment colors                 | "zi", "e zezë", "black"  |
//! | Style    | fit/style cues                 | "oversize", "i ngushtë"  |
//! | Category | garment kinds                  | "duks", "hoodie", "tee"  |
//! | Brand    | brands and their product slang | "airmax", "yeezy", "nb"  |
//!
//! Alias tables are written as literal data entry (diacritics and all) and
//! inverted once, at first use, into `normalized alias → concepts` maps.
//! The tables are never mutated after that — read-only process-wide state.
//!
//! # Invariants
//!
//! - Every alias, once normalized, is a key in its facet's reverse map and
//!   points at least to its own concept.
//! - Every concept key is also an alias of itself.
//! - The same normalized string may be an alias in more than one facet, in
//!   which case expansion yields the concepts from every facet it matches.

use crate::normalize::{normalize, tokenize};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The four attribute families canonical concepts are partitioned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    Color,
    Style,
    Category,
    Brand,
}

/// All facets, in expansion order.
pub const FACETS: [Facet; 4] = [Facet::Color, Facet::Style, Facet::Category, Facet::Brand];

/// `concept → aliases` table type. Aliases are literal surface forms in
/// either language or slang; they are normalized at inversion time, not here.
type AliasTable = &'static [(&'static str, &'static [&'static str])];

static COLOR_ALIASES: AliasTable = &[
    ("black", &["zi", "i zi", "e zezë", "zeze", "te zeza"]),
    ("white", &["bardhë", "i bardhë", "e bardhë", "te bardha"]),
    ("red", &["kuq", "i kuq", "e kuqe", "te kuqe"]),
    ("blue", &["blu", "kaltër", "i kaltër", "e kaltër", "navy"]),
    ("green", &["jeshil", "jeshile", "gjelbër", "e gjelbër"]),
    ("yellow", &["verdhë", "i verdhë", "e verdhë"]),
    ("grey", &["gray", "gri", "hiri"]),
    ("pink", &["rozë", "roze"]),
    ("purple", &["vjollcë", "lejla"]),
    ("brown", &["kafe", "bojëkafe"]),
    ("orange", &["portokalli"]),
    ("beige", &["bezhë", "krem"]),
];

static STYLE_ALIASES: AliasTable = &[
    ("oversized", &["oversize", "baggy", "i gjerë", "e gjerë", "bol"]),
    ("slim", &["slim fit", "i ngushtë", "e ngushtë", "skinny"]),
    ("vintage", &["retro", "i vjetër", "second hand", "sekondare"]),
    ("casual", &["sportive", "të përditshme", "ditore"]),
    ("elegant", &["elegante", "zyrtare", "formal"]),
    ("streetwear", &["street", "urban"]),
];

static CATEGORY_ALIASES: AliasTable = &[
    ("tshirt", &["t-shirt", "t shirt", "tee", "bluzë", "maicë", "maice"]),
    ("shirt", &["këmishë", "kemishe"]),
    ("jeans", &["xhinse", "xhins", "denim"]),
    ("trousers", &["pants", "pantallona"]),
    ("dress", &["fustan", "fustane"]),
    ("skirt", &["fund", "funde"]),
    ("jacket", &["xhaketë", "xhakete", "kurtkë"]),
    ("coat", &["pallto", "palltot"]),
    ("hoodie", &["duks", "duksa", "kapuçon"]),
    ("sweater", &["pulovër", "pulover", "triko", "jumper"]),
    ("shoes", &["këpucë", "kepuce"]),
    ("sneakers", &["atlete", "patika", "trainers"]),
    ("shorts", &["pantallona të shkurtra", "të shkurtra"]),
    ("hat", &["kapelë", "kapele", "cap"]),
    ("bag", &["çantë", "cante", "çanta"]),
];

static BRAND_ALIASES: AliasTable = &[
    ("nike", &["air max", "airmax", "air force", "af1", "jordan", "jordans", "dunk"]),
    ("adidas", &["yeezy", "samba", "gazelle", "ultraboost", "stan smith"]),
    ("puma", &["suede classic"]),
    ("converse", &["all star", "allstar", "chucks", "chuck taylor"]),
    ("newbalance", &["new balance", "nb", "550"]),
    ("levis", &["levi's", "levi", "501"]),
    ("zara", &[]),
    ("hm", &["h&m", "h m"]),
    ("northface", &["the north face", "north face", "tnf"]),
    ("lacoste", &["croc", "krokodili"]),
];

/// Reverse map for one facet: `normalized alias → concepts`.
type ReverseMap = HashMap<String, Vec<&'static str>>;

fn invert(table: AliasTable) -> ReverseMap {
    let mut map = ReverseMap::new();
    for (concept, aliases) in table {
        // A concept is always an alias of itself
        for surface in std::iter::once(concept).chain(aliases.iter()) {
            let key = normalize(surface);
            if key.is_empty() {
                continue;
            }
            let concepts = map.entry(key).or_default();
            if !concepts.contains(concept) {
                concepts.push(concept);
            }
        }
    }
    map
}

static COLOR_LOOKUP: Lazy<ReverseMap> = Lazy::new(|| invert(COLOR_ALIASES));
static STYLE_LOOKUP: Lazy<ReverseMap> = Lazy::new(|| invert(STYLE_ALIASES));
static CATEGORY_LOOKUP: Lazy<ReverseMap> = Lazy::new(|| invert(CATEGORY_ALIASES));
static BRAND_LOOKUP: Lazy<ReverseMap> = Lazy::new(|| invert(BRAND_ALIASES));

fn reverse_map(facet: Facet) -> &'static ReverseMap {
    match facet {
        Facet::Color => &COLOR_LOOKUP,
        Facet::Style => &STYLE_LOOKUP,
        Facet::Category => &CATEGORY_LOOKUP,
        Facet::Brand => &BRAND_LOOKUP,
    }
}

/// Resolve one normalized token to every concept it aliases, across all
/// four facets. Unknown tokens resolve to nothing — that is not an error,
/// they simply stay on the literal-match path.
pub fn resolve(token: &str) -> Vec<&'static str> {
    let mut concepts = Vec::new();
    for facet in FACETS {
        if let Some(found) = reverse_map(facet).get(token) {
            for c in found {
                if !concepts.contains(c) {
                    concepts.push(*c);
                }
            }
        }
    }
    concepts
}

/// Resolve a whole field value within one facet.
///
/// Tries the full normalized string first (multi-word aliases like
/// "air max" live here), then each of its tokens. Used at index time for
/// labeled fields: category label → Category, brand → Brand, color → Color.
pub fn resolve_in_facet(facet: Facet, raw: &str) -> Vec<&'static str> {
    let map = reverse_map(facet);
    let whole = normalize(raw);
    let mut concepts = Vec::new();
    let mut push = |found: &Vec<&'static str>| {
        for c in found {
            if !concepts.contains(c) {
                concepts.push(*c);
            }
        }
    };
    if let Some(found) = map.get(&whole) {
        push(found);
    }
    for token in tokenize(&whole) {
        if let Some(found) = map.get(&token) {
            push(found);
        }
    }
    concepts
}

/// Scan normalized free text for embedded aliases of one facet.
///
/// Matches on word boundaries, so the multi-word aliases ("e zezë",
/// "air max") are found inside names and descriptions. The dictionaries are
/// small enough that a linear scan over the reverse map beats anything
/// cleverer at this scale.
pub fn concepts_in_text(facet: Facet, text: &str) -> Vec<&'static str> {
    if text.is_empty() {
        return Vec::new();
    }
    let padded = format!(" {} ", text);
    let mut concepts: Vec<&'static str> = Vec::new();
    for (alias, found) in reverse_map(facet) {
        if padded.contains(&format!(" {} ", alias)) {
            for c in found {
                if !concepts.contains(c) {
                    concepts.push(c);
                }
            }
        }
    }
    concepts.sort_unstable();
    concepts
}

/// Expand a token list with every canonical concept any token resolves to.
///
/// Originals are kept (literal substring matching must coexist with
/// concept-level matching), concepts are appended, duplicates dropped,
/// order preserved.
pub fn expand_tokens(tokens: &[String]) -> Vec<String> {
    let mut expanded: Vec<String> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !expanded.contains(token) {
            expanded.push(token.clone());
        }
    }
    for token in tokens {
        for concept in resolve(token) {
            if !expanded.iter().any(|t| t == concept) {
                expanded.push(concept.to_string());
            }
        }
    }
    expanded
}
