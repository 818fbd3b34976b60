// Copyright 2025-present Tregu Engineering
// SPDX-License-Identifier: Apache-2.0

//! Size-token parsing: queries and the five legacy catalog shapes.
//!
//! The legal size vocabulary is fixed: standard letter codes (XXXS…6XL) or
//! numeric codes of 1–3 digits with an optional single decimal place
//! ("38", "38.5", "104"). European decimal commas are accepted and folded
//! to a dot.
//!
//! Catalog items have accumulated five ways of declaring sizes over the
//! years: a single string, a delimited string, a list of strings, a map
//! whose keys are sizes, and a list of variant objects each carrying a
//! size. [`SizeField`] models them as an untagged union; each shape has its
//! own extractor, and [`extract_size_tokens`] folds whichever one applies
//! into a set. Malformed data contributes nothing — there is no error path.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Standard letter sizes, smallest to largest.
pub const LETTER_SIZES: [&str; 12] = [
    "XXXS", "XXS", "XS", "S", "M", "L", "XL", "XXL", "XXXL", "4XL", "5XL", "6XL",
];

/// Normalize one candidate against the legal size vocabulary.
///
/// Letter sizes are trimmed and upper-cased; numerics must be 1–3 digits
/// with at most one decimal place. Anything else is rejected silently.
pub fn canonical_size(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let upper = trimmed.to_uppercase();
    if LETTER_SIZES.contains(&upper.as_str()) {
        return Some(upper);
    }

    // Numeric: 1-3 digits, optional single decimal, comma tolerated
    let dotted = trimmed.replace(',', ".");
    let (int_part, frac_part) = match dotted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (dotted.as_str(), None),
    };
    let int_ok = (1..=3).contains(&int_part.len()) && int_part.bytes().all(|b| b.is_ascii_digit());
    let frac_ok = match frac_part {
        None => true,
        Some(f) => f.len() == 1 && f.bytes().all(|b| b.is_ascii_digit()),
    };
    if int_ok && frac_ok {
        Some(dotted)
    } else {
        None
    }
}

/// Split a raw query into explicit size tokens and the remaining free text.
///
/// Each whitespace-delimited piece is tested against the size vocabulary;
/// matches go to the size set, the rest is rejoined in original order with
/// spacing collapsed. A token that is both a valid size and a word ("M") is
/// always treated as a size — callers wanting the literal word must not
/// route it through here.
pub fn parse_size_query(raw: &str) -> (BTreeSet<String>, String) {
    let mut sizes = BTreeSet::new();
    let mut rest: Vec<&str> = Vec::new();
    for piece in raw.split_whitespace() {
        match canonical_size(piece) {
            Some(size) => {
                sizes.insert(size);
            }
            None => rest.push(piece),
        }
    }
    (sizes, rest.join(" "))
}

/// One entry of the variant-object size shape. Unknown keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeVariant {
    #[serde(default, alias = "label")]
    pub size: Option<String>,
}

/// The five legacy size shapes, as one untagged union.
///
/// Deserialization tries the variants in order: a bare string covers both
/// the single and the delimited shape, a list of strings before a list of
/// objects, and a size-keyed map last.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeField {
    /// `"M"` or `"S,M,L"` / `"S/M/L"`
    Scalar(String),
    /// `["S", "M", "L"]`
    List(Vec<String>),
    /// `[{"size": "M", "stock": 3}, …]`
    Variants(Vec<SizeVariant>),
    /// `{"M": 3, "L": 0}`
    Keyed(BTreeMap<String, Value>),
}

/// Delimiters seen in the delimited-string shape.
const SCALAR_DELIMITERS: [char; 4] = [',', ';', '/', '|'];

fn from_scalar(value: &str) -> BTreeSet<String> {
    value
        .split(SCALAR_DELIMITERS)
        .filter_map(canonical_size)
        .collect()
}

fn from_list(values: &[String]) -> BTreeSet<String> {
    values.iter().filter_map(|v| canonical_size(v)).collect()
}

fn from_variants(variants: &[SizeVariant]) -> BTreeSet<String> {
    variants
        .iter()
        .filter_map(|v| v.size.as_deref().and_then(canonical_size))
        .collect()
}

fn from_keys(map: &BTreeMap<String, Value>) -> BTreeSet<String> {
    map.keys().filter_map(|k| canonical_size(k)).collect()
}

/// Accumulate every valid size token an item declares, whatever shape its
/// size data takes. Missing or malformed data yields an empty set.
pub fn extract_size_tokens(field: Option<&SizeField>) -> BTreeSet<String> {
    match field {
        None => BTreeSet::new(),
        Some(SizeField::Scalar(value)) => from_scalar(value),
        Some(SizeField::List(values)) => from_list(values),
        Some(SizeField::Variants(variants)) => from_variants(variants),
        Some(SizeField::Keyed(map)) => from_keys(map),
    }
}
