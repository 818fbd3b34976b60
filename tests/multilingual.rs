//! Bilingual scenarios: Albanian queries against English data and back.
//!
//! The catalog is entered in whichever language the shop owner typed, so
//! every cross-language bridge runs through canonical expansion — these
//! tests pin the bridges the UI depends on.

mod common;

use common::{item, sample_catalog, shop};
use kerko::{build_index, normalize, search, ItemRecord};

// ============================================================================
// ALBANIAN QUERY, ENGLISH DATA
// ============================================================================

#[test]
fn albanian_color_word_finds_english_color_field() {
    // "zi" is Albanian for black; the record stores "black"
    let index = build_index(
        &[shop("s1", "Triwears")],
        &[ItemRecord {
            color: Some("black".into()),
            ..item("i1", "s1", "Basic Tee")
        }],
        &[],
        &[],
    );
    let response = search(&index, "zi");
    assert!(response
        .groups
        .items
        .iter()
        .any(|hit| hit.entity.id == "i1"));
}

#[test]
fn albanian_category_word_finds_english_category() {
    let index = sample_catalog();
    // "bluzë" → tshirt → the Basic Tee (category "T-Shirt")
    let response = search(&index, "bluzë");
    assert!(response
        .groups
        .items
        .iter()
        .any(|hit| hit.entity.id == "i1"));
}

#[test]
fn albanian_garment_word_finds_the_hoodie() {
    let index = sample_catalog();
    let response = search(&index, "duks");
    assert_eq!(response.groups.items[0].entity.id, "i4");
}

// ============================================================================
// ENGLISH QUERY, ALBANIAN DATA
// ============================================================================

#[test]
fn english_category_word_finds_albanian_item() {
    let index = sample_catalog();
    // i3 is entered entirely in Albanian ("Fustan Mbrëmjeje", category "Fustan")
    let response = search(&index, "dress");
    assert!(response
        .groups
        .items
        .iter()
        .any(|hit| hit.entity.id == "i3"));
}

#[test]
fn english_color_word_finds_color_listed_in_plural_field() {
    let index = sample_catalog();
    // i3 declares colors (plural field): ["red"]
    let response = search(&index, "red");
    assert!(response
        .groups
        .items
        .iter()
        .any(|hit| hit.entity.id == "i3"));
}

// ============================================================================
// DIACRITICS AND TYPOS
// ============================================================================

#[test]
fn diacritics_are_optional_in_queries() {
    let index = sample_catalog();
    let with = search(&index, "fustan mbrëmjeje");
    let without = search(&index, "fustan mbremjeje");
    assert_eq!(
        with.groups.items.first().map(|h| h.entity.id.clone()),
        without.groups.items.first().map(|h| h.entity.id.clone())
    );
    assert_eq!(with.groups.items[0].entity.id, "i3");
}

#[test]
fn normalized_forms_agree_across_spellings() {
    assert_eq!(normalize("KËPUCË"), normalize("kepuce"));
    assert_eq!(normalize("çantë"), normalize("Cante"));
}

#[test]
fn typo_in_albanian_word_still_matches() {
    let index = sample_catalog();
    // "fustam" is one edit from "fustan"
    let response = search(&index, "fustam");
    assert!(response
        .groups
        .items
        .iter()
        .any(|hit| hit.entity.id == "i3"));
}

// ============================================================================
// SLANG
// ============================================================================

#[test]
fn brand_slang_bridges_both_languages() {
    let index = sample_catalog();
    let response = search(&index, "airmax");
    assert!(response
        .groups
        .items
        .iter()
        .any(|hit| hit.entity.id == "i2"));
}

#[test]
fn style_slang_finds_styled_items() {
    let index = sample_catalog();
    // "bol" is slang for oversized; i4 is "Duks Oversize"
    let response = search(&index, "bol");
    assert!(response
        .groups
        .items
        .iter()
        .any(|hit| hit.entity.id == "i4"));
}

#[test]
fn mixed_language_query_with_sizes() {
    let index = sample_catalog();
    // Size filter plus an Albanian word plus an English concept
    let response = search(&index, "M duks grey");
    let ids: Vec<&str> = response
        .groups
        .items
        .iter()
        .map(|hit| hit.entity.id.as_str())
        .collect();
    assert_eq!(ids, vec!["i4"]);
}
