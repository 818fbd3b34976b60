//! Index construction: flat upstream collections in, immutable snapshot out.
//!
//! A rebuild is total — there is no diffing or incremental update. At
//! catalog scale (hundreds to low thousands of items) a full rebuild is
//! cheaper than being clever, and it makes every snapshot self-contained.
//!
//! Construction never fails: items pointing at unknown shops are dropped
//! (an item has no life outside its shop), missing fields just shrink the
//! alias sets.

use crate::normalize::normalize;
use crate::types::{
    CatalogIndex, CategoryRecord, ItemRecord, SearchableItem, SearchableShop, ShopRecord,
    UserRecord,
};
use std::collections::HashMap;

/// Build a searchable snapshot from the raw collections.
///
/// Pure and synchronous: fetch the collections first, then call this once
/// per data refresh. Searches in flight against an older snapshot are
/// unaffected.
pub fn build_index(
    shops: &[ShopRecord],
    items: &[ItemRecord],
    categories: &[CategoryRecord],
    users: &[UserRecord],
) -> CatalogIndex {
    let mut by_shop: HashMap<&str, Vec<SearchableItem>> = HashMap::new();
    for record in items {
        by_shop
            .entry(record.shop_id.as_str())
            .or_default()
            .push(SearchableItem::from_record(record));
    }

    let shops = shops
        .iter()
        .map(|record| SearchableShop {
            id: record.id.clone(),
            slug: if record.slug.is_empty() {
                slugify(&record.name)
            } else {
                record.slug.clone()
            },
            name: record.name.clone(),
            description: record.description.clone(),
            address: record.address.clone(),
            tax_id: record.tax_id.clone(),
            phone: record.phone.clone(),
            items: by_shop.remove(record.id.as_str()).unwrap_or_default(),
        })
        .collect();

    CatalogIndex {
        shops,
        categories: categories.to_vec(),
        users: users.to_vec(),
    }
}

/// Derive a URL slug from a shop name when upstream didn't send one.
fn slugify(name: &str) -> String {
    normalize(name)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
