//! Field weights and relevance constants.
//!
//! Every entity type declares a fixed set of weighted fields through
//! [`SearchTarget`]. The weights encode a hierarchy, not fine-tuned
//! magic: a hit in an item's alias-token set (which already contains the
//! canonical concepts) must outrank the same hit buried in a description.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## FIELD_WEIGHT_DOMINANCE
//! For items: `ALIAS > NAME > BRAND = MODEL > CATEGORY > DESCRIPTION > SIZE_LABEL`.
//! A single exact token match contributes `weight × 1.0`, so reordering the
//! constants reorders results for every canonical-concept query.
//!
//! ## SIMILARITY_FLOOR
//! `similarity` returns either `0.0` or a value `>= floor`, because the edit
//! budget is derived from the floor. Lowering the floor widens typo
//! tolerance for *every* entity type at once.

use crate::types::{
    CategoryRecord, EntityKind, SearchableItem, SearchableShop, UserRecord,
};

/// Minimum per-token similarity for a field to contribute at all.
///
/// 0.72 admits one edit on a 4–7 character token and two on 8+, which
/// covers the one-typo case without letting 3-character tokens match
/// half the catalog.
pub const SIMILARITY_FLOOR: f64 = 0.72;

/// The looser floor used by the did-you-mean pass, where the least-bad
/// candidate is the whole point.
pub const SUGGESTION_FLOOR: f64 = 0.55;

/// Item field weights. Alias tokens first — that set is where canonical
/// expansion lands, so it is the primary fuzzy-match target.
pub mod item_weights {
    pub const ALIAS: f64 = 3.0;
    pub const NAME: f64 = 2.0;
    pub const BRAND: f64 = 1.6;
    pub const MODEL: f64 = 1.6;
    pub const CATEGORY: f64 = 1.3;
    pub const DESCRIPTION: f64 = 1.0;
    pub const SIZE_LABEL: f64 = 0.8;
}

/// Shop field weights.
pub mod shop_weights {
    pub const NAME: f64 = 2.0;
    pub const DESCRIPTION: f64 = 1.2;
    pub const ADDRESS: f64 = 1.0;
    pub const TAX_ID: f64 = 0.8;
    pub const PHONE: f64 = 0.8;
}

/// Category and user field weights.
pub mod misc_weights {
    pub const CATEGORY_NAME: f64 = 2.0;
    pub const USER_NAME: f64 = 2.0;
    pub const USER_EMAIL: f64 = 1.2;
}

/// Anything the matcher can rank: an entity kind, a stable id for
/// tie-breaking, a display string for highlighting, and its weighted
/// fields as raw text (the matcher normalizes and tokenizes them).
pub trait SearchTarget: Clone {
    const KIND: EntityKind;

    fn sort_id(&self) -> &str;
    fn display(&self) -> &str;
    fn weighted_fields(&self) -> Vec<(f64, String)>;
}

impl SearchTarget for SearchableItem {
    const KIND: EntityKind = EntityKind::Item;

    fn sort_id(&self) -> &str {
        &self.id
    }

    fn display(&self) -> &str {
        &self.name
    }

    fn weighted_fields(&self) -> Vec<(f64, String)> {
        let alias = self
            .alias_tokens
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        let size_label = self
            .size_tokens
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        vec![
            (item_weights::ALIAS, alias),
            (item_weights::NAME, self.name.clone()),
            (item_weights::BRAND, self.brand.clone()),
            (item_weights::MODEL, self.model.clone()),
            (item_weights::CATEGORY, self.category.clone()),
            (item_weights::DESCRIPTION, self.description.clone()),
            (item_weights::SIZE_LABEL, size_label),
        ]
    }
}

impl SearchTarget for SearchableShop {
    const KIND: EntityKind = EntityKind::Shop;

    fn sort_id(&self) -> &str {
        &self.id
    }

    fn display(&self) -> &str {
        &self.name
    }

    fn weighted_fields(&self) -> Vec<(f64, String)> {
        vec![
            (shop_weights::NAME, self.name.clone()),
            (shop_weights::DESCRIPTION, self.description.clone()),
            (shop_weights::ADDRESS, self.address.clone()),
            (shop_weights::TAX_ID, self.tax_id.clone()),
            (shop_weights::PHONE, self.phone.clone()),
        ]
    }
}

impl SearchTarget for CategoryRecord {
    const KIND: EntityKind = EntityKind::Category;

    fn sort_id(&self) -> &str {
        &self.name
    }

    fn display(&self) -> &str {
        &self.name
    }

    fn weighted_fields(&self) -> Vec<(f64, String)> {
        vec![(misc_weights::CATEGORY_NAME, self.name.clone())]
    }
}

impl SearchTarget for UserRecord {
    const KIND: EntityKind = EntityKind::User;

    fn sort_id(&self) -> &str {
        &self.id
    }

    fn display(&self) -> &str {
        &self.name
    }

    fn weighted_fields(&self) -> Vec<(f64, String)> {
        vec![
            (misc_weights::USER_NAME, self.name.clone()),
            (misc_weights::USER_EMAIL, self.email.clone()),
        ]
    }
}
