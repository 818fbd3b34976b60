//! Shared catalog builders for the scenario tests.

use kerko::{CatalogIndex, CategoryRecord, ItemRecord, ShopRecord, SizeField, UserRecord};

pub fn shop(id: &str, name: &str) -> ShopRecord {
    ShopRecord {
        id: id.into(),
        name: name.into(),
        ..ShopRecord::default()
    }
}

pub fn item(id: &str, shop_id: &str, name: &str) -> ItemRecord {
    ItemRecord {
        id: id.into(),
        shop_id: shop_id.into(),
        name: name.into(),
        ..ItemRecord::default()
    }
}

pub fn category(name: &str) -> CategoryRecord {
    CategoryRecord { name: name.into() }
}

pub fn user(id: &str, name: &str, email: &str) -> UserRecord {
    UserRecord {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        ..UserRecord::default()
    }
}

/// A small but realistic bilingual catalog: two shops, mixed-language item
/// data, the color/size fields in their assorted upstream shapes.
pub fn sample_catalog() -> CatalogIndex {
    let shops = vec![
        shop("s1", "Triwears"),
        shop("s2", "Dyqani i Dritës"),
    ];

    let items = vec![
        ItemRecord {
            category: "T-Shirt".into(),
            color: Some("black".into()),
            size: Some(SizeField::Scalar("S,M,L".into())),
            ..item("i1", "s1", "Basic Tee")
        },
        ItemRecord {
            brand: "Nike".into(),
            model: "Air Max 90".into(),
            category: "Sneakers".into(),
            size: Some(SizeField::List(vec!["42".into(), "43".into()])),
            ..item("i2", "s1", "Air Max 90")
        },
        ItemRecord {
            category: "Fustan".into(),
            colors: Some(vec!["red".into()]),
            description: "Fustan elegant për mbrëmje".into(),
            size: Some(SizeField::Scalar("M".into())),
            ..item("i3", "s2", "Fustan Mbrëmjeje")
        },
        ItemRecord {
            brand: "Adidas".into(),
            category: "Hoodie".into(),
            color: Some("grey".into()),
            size: Some(SizeField::Scalar("M/L/XL".into())),
            ..item("i4", "s2", "Duks Oversize")
        },
    ];

    let categories = vec![category("T-Shirt"), category("Sneakers"), category("Dresses")];
    let users = vec![
        user("u1", "Drita Hoxha", "drita@tregu.al"),
        user("u2", "Arben Krasniqi", "arben@tregu.al"),
    ];

    kerko::build_index(&shops, &items, &categories, &users)
}
