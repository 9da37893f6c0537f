//! Products shown on the showcase page.
//!
//! The showcase is static: each product carries the attributes its favorite
//! toggle hands to the store, plus a price label for display.

use crate::store::ProductAttributes;

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// One product card on the showcase page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogProduct {
    pub attributes: ProductAttributes,
    pub price: &'static str,
}

const PRODUCTS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "nike-air-max-90",
        "Nike Air Max 90",
        "/images/air-max-90.svg",
        "The icon that started it all, with a visible Air unit and waffle outsole.",
        "$130",
    ),
    (
        "nike-air-force-1",
        "Nike Air Force 1 '07",
        "/images/air-force-1.svg",
        "Crisp leather, classic hoops silhouette, all-day cushioning.",
        "$115",
    ),
    (
        "nike-dunk-low",
        "Nike Dunk Low Retro",
        "/images/dunk-low.svg",
        "Court-born and street-proven, in two-tone leather.",
        "$120",
    ),
    (
        "air-jordan-1-mid",
        "Air Jordan 1 Mid",
        "/images/jordan-1-mid.svg",
        "The heritage of the AJ1 with a mid-top collar for extra support.",
        "$125",
    ),
    (
        "nike-pegasus-41",
        "Nike Pegasus 41",
        "/images/pegasus-41.svg",
        "Responsive ReactX foam for daily road runs.",
        "$140",
    ),
    (
        "nike-blazer-mid-77",
        "Nike Blazer Mid '77",
        "/images/blazer-mid-77.svg",
        "Vintage basketball style with a suede-trimmed upper.",
        "$105",
    ),
];

/// Every showcase product, in display order.
#[must_use]
pub fn showcase_products() -> Vec<CatalogProduct> {
    PRODUCTS
        .iter()
        .map(|&(id, title, image, description, price)| CatalogProduct {
            attributes: ProductAttributes {
                id: id.to_owned(),
                title: title.to_owned(),
                image: image.to_owned(),
                description: description.to_owned(),
            },
            price,
        })
        .collect()
}

/// The showcase product with `id`, if any. Backs the detail page.
#[must_use]
pub fn find_product(id: &str) -> Option<CatalogProduct> {
    showcase_products().into_iter().find(|p| p.attributes.id == id)
}
