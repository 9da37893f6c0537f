use std::collections::HashSet;

use super::*;

#[test]
fn showcase_is_not_empty() {
    assert!(!showcase_products().is_empty());
}

#[test]
fn product_ids_are_unique() {
    let products = showcase_products();
    let ids: HashSet<&str> = products.iter().map(|p| p.attributes.id.as_str()).collect();
    assert_eq!(ids.len(), products.len());
}

#[test]
fn every_product_has_display_attributes() {
    for product in showcase_products() {
        assert!(!product.attributes.title.is_empty(), "{} has no title", product.attributes.id);
        assert!(!product.attributes.image.is_empty(), "{} has no image", product.attributes.id);
        assert!(product.price.starts_with('$'));
    }
}

#[test]
fn every_product_image_ships_with_the_site_assets() {
    let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
    for product in showcase_products() {
        let relative = product.attributes.image.trim_start_matches('/');
        assert!(public.join(relative).is_file(), "{} image missing: {relative}", product.attributes.id);
    }
}

#[test]
fn find_product_resolves_detail_ids() {
    let product = find_product("nike-dunk-low").unwrap();
    assert_eq!(product.attributes.title, "Nike Dunk Low Retro");
    assert!(find_product("missing").is_none());
    assert!(find_product("").is_none());
}

#[test]
fn stored_detail_links_point_at_catalog_products() {
    for product in showcase_products() {
        let link = crate::store::detail_link(&product.attributes.id);
        let id = link.strip_prefix("detail.html?id=").unwrap();
        assert_eq!(find_product(id), Some(product));
    }
}
