use super::*;

fn air_max() -> ProductAttributes {
    ProductAttributes {
        id: "a1".to_owned(),
        title: "Air Max".to_owned(),
        image: "http://x/a.png".to_owned(),
        description: "desc".to_owned(),
    }
}

#[test]
fn from_attributes_copies_display_fields() {
    let item = FavoriteItem::from_attributes(&air_max());
    assert_eq!(item.id, "a1");
    assert_eq!(item.title, "Air Max");
    assert_eq!(item.image, "http://x/a.png");
    assert_eq!(item.description, "desc");
}

#[test]
fn from_attributes_links_to_detail_page() {
    let item = FavoriteItem::from_attributes(&air_max());
    assert_eq!(item.link, "detail.html?id=a1");
}

#[test]
fn favorite_item_serializes_with_flat_field_names() {
    let item = FavoriteItem::from_attributes(&air_max());
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["id"], "a1");
    assert_eq!(value["title"], "Air Max");
    assert_eq!(value["link"], "detail.html?id=a1");
    let back: FavoriteItem = serde_json::from_value(value).unwrap();
    assert_eq!(back, item);
}
