//! Favorite record and the product attributes it is derived from.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

/// A product the user has favorited. Keyed by `id` in the store.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FavoriteItem {
    pub id: String,
    pub title: String,
    pub image: String,
    pub description: String,
    pub link: String,
}

/// Display attributes carried by a product card's toggle control.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProductAttributes {
    pub id: String,
    pub title: String,
    pub image: String,
    pub description: String,
}

impl FavoriteItem {
    /// Build the record stored when a product card is favorited.
    #[must_use]
    pub fn from_attributes(attributes: &ProductAttributes) -> Self {
        Self {
            id: attributes.id.clone(),
            title: attributes.title.clone(),
            image: attributes.image.clone(),
            description: attributes.description.clone(),
            link: detail_link(&attributes.id),
        }
    }
}

/// Detail page URL for a product id.
#[must_use]
pub fn detail_link(id: &str) -> String {
    format!("detail.html?id={id}")
}
