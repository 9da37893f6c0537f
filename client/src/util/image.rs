//! Card image fallback.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// Shown in place of a product image that fails to load.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400/343a40/ffffff?text=No+Image";

/// Source to swap in after `current` failed to load. `None` once the
/// placeholder itself is showing, so a broken placeholder cannot loop.
#[must_use]
pub fn fallback_image(current: &str) -> Option<&'static str> {
    (current != PLACEHOLDER_IMAGE).then_some(PLACEHOLDER_IMAGE)
}
