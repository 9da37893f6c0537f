//! Rendered favorites state and the seam it is written through.
//!
//! DESIGN
//! ======
//! The synchronizer never touches markup. It writes a `ViewState` through a
//! `ViewTarget`; Leptos pages hand it an `RwSignal<ViewState>` and render
//! from the signal, tests hand it a `RefCell<ViewState>` and inspect it.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use crate::store::{FavoriteItem, ProductAttributes};

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

pub const EMPTY_LIST_MESSAGE: &str = "You have no favorite sneakers yet.";
pub const FAILED_LIST_MESSAGE: &str = "Failed to load favorites.";
pub const FAILED_TOGGLE_MESSAGE: &str = "Could not update favorites. Please try again.";

/// Favorites listing region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListState {
    /// Cleared, query in flight.
    #[default]
    Loading,
    /// Query returned nothing; the placeholder is shown.
    Empty,
    /// One card per favorite, each with a removal control tagged by id.
    Items(Vec<FavoriteItem>),
    /// Query failed; a single error placeholder is shown.
    Failed(String),
}

/// Favorite state of one product as shown by its toggle control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FavoriteState {
    Favorited,
    #[default]
    NotFavorited,
}

impl FavoriteState {
    #[must_use]
    pub fn from_exists(exists: bool) -> Self {
        if exists { Self::Favorited } else { Self::NotFavorited }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Favorited => "btn-success",
            Self::NotFavorited => "btn-outline-light",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Favorited => "fas fa-heart",
            Self::NotFavorited => "far fa-heart",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Favorited => "Favorited",
            Self::NotFavorited => "Add to Favorites",
        }
    }
}

/// A product card's favorite toggle control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleButton {
    pub product: ProductAttributes,
    pub state: FavoriteState,
}

/// Everything the synchronizer renders on a page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub list: ListState,
    /// Toggle controls in page order.
    pub buttons: Vec<ToggleButton>,
    /// User-visible failure notice, cleared by the next successful toggle.
    pub notice: Option<String>,
}

impl ViewState {
    /// A page carrying one toggle control per product, all not favorited
    /// until the store is queried.
    pub fn with_toggles(products: impl IntoIterator<Item = ProductAttributes>) -> Self {
        Self {
            buttons: products
                .into_iter()
                .map(|product| ToggleButton { product, state: FavoriteState::NotFavorited })
                .collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn button(&self, product_id: &str) -> Option<&ToggleButton> {
        self.buttons.iter().find(|b| b.product.id == product_id)
    }

    #[must_use]
    pub fn toggle_ids(&self) -> Vec<String> {
        self.buttons.iter().map(|b| b.product.id.clone()).collect()
    }

    /// Set the state of `product_id`'s control; returns `false` if absent.
    pub fn set_button_state(&mut self, product_id: &str, state: FavoriteState) -> bool {
        match self.buttons.iter_mut().find(|b| b.product.id == product_id) {
            Some(button) => {
                button.state = state;
                true
            }
            None => false,
        }
    }

    /// Cards currently rendered in the favorites region.
    #[must_use]
    pub fn cards(&self) -> &[FavoriteItem] {
        match &self.list {
            ListState::Items(items) => items,
            _ => &[],
        }
    }
}

// =============================================================================
// VIEW TARGET
// =============================================================================

/// Holder of a `ViewState` the synchronizer can write to.
pub trait ViewTarget {
    /// Apply `f` to the view. Silently dropped if the view is gone.
    fn update_view(&self, f: impl FnOnce(&mut ViewState));

    /// Read from the view; `None` once the view has been torn down.
    fn read_view<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R>;
}

impl ViewTarget for RefCell<ViewState> {
    fn update_view(&self, f: impl FnOnce(&mut ViewState)) {
        f(&mut self.borrow_mut());
    }

    fn read_view<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

impl<T: ViewTarget> ViewTarget for Rc<T> {
    fn update_view(&self, f: impl FnOnce(&mut ViewState)) {
        self.as_ref().update_view(f);
    }

    fn read_view<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R> {
        self.as_ref().read_view(f)
    }
}

impl ViewTarget for RwSignal<ViewState> {
    fn update_view(&self, f: impl FnOnce(&mut ViewState)) {
        let _ = self.try_update(f);
    }

    fn read_view<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}
