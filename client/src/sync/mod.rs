//! View Synchronizer: keeps rendered favorite controls in step with the store.
//!
//! DESIGN
//! ======
//! A synchronizer is built per page with an explicit `PageMode` that decides
//! which targets exist: the showcase page has toggle controls, the favorites
//! page has the listing. Operations aimed at a target the page lacks resolve
//! to `RenderTargetMissing` and are skipped quietly.
//!
//! Every operation is a straight sequence of awaits (read, write, re-render)
//! with no lock across them. Toggle is read-then-write; two overlapping
//! toggles of one product could interleave, which the single-threaded click
//! dispatch of the page makes a non-issue in practice.
//!
//! ERROR HANDLING
//! ==============
//! Listing failures become the error placeholder. Toggle and refresh failures
//! are returned to the caller, which reports them as a page notice. Nothing
//! here panics or retries.

pub mod view;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use crate::store::{FavoriteItem, LocalStore, ProductAttributes, StoreError};

pub use view::{FavoriteState, ListState, ToggleButton, ViewState, ViewTarget};

/// Which page the synchronizer is driving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageMode {
    /// Product cards with favorite toggle controls.
    Showcase,
    /// The favorites listing with removal controls.
    Favorites,
}

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("render target missing: {0}")]
    RenderTargetMissing(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ViewError {
    /// Store failures are logged by the store where they happen.
    #[must_use]
    pub fn already_logged(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

/// Reconciles one page's view with the Local Store.
#[derive(Clone)]
pub struct ViewSynchronizer<V> {
    store: LocalStore,
    mode: PageMode,
    view: V,
}

impl<V: ViewTarget> ViewSynchronizer<V> {
    pub fn new(store: LocalStore, mode: PageMode, view: V) -> Self {
        Self { store, mode, view }
    }

    #[must_use]
    pub fn mode(&self) -> PageMode {
        self.mode
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Run the page-load behavior for this mode.
    pub async fn start(&self) {
        match self.mode {
            PageMode::Showcase => {
                if let Err(e) = self.initialize_all_buttons().await {
                    self.report_failure(&e);
                }
            }
            PageMode::Favorites => self.render_favorites_list().await,
        }
    }

    // =========================================================================
    // FAVORITES LISTING
    // =========================================================================

    /// Clear the listing, query every favorite, and render cards, the empty
    /// placeholder, or the error placeholder. Never fails.
    pub async fn render_favorites_list(&self) {
        if let Err(missing) = self.require(PageMode::Favorites, "favorites list") {
            log::debug!("skipping favorites render: {missing}");
            return;
        }

        self.view.update_view(|v| v.list = ListState::Loading);
        let list = match self.store.get_all().await {
            Ok(items) if items.is_empty() => ListState::Empty,
            Ok(items) => ListState::Items(items),
            Err(e) => {
                log::error!("displaying favorites failed: {e}");
                ListState::Failed(view::FAILED_LIST_MESSAGE.to_owned())
            }
        };
        self.view.update_view(|v| v.list = list);
    }

    /// Removal control action: delete `id`, then re-render the whole list.
    pub async fn remove_favorite(&self, id: &str) {
        if let Err(missing) = self.require(PageMode::Favorites, "favorites list") {
            log::debug!("skipping favorite removal: {missing}");
            return;
        }

        if let Err(e) = self.store.remove(id).await {
            log::error!("removing favorite {id} failed: {e}");
            self.view
                .update_view(|v| v.list = ListState::Failed(view::FAILED_LIST_MESSAGE.to_owned()));
            return;
        }
        self.render_favorites_list().await;
    }

    // =========================================================================
    // TOGGLE CONTROLS
    // =========================================================================

    /// Show `product_id`'s control as favorited or not, per the store.
    /// No-op when the page has no such control.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Store` if the existence query fails.
    pub async fn refresh_favorite_button(&self, product_id: &str) -> Result<(), ViewError> {
        if let Err(missing) = self.locate_button(product_id) {
            log::debug!("skipping button refresh: {missing}");
            return Ok(());
        }

        let state = FavoriteState::from_exists(self.store.exists(product_id).await?);
        self.view.update_view(|v| {
            v.set_button_state(product_id, state);
        });
        Ok(())
    }

    /// Refresh every toggle control on the page, one at a time, in page order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first refresh failure.
    pub async fn initialize_all_buttons(&self) -> Result<(), ViewError> {
        let ids = self.view.read_view(ViewState::toggle_ids).unwrap_or_default();
        for id in ids {
            self.refresh_favorite_button(&id).await?;
        }
        Ok(())
    }

    /// Flip a product's favorite state: remove it if stored, otherwise store
    /// a record built from `attributes`. Always re-renders its control.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Store` if any store step fails; the control is left
    /// as it was.
    pub async fn on_toggle_favorite(&self, attributes: &ProductAttributes) -> Result<(), ViewError> {
        let product_id = attributes.id.as_str();
        if self.store.exists(product_id).await? {
            self.store.remove(product_id).await?;
        } else {
            self.store.upsert(&FavoriteItem::from_attributes(attributes)).await?;
        }
        self.refresh_favorite_button(product_id).await?;
        self.view.update_view(|v| v.notice = None);
        Ok(())
    }

    /// Surface a failed toggle/refresh as a page notice.
    pub fn report_failure(&self, error: &ViewError) {
        if !error.already_logged() {
            log::warn!("favorites update failed: {error}");
        }
        self.view
            .update_view(|v| v.notice = Some(view::FAILED_TOGGLE_MESSAGE.to_owned()));
    }

    // =========================================================================
    // TARGETS
    // =========================================================================

    fn require(&self, mode: PageMode, target: &str) -> Result<(), ViewError> {
        if self.mode == mode {
            Ok(())
        } else {
            Err(ViewError::RenderTargetMissing(format!("{target} (page mode {:?})", self.mode)))
        }
    }

    fn locate_button(&self, product_id: &str) -> Result<(), ViewError> {
        self.require(PageMode::Showcase, "toggle controls")?;
        let present = self
            .view
            .read_view(|v| v.button(product_id).is_some())
            .unwrap_or(false);
        if present {
            Ok(())
        } else {
            Err(ViewError::RenderTargetMissing(format!("toggle control for {product_id}")))
        }
    }
}
