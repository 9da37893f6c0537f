//! Favorites page: every stored favorite with a removal control.
//!
//! SYSTEM CONTEXT
//! ==============
//! On hydrate the page renders the listing from the store. Removing a card
//! deletes the favorite and re-renders the whole listing.

use leptos::prelude::*;

use crate::components::favorite_card::FavoriteCard;
use crate::sync::view::EMPTY_LIST_MESSAGE;
use crate::sync::{ListState, ViewState};
#[cfg(feature = "hydrate")]
use crate::sync::{PageMode, ViewSynchronizer};

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let page = RwSignal::new(ViewState::default());

    #[cfg(feature = "hydrate")]
    let store = expect_context::<crate::app::SharedStore>();

    #[cfg(feature = "hydrate")]
    {
        let sync = ViewSynchronizer::new(store.get_value(), PageMode::Favorites, page);
        leptos::task::spawn_local(async move { sync.start().await });
    }

    let on_remove = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let sync = ViewSynchronizer::new(store.get_value(), PageMode::Favorites, page);
            leptos::task::spawn_local(async move { sync.remove_favorite(&id).await });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <section class="container py-4">
            <h2 class="mb-4">"My Favorites"</h2>
            <div class="row g-4" id="favorites-container">
                {move || match page.with(|p| p.list.clone()) {
                    ListState::Loading => {
                        view! { <div class="col-12 text-center">"Loading favorites..."</div> }.into_any()
                    }
                    ListState::Empty => {
                        view! {
                            <p id="no-favorites-message" class="col-12 text-center">
                                {EMPTY_LIST_MESSAGE}
                            </p>
                        }
                            .into_any()
                    }
                    ListState::Items(items) => {
                        items
                            .into_iter()
                            .map(|item| view! { <FavoriteCard item=item on_remove=on_remove/> })
                            .collect_view()
                            .into_any()
                    }
                    ListState::Failed(message) => {
                        view! { <div class="col-12 text-center text-danger">{message}</div> }.into_any()
                    }
                }}
            </div>
        </section>
    }
}
