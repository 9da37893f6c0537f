//! Favorites listing card with its removal control.

use leptos::prelude::*;

use crate::components::card_image::CardImage;
use crate::store::FavoriteItem;

/// A stored favorite. The removal control passes the favorite's id to
/// `on_remove`.
#[component]
pub fn FavoriteCard(item: FavoriteItem, on_remove: Callback<String>) -> impl IntoView {
    let FavoriteItem { id, title, image, description, link } = item;
    let remove_id = id.clone();

    view! {
        <div class="col-md-6 col-lg-3">
            <div class="card h-100 bg-secondary text-light favorite-card">
                <CardImage src=image alt=title.clone()/>
                <div class="card-body">
                    <h5 class="card-title">{title}</h5>
                    <p class="card-text">{description}</p>
                    <a href=link class="btn btn-info mt-2">
                        "View Details"
                    </a>
                    <button
                        class="btn btn-danger mt-2 remove-from-favorite"
                        data-product-id=id
                        on:click=move |_| on_remove.run(remove_id.clone())
                    >
                        <i class="fas fa-trash-alt"></i>
                        " Remove from Favorites"
                    </button>
                </div>
            </div>
        </div>
    }
}
