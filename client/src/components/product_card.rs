//! Showcase product card with its favorite toggle control.

use leptos::prelude::*;

use crate::catalog::CatalogProduct;
use crate::components::card_image::CardImage;
use crate::store::ProductAttributes;
use crate::sync::FavoriteState;

/// A product card. The toggle renders `state` and hands the product's
/// attributes to `on_toggle` when clicked.
#[component]
pub fn ProductCard(
    product: CatalogProduct,
    #[prop(into)] state: Signal<FavoriteState>,
    on_toggle: Callback<ProductAttributes>,
) -> impl IntoView {
    let CatalogProduct { attributes, price } = product;
    let id = attributes.id.clone();
    let title = attributes.title.clone();
    let image = attributes.image.clone();
    let description = attributes.description.clone();

    view! {
        <div class="col-md-6 col-lg-4">
            <div class="card h-100 bg-secondary text-light product-card">
                <CardImage src=image alt=title.clone()/>
                <div class="card-body">
                    <h5 class="card-title">{title}</h5>
                    <p class="card-text">{description}</p>
                    <p class="card-text fw-bold">{price}</p>
                    <button
                        class=move || format!("btn add-to-favorite {}", state.get().class())
                        data-product-id=id
                        on:click=move |_| on_toggle.run(attributes.clone())
                    >
                        <i class=move || state.get().icon()></i>
                        " "
                        {move || state.get().label()}
                    </button>
                </div>
            </div>
        </div>
    }
}
