//! Showcase page: product cards with favorite toggles.
//!
//! SYSTEM CONTEXT
//! ==============
//! On hydrate the page refreshes every toggle from the store, one after the
//! other. Clicking a toggle flips the product's stored favorite state and
//! re-renders that control.

use leptos::prelude::*;

use crate::catalog::showcase_products;
use crate::components::product_card::ProductCard;
use crate::store::ProductAttributes;
use crate::sync::ViewState;
#[cfg(feature = "hydrate")]
use crate::sync::{PageMode, ViewSynchronizer};

#[component]
pub fn ShowcasePage() -> impl IntoView {
    let products = showcase_products();
    let page = RwSignal::new(ViewState::with_toggles(products.iter().map(|p| p.attributes.clone())));

    #[cfg(feature = "hydrate")]
    let store = expect_context::<crate::app::SharedStore>();

    #[cfg(feature = "hydrate")]
    {
        let sync = ViewSynchronizer::new(store.get_value(), PageMode::Showcase, page);
        leptos::task::spawn_local(async move { sync.start().await });
    }

    let on_toggle = Callback::new(move |attributes: ProductAttributes| {
        #[cfg(feature = "hydrate")]
        {
            let sync = ViewSynchronizer::new(store.get_value(), PageMode::Showcase, page);
            leptos::task::spawn_local(async move {
                if let Err(e) = sync.on_toggle_favorite(&attributes).await {
                    sync.report_failure(&e);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = attributes;
        }
    });

    view! {
        <section class="container py-4">
            <h2 class="mb-4">"Latest Sneakers"</h2>
            <Show when=move || page.with(|p| p.notice.is_some())>
                <div class="alert alert-warning" role="alert">
                    {move || page.with(|p| p.notice.clone().unwrap_or_default())}
                </div>
            </Show>
            <div class="row g-4" id="product-list">
                {products
                    .into_iter()
                    .map(|product| {
                        let id = product.attributes.id.clone();
                        let state = Signal::derive(move || {
                            page.with(|p| p.button(&id).map(|b| b.state).unwrap_or_default())
                        });
                        view! { <ProductCard product=product state=state on_toggle=on_toggle/> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
