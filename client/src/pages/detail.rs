//! Product detail page, the target of a stored favorite's link.
//!
//! Reads `id` from the query string and shows that catalog product with its
//! favorite toggle. Unknown ids render a not-found message.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::catalog::{CatalogProduct, find_product};
use crate::components::product_card::ProductCard;
use crate::store::ProductAttributes;
use crate::sync::ViewState;
#[cfg(feature = "hydrate")]
use crate::sync::{PageMode, ViewSynchronizer};

#[component]
pub fn DetailPage() -> impl IntoView {
    let query = use_query_map();
    let product = move || query.with(|q| q.get("id")).and_then(|id| find_product(&id));

    view! {
        <section class="container py-4">
            {move || match product() {
                Some(product) => view! { <ProductDetail product=product/> }.into_any(),
                None => {
                    view! { <p class="text-center text-muted">"Product not found."</p> }.into_any()
                }
            }}
        </section>
    }
}

#[component]
fn ProductDetail(product: CatalogProduct) -> impl IntoView {
    let page = RwSignal::new(ViewState::with_toggles([product.attributes.clone()]));

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

    let id = product.attributes.id.clone();
    let state = Signal::derive(move || page.with(|p| p.button(&id).map(|b| b.state).unwrap_or_default()));

    view! {
        <Show when=move || page.with(|p| p.notice.is_some())>
            <div class="alert alert-warning" role="alert">
                {move || page.with(|p| p.notice.clone().unwrap_or_default())}
            </div>
        </Show>
        <div class="row justify-content-center" id="product-detail">
            <ProductCard product=product state=state on_toggle=on_toggle/>
        </div>
    }
}
