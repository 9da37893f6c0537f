//! Card image that swaps to a placeholder when its source fails to load.

use leptos::prelude::*;

use crate::util::image::fallback_image;

#[component]
pub fn CardImage(src: String, alt: String) -> impl IntoView {
    let src = RwSignal::new(src);
    let on_error = move |_| {
        if let Some(fallback) = fallback_image(&src.get_untracked()) {
            src.set(fallback.to_owned());
        }
    };

    view! { <img class="card-img-top" src=move || src.get() alt=alt on:error=on_error/> }
}
