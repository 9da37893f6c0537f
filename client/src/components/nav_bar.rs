//! Top navigation between the showcase and the favorites listing.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="navbar navbar-dark bg-dark px-3">
            <A href="/" attr:class="navbar-brand">
                "Sneaker Showcase"
            </A>
            <A href="/favorites" attr:class="nav-link text-light">
                <i class="fas fa-heart"></i>
                " Favorites"
            </A>
        </nav>
    }
}
