//! Root application component with routing and the shared store context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{detail::DetailPage, favorites::FavoritesPage, showcase::ShowcasePage};

/// The page-lifetime favorites store, shared by every page through context.
///
/// Browser storage handles are not `Send`, so the store lives in local
/// storage of the reactive arena and is only created on hydrate.
#[cfg(feature = "hydrate")]
pub type SharedStore = StoredValue<crate::store::LocalStore, LocalStorage>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css"
                />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css"
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-dark text-light">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// `detail.html` keeps the path stored in each favorite's `link`.
///
/// Opens nothing itself: the store is created closed and opens on the first
/// operation a page issues.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    #[cfg(feature = "hydrate")]
    provide_context::<SharedStore>(StoredValue::new_local(crate::store::LocalStore::new(
        crate::store::IdbEngine,
    )));

    view! {
        <Stylesheet id="leptos" href="/pkg/favorites.css"/>
        <Title text="Sneaker Showcase"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ShowcasePage/>
                    <Route path=StaticSegment("favorites") view=FavoritesPage/>
                    <Route path=StaticSegment("detail.html") view=DetailPage/>
                </Routes>
            </main>
        </Router>
    }
}
