use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::store::{MemoryEngine, detail_link};

type TestView = Rc<RefCell<ViewState>>;

fn product(id: &str, title: &str) -> ProductAttributes {
    ProductAttributes {
        id: id.to_owned(),
        title: title.to_owned(),
        image: format!("http://x/{id}.png"),
        description: "desc".to_owned(),
    }
}

fn air_max_record() -> FavoriteItem {
    FavoriteItem {
        id: "a1".to_owned(),
        title: "Air Max".to_owned(),
        image: "http://x/a.png".to_owned(),
        description: "desc".to_owned(),
        link: "detail.html?id=a1".to_owned(),
    }
}

fn favorites_page(engine: &MemoryEngine) -> ViewSynchronizer<TestView> {
    let view = Rc::new(RefCell::new(ViewState::default()));
    ViewSynchronizer::new(LocalStore::new(engine.clone()), PageMode::Favorites, view)
}

fn showcase_page(engine: &MemoryEngine, products: &[ProductAttributes]) -> ViewSynchronizer<TestView> {
    let view = Rc::new(RefCell::new(ViewState::with_toggles(products.to_vec())));
    ViewSynchronizer::new(LocalStore::new(engine.clone()), PageMode::Showcase, view)
}

fn button_state(sync: &ViewSynchronizer<TestView>, id: &str) -> FavoriteState {
    sync.view().borrow().button(id).unwrap().state
}

// =============================================================
// Favorites listing
// =============================================================

#[tokio::test]
async fn empty_store_renders_placeholder_and_no_cards() {
    let sync = favorites_page(&MemoryEngine::new());
    sync.render_favorites_list().await;
    let view = sync.view().borrow();
    assert_eq!(view.list, ListState::Empty);
    assert!(view.cards().is_empty());
}

#[tokio::test]
async fn stored_favorite_renders_one_card_with_removal_id() {
    let engine = MemoryEngine::new();
    let sync = favorites_page(&engine);
    LocalStore::new(engine.clone()).upsert(&air_max_record()).await.unwrap();

    sync.render_favorites_list().await;
    let view = sync.view().borrow();
    let cards = view.cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "Air Max");
    assert_eq!(cards[0].id, "a1");
}

#[tokio::test]
async fn removing_last_favorite_rerenders_placeholder() {
    let engine = MemoryEngine::new();
    let sync = favorites_page(&engine);
    let store = LocalStore::new(engine.clone());
    store.upsert(&air_max_record()).await.unwrap();
    sync.render_favorites_list().await;

    sync.remove_favorite("a1").await;

    assert!(!store.exists("a1").await.unwrap());
    assert_eq!(sync.view().borrow().list, ListState::Empty);
}

#[tokio::test]
async fn removing_one_of_two_keeps_the_other_card() {
    let engine = MemoryEngine::new();
    let sync = favorites_page(&engine);
    let store = LocalStore::new(engine.clone());
    store.upsert(&air_max_record()).await.unwrap();
    store
        .upsert(&FavoriteItem::from_attributes(&product("b2", "Jordan 1")))
        .await
        .unwrap();

    sync.remove_favorite("a1").await;

    let view = sync.view().borrow();
    assert_eq!(view.cards().len(), 1);
    assert_eq!(view.cards()[0].id, "b2");
}

#[tokio::test]
async fn unavailable_storage_renders_error_placeholder() {
    let sync = favorites_page(&MemoryEngine::unavailable());
    sync.render_favorites_list().await;
    assert_eq!(
        sync.view().borrow().list,
        ListState::Failed(view::FAILED_LIST_MESSAGE.to_owned())
    );
}

#[tokio::test]
async fn failed_remove_renders_error_placeholder() {
    let engine = MemoryEngine::new();
    let sync = favorites_page(&engine);
    sync.render_favorites_list().await;
    engine.set_fail_writes(true);

    sync.remove_favorite("a1").await;
    assert!(matches!(sync.view().borrow().list, ListState::Failed(_)));
}

#[tokio::test]
async fn listing_is_skipped_on_showcase_page() {
    let engine = MemoryEngine::new();
    let sync = showcase_page(&engine, &[product("a1", "Air Max")]);
    sync.render_favorites_list().await;
    assert_eq!(sync.view().borrow().list, ListState::Loading);
    assert_eq!(engine.open_count(), 0);
}

// =============================================================
// Toggle controls
// =============================================================

#[tokio::test]
async fn initialize_all_buttons_reflects_stored_favorites() {
    let engine = MemoryEngine::new();
    LocalStore::new(engine.clone())
        .upsert(&FavoriteItem::from_attributes(&product("b2", "Jordan 1")))
        .await
        .unwrap();
    let sync = showcase_page(&engine, &[product("a1", "Air Max"), product("b2", "Jordan 1")]);

    sync.initialize_all_buttons().await.unwrap();

    assert_eq!(button_state(&sync, "a1"), FavoriteState::NotFavorited);
    assert_eq!(button_state(&sync, "b2"), FavoriteState::Favorited);
}

#[tokio::test]
async fn toggle_favorites_an_unfavorited_product() {
    let engine = MemoryEngine::new();
    let attrs = product("a1", "Air Max");
    let sync = showcase_page(&engine, std::slice::from_ref(&attrs));

    sync.on_toggle_favorite(&attrs).await.unwrap();

    let store = LocalStore::new(engine.clone());
    assert!(store.exists("a1").await.unwrap());
    let stored = store.get_all().await.unwrap();
    assert_eq!(stored, vec![FavoriteItem::from_attributes(&attrs)]);
    assert_eq!(stored[0].link, detail_link("a1"));
    assert_eq!(button_state(&sync, "a1"), FavoriteState::Favorited);
}

#[tokio::test]
async fn toggle_unfavorites_a_favorited_product() {
    let engine = MemoryEngine::new();
    let attrs = product("a1", "Air Max");
    let sync = showcase_page(&engine, std::slice::from_ref(&attrs));

    sync.on_toggle_favorite(&attrs).await.unwrap();
    sync.on_toggle_favorite(&attrs).await.unwrap();

    assert!(!LocalStore::new(engine.clone()).exists("a1").await.unwrap());
    assert_eq!(button_state(&sync, "a1"), FavoriteState::NotFavorited);
}

#[tokio::test]
async fn refresh_without_matching_control_is_a_noop() {
    let engine = MemoryEngine::new();
    let sync = showcase_page(&engine, &[product("a1", "Air Max")]);
    sync.refresh_favorite_button("zz").await.unwrap();
    assert_eq!(engine.open_count(), 0);
}

#[tokio::test]
async fn refresh_is_skipped_on_favorites_page() {
    let engine = MemoryEngine::new();
    let sync = favorites_page(&engine);
    sync.refresh_favorite_button("a1").await.unwrap();
    assert_eq!(engine.open_count(), 0);
}

#[tokio::test]
async fn toggle_with_unavailable_storage_returns_store_error() {
    let attrs = product("a1", "Air Max");
    let sync = showcase_page(&MemoryEngine::unavailable(), std::slice::from_ref(&attrs));

    let err = sync.on_toggle_favorite(&attrs).await.unwrap_err();
    assert!(matches!(err, ViewError::Store(StoreError::StorageUnavailable(_))));
    assert_eq!(button_state(&sync, "a1"), FavoriteState::NotFavorited);
}

#[tokio::test]
async fn reported_failure_sets_notice_and_next_toggle_clears_it() {
    let engine = MemoryEngine::new();
    let attrs = product("a1", "Air Max");
    let sync = showcase_page(&engine, std::slice::from_ref(&attrs));

    engine.set_fail_writes(true);
    let err = sync.on_toggle_favorite(&attrs).await.unwrap_err();
    sync.report_failure(&err);
    assert_eq!(sync.view().borrow().notice.as_deref(), Some(view::FAILED_TOGGLE_MESSAGE));

    engine.set_fail_writes(false);
    sync.on_toggle_favorite(&attrs).await.unwrap();
    assert_eq!(sync.view().borrow().notice, None);
}

#[tokio::test]
async fn start_runs_mode_specific_behavior() {
    let engine = MemoryEngine::new();
    LocalStore::new(engine.clone()).upsert(&air_max_record()).await.unwrap();

    let favorites = favorites_page(&engine);
    favorites.start().await;
    assert_eq!(favorites.view().borrow().cards().len(), 1);

    let showcase = showcase_page(&engine, &[product("a1", "Air Max")]);
    showcase.start().await;
    assert_eq!(button_state(&showcase, "a1"), FavoriteState::Favorited);
    assert_eq!(showcase.view().borrow().list, ListState::Loading);
}

#[tokio::test]
async fn start_with_unavailable_storage_reports_notice() {
    let sync = showcase_page(&MemoryEngine::unavailable(), &[product("a1", "Air Max")]);
    sync.start().await;
    assert!(sync.view().borrow().notice.is_some());
}

#[tokio::test]
async fn refresh_read_failure_keeps_control_and_returns_error() {
    let engine = MemoryEngine::new();
    let sync = showcase_page(&engine, &[product("a1", "Air Max")]);
    sync.on_toggle_favorite(&product("a1", "Air Max")).await.unwrap();

    engine.set_fail_reads(true);
    let err = sync.refresh_favorite_button("a1").await.unwrap_err();
    assert!(matches!(err, ViewError::Store(StoreError::Read(_))));
    assert_eq!(button_state(&sync, "a1"), FavoriteState::Favorited);
}

#[tokio::test]
async fn initialize_all_buttons_stops_at_first_failure() {
    let engine = MemoryEngine::new();
    LocalStore::new(engine.clone())
        .upsert(&FavoriteItem::from_attributes(&product("b2", "Jordan 1")))
        .await
        .unwrap();
    let sync = showcase_page(&engine, &[product("a1", "Air Max"), product("b2", "Jordan 1")]);

    engine.set_fail_reads(true);
    let err = sync.initialize_all_buttons().await.unwrap_err();
    assert!(matches!(err, ViewError::Store(StoreError::Read(_))));
    assert_eq!(button_state(&sync, "b2"), FavoriteState::NotFavorited);
}

#[test]
fn only_store_failures_count_as_already_logged() {
    assert!(ViewError::from(StoreError::Write("aborted".to_owned())).already_logged());
    assert!(!ViewError::RenderTargetMissing("toggle control for a1".to_owned()).already_logged());
}
