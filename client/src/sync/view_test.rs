use super::*;

fn product(id: &str) -> ProductAttributes {
    ProductAttributes {
        id: id.to_owned(),
        title: format!("Sneaker {id}"),
        image: format!("http://x/{id}.png"),
        description: "desc".to_owned(),
    }
}

#[test]
fn favorite_state_visuals_differ_between_states() {
    let on = FavoriteState::Favorited;
    let off = FavoriteState::NotFavorited;
    assert_eq!(on.class(), "btn-success");
    assert_eq!(off.class(), "btn-outline-light");
    assert_eq!(on.icon(), "fas fa-heart");
    assert_eq!(off.icon(), "far fa-heart");
    assert_ne!(on.label(), off.label());
}

#[test]
fn favorite_state_from_exists() {
    assert_eq!(FavoriteState::from_exists(true), FavoriteState::Favorited);
    assert_eq!(FavoriteState::from_exists(false), FavoriteState::NotFavorited);
}

#[test]
fn with_toggles_keeps_page_order_and_starts_not_favorited() {
    let state = ViewState::with_toggles([product("b2"), product("a1")]);
    assert_eq!(state.toggle_ids(), vec!["b2", "a1"]);
    assert!(state.buttons.iter().all(|b| b.state == FavoriteState::NotFavorited));
    assert_eq!(state.list, ListState::Loading);
    assert_eq!(state.notice, None);
}

#[test]
fn set_button_state_reports_missing_control() {
    let mut state = ViewState::with_toggles([product("a1")]);
    assert!(state.set_button_state("a1", FavoriteState::Favorited));
    assert_eq!(state.button("a1").unwrap().state, FavoriteState::Favorited);
    assert!(!state.set_button_state("zz", FavoriteState::Favorited));
}

#[test]
fn cards_are_empty_unless_items_are_listed() {
    let mut state = ViewState::default();
    assert!(state.cards().is_empty());
    state.list = ListState::Failed(FAILED_LIST_MESSAGE.to_owned());
    assert!(state.cards().is_empty());
}

#[test]
fn refcell_target_reads_and_writes() {
    let target = RefCell::new(ViewState::default());
    target.update_view(|v| v.notice = Some("x".to_owned()));
    assert_eq!(target.read_view(|v| v.notice.clone()), Some(Some("x".to_owned())));
}

#[test]
fn rc_target_delegates_to_inner() {
    let target = Rc::new(RefCell::new(ViewState::default()));
    target.update_view(|v| v.list = ListState::Empty);
    assert_eq!(target.borrow().list, ListState::Empty);
}
