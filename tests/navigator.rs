mod common;

use common::key;
use dealerdesk::nav::{Direction, NavKey};
use dealerdesk::ui::navigator::{BackHandler, BackOutcome, BackResult, Navigator};

/// A screen with an in-screen selection that "back" clears first.
struct SelectionScreen {
    selected: Option<String>,
    calls: usize,
}

impl BackHandler for SelectionScreen {
    fn handle_back(&mut self) -> BackResult {
        self.calls += 1;
        match self.selected.take() {
            Some(_) => BackResult::Handled,
            None => BackResult::Unhandled,
        }
    }
}

#[test]
fn navigate_then_back_returns_to_previous() {
    let mut nav = Navigator::new();
    nav.navigate(key("orders"));
    nav.navigate(key("orders/450080"));
    assert_eq!(nav.current(), &key("orders/450080"));
    assert_eq!(nav.direction(), Direction::Forward);

    assert_eq!(nav.go_back(None), BackOutcome::Popped);
    assert_eq!(nav.current(), &key("orders"));
    assert_eq!(nav.direction(), Direction::Backward);
}

#[test]
fn handled_back_leaves_stack_and_direction_alone() {
    let mut nav = Navigator::new();
    nav.navigate(key("products"));
    let before = nav.history().clone();

    let mut screen = SelectionScreen {
        selected: Some("casegoods".to_string()),
        calls: 0,
    };
    assert_eq!(nav.go_back(Some(&mut screen)), BackOutcome::Intercepted);
    assert_eq!(nav.history(), &before);

    assert_eq!(nav.go_back(Some(&mut screen)), BackOutcome::Popped);
    assert!(nav.current().is_home());
    assert_eq!(screen.calls, 2);
}

#[test]
fn handler_is_consulted_even_at_root() {
    let mut nav = Navigator::new();
    let mut screen = SelectionScreen {
        selected: Some("row-3".to_string()),
        calls: 0,
    };
    assert_eq!(nav.go_back(Some(&mut screen)), BackOutcome::Intercepted);
    assert_eq!(nav.go_back(Some(&mut screen)), BackOutcome::AtRoot);
    assert_eq!(nav.history().entries(), &[NavKey::home()]);
}

#[test]
fn go_home_from_deep_stack() {
    let mut nav = Navigator::new();
    for raw in ["resources", "resources/customer-directory", "orders/1"] {
        nav.navigate(key(raw));
    }
    nav.go_home();
    assert_eq!(nav.history().entries(), &[NavKey::home()]);
    assert_eq!(nav.direction(), Direction::Backward);

    // Leaving home again is a forward move.
    nav.navigate(key("samples"));
    assert_eq!(nav.direction(), Direction::Forward);
}
