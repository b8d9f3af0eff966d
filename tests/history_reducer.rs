mod common;

use common::{key, Sequence};
use dealerdesk::nav::{Direction, NavKey};
use dealerdesk::ui::history::{HistoryIntent, HistoryReducer, HistoryState};
use dealerdesk::ui::mvi::Reducer;

fn apply(state: HistoryState, intents: Vec<HistoryIntent>) -> HistoryState {
    intents.into_iter().fold(state, HistoryReducer::reduce)
}

#[test]
fn push_appends_and_moves_forward() {
    let state = HistoryReducer::reduce(
        HistoryState::default(),
        HistoryIntent::Push(key("orders")),
    );
    assert_eq!(state.entries(), &[NavKey::home(), key("orders")]);
    assert_eq!(state.current(), &key("orders"));
    assert_eq!(state.direction(), Direction::Forward);
}

#[test]
fn push_does_not_deduplicate() {
    let state = apply(
        HistoryState::default(),
        vec![
            HistoryIntent::Push(key("orders")),
            HistoryIntent::Push(key("orders")),
        ],
    );
    assert_eq!(state.len(), 3);
}

#[test]
fn projects_scenario_pops_back_to_projects() {
    let state = apply(
        HistoryState::default(),
        vec![
            HistoryIntent::Push(key("projects")),
            HistoryIntent::Push(key("projects/lead-42")),
            HistoryIntent::Pop,
        ],
    );
    assert_eq!(state.entries(), &[NavKey::home(), key("projects")]);
    assert_eq!(state.direction(), Direction::Backward);
}

#[test]
fn pop_at_root_is_noop() {
    let before = HistoryState::default();
    let after = HistoryReducer::reduce(before.clone(), HistoryIntent::Pop);
    assert_eq!(after, before);
    assert_eq!(after.direction(), Direction::Forward);
}

#[test]
fn reset_truncates_to_home_and_moves_backward() {
    let state = apply(
        HistoryState::default(),
        vec![
            HistoryIntent::Push(key("orders")),
            HistoryIntent::Push(key("orders/450080")),
            HistoryIntent::Push(key("resources/lead-times")),
            HistoryIntent::ResetToRoot,
        ],
    );
    assert_eq!(state.entries(), &[NavKey::home()]);
    assert_eq!(state.direction(), Direction::Backward);
}

#[test]
fn reset_from_root_still_moves_backward() {
    let state = HistoryReducer::reduce(HistoryState::default(), HistoryIntent::ResetToRoot);
    assert_eq!(state.entries(), &[NavKey::home()]);
    assert_eq!(state.direction(), Direction::Backward);
}

#[test]
fn random_sequences_match_a_vec_model() {
    let keys = ["orders", "samples/cart", "products/category/casegoods", "home"];
    for seed in 1..=50 {
        let mut seq = Sequence::new(seed);
        let mut state = HistoryState::default();
        let mut model: Vec<&str> = vec!["home"];

        for _ in 0..200 {
            let intent = match seq.below(5) {
                0 | 1 => {
                    let k = keys[seq.below(keys.len() as u64) as usize];
                    model.push(k);
                    HistoryIntent::Push(key(k))
                }
                2 | 3 => {
                    if model.len() > 1 {
                        model.pop();
                    }
                    HistoryIntent::Pop
                }
                _ => {
                    model = vec!["home"];
                    HistoryIntent::ResetToRoot
                }
            };
            state = HistoryReducer::reduce(state, intent);

            assert!(state.len() >= 1);
            let actual: Vec<&str> = state.entries().iter().map(NavKey::as_str).collect();
            assert_eq!(actual, model, "seed {seed}");
        }
    }
}
