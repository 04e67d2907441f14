//! Tests for the render-ready view of a game.

use timetravel_tictactoe::{Coordinates, GameState, Intent, ViewOptions};

fn sample_game() -> GameState {
    GameState::new()
        .apply_all([Intent::PlayMove(4), Intent::PlayMove(0), Intent::PlayMove(5)])
        .expect("valid intents")
}

#[test]
fn test_move_labels_ascending() {
    let view = sample_game().view(ViewOptions::default());
    let labels: Vec<_> = view.moves.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "Go to game start",
            "Go to move #1 (1,1)",
            "Go to move #2 (0,0)",
            "Go to move #3 (2,1)",
        ]
    );
    assert_eq!(view.moves[3].coordinates, Some(Coordinates::new(2, 1)));
    assert_eq!(view.sort_toggle_label, "Sort history in descending order");
}

#[test]
fn test_move_labels_without_coordinates() {
    let opts = ViewOptions {
        show_coordinates: false,
        ..ViewOptions::default()
    };
    let view = sample_game().view(opts);
    assert_eq!(view.moves[2].label, "Go to move #2");
}

#[test]
fn test_descending_order_reverses_display_only() {
    let state = sample_game().jump_to_step(1).unwrap();
    let ascending = state.view(ViewOptions::default());
    let descending = state.toggle_sort_order().view(ViewOptions::default());

    let steps: Vec<_> = descending.moves.iter().map(|m| m.step).collect();
    assert_eq!(steps, [3, 2, 1, 0]);
    assert_eq!(descending.sort_toggle_label, "Sort history in ascending order");

    let current_asc: Vec<_> = ascending.moves.iter().filter(|m| m.is_current).collect();
    let current_desc: Vec<_> = descending.moves.iter().filter(|m| m.is_current).collect();
    assert_eq!(current_asc.len(), 1);
    assert_eq!(current_asc, current_desc);
    assert_eq!(current_desc[0].step, 1);

    assert_eq!(ascending.board, descending.board);
    assert_eq!(ascending.status, descending.status);
}

#[test]
fn test_view_serializes_to_json() {
    let view = sample_game().view(ViewOptions::default());
    let json = serde_json::to_value(&view).expect("serializable view");
    assert_eq!(json["current_step"], 3);
    assert_eq!(json["moves"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["status"]["NextPlayer"], "O");
}
