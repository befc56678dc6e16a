use lights_out_core::*;

fn start(rows: Coord, cols: Coord, chance: f64) -> GameSession {
    let config = BoardConfig::new(rows, cols, chance).unwrap();
    GameSession::from_config(config, 0x5eed)
}

#[test]
fn single_dark_cell_is_won_without_clicks() {
    let session = start(1, 1, 0.0);

    assert_eq!(session.board(), &Board::from_rows(&[[false]]).unwrap());
    assert_eq!(session.state(), GameState::Won);
    assert_eq!(session.move_count(), 0);
}

#[test]
fn two_lit_cells_clear_in_one_click() {
    let mut session = start(1, 2, 1.0);
    assert_eq!(session.board(), &Board::from_rows(&[[true, true]]).unwrap());
    assert_eq!(session.state(), GameState::Playing);

    assert_eq!(session.flip((0, 0)).unwrap(), FlipOutcome::Won);

    assert_eq!(session.board(), &Board::from_rows(&[[false, false]]).unwrap());
    assert_eq!(session.state(), GameState::Won);
}

#[test]
fn center_click_on_lit_three_by_three_leaves_corners() {
    let mut session = start(3, 3, 1.0);

    assert_eq!(session.flip((1, 1)).unwrap(), FlipOutcome::Flipped);

    let expected = Board::from_rows(&[
        [true, false, true],
        [false, false, false],
        [true, false, true],
    ])
    .unwrap();
    assert_eq!(session.board(), &expected);
    assert!(!session.board().has_won());
    assert_eq!(session.state(), GameState::Playing);
}

#[test]
fn won_game_accepts_no_more_moves() {
    let mut session = start(1, 2, 1.0);
    session.flip((0, 1)).unwrap();

    assert_eq!(session.flip((0, 0)), Err(GameError::AlreadyEnded));
    assert_eq!(session.move_count(), 1);
}

#[test]
fn corners_then_center_solve_lit_three_by_three() {
    let mut session = start(3, 3, 1.0);

    for coords in [(0, 0), (0, 2), (2, 0), (2, 2)] {
        assert_eq!(session.flip(coords).unwrap(), FlipOutcome::Flipped);
    }
    assert_eq!(session.flip((1, 1)).unwrap(), FlipOutcome::Won);

    assert!(session.board().has_won());
    assert_eq!(session.move_count(), 5);
}
