use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    Playing,
    Won,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Handle returned by [`GameSession::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u32);

type Listener = Box<dyn FnMut(&Board)>;

/// Owns the current board and replaces it wholesale on every move.
///
/// Every update is computed from the board held at the moment it is applied, so moves never build on a stale copy.
/// Listeners run after each committed move, in subscription order.
pub struct GameSession {
    board: Board,
    move_count: u32,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u32,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            move_count: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn from_config(config: BoardConfig, seed: u64) -> Self {
        Self::new(RandomBoardGenerator::new(seed).generate(config))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn state(&self) -> GameState {
        if self.board.has_won() {
            GameState::Won
        } else {
            GameState::Playing
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn flip(&mut self, coords: Coord2) -> Result<FlipOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.update(|board| board.flip_cells_around(coords))
    }

    /// Replaces the board with `f(current)`.
    ///
    /// Fails without touching anything when the game is already won or when `f` returns a board of a different
    /// size.
    pub fn update<F>(&mut self, f: F) -> Result<FlipOutcome>
    where
        F: FnOnce(&Board) -> Board,
    {
        self.check_not_finished()?;

        let next = f(&self.board);
        if next.size() != self.board.size() {
            return Err(GameError::InvalidBoardShape);
        }

        self.board = next;
        self.move_count = self.move_count.saturating_add(1);
        log::trace!("board after move {}:\n{}", self.move_count, self.board);
        self.notify();

        Ok(if self.board.has_won() {
            log::debug!("board cleared after {} moves", self.move_count);
            FlipOutcome::Won
        } else {
            FlipOutcome::Flipped
        })
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Board) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription = self.next_subscription.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns whether a listener was actually removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let Self {
            board, listeners, ..
        } = self;
        for (_, listener) in listeners.iter_mut() {
            listener(board);
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("move_count", &self.move_count)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::{Cell, RefCell};

    fn session(rows: &[&[bool]]) -> GameSession {
        GameSession::new(Board::from_rows(rows).unwrap())
    }

    #[test]
    fn flip_commits_new_board_and_counts_moves() {
        let mut session = session(&[&[true, true, true], &[true, true, true]]);

        assert_eq!(session.flip((0, 0)).unwrap(), FlipOutcome::Flipped);

        assert_eq!(session.move_count(), 1);
        assert_eq!(session.board().lit_count(), 3);
        assert_eq!(session.state(), GameState::Playing);
    }

    #[test]
    fn clearing_board_finishes_game() {
        let mut session = session(&[&[true, true]]);

        assert_eq!(session.flip((0, 1)).unwrap(), FlipOutcome::Won);

        assert_eq!(session.state(), GameState::Won);
        assert!(session.is_finished());
        assert_eq!(session.flip((0, 0)), Err(GameError::AlreadyEnded));
        assert_eq!(session.move_count(), 1);
    }

    #[test]
    fn game_state_defaults_to_playing() {
        assert_eq!(GameState::default(), GameState::Playing);
        assert!(!GameState::default().is_finished());
        assert!(GameState::Won.is_finished());
    }

    #[test]
    fn already_dark_board_starts_won() {
        let session = session(&[&[false, false], &[false, false]]);

        assert_eq!(session.state(), GameState::Won);
    }

    #[test]
    fn flip_outside_board_is_rejected_without_changes() {
        let mut session = session(&[&[true, false], &[false, true]]);
        let before = session.board().clone();

        assert_eq!(session.flip((2, 0)), Err(GameError::InvalidCoords));

        assert_eq!(session.board(), &before);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn update_must_keep_board_shape() {
        let mut session = session(&[&[true, false]]);

        let result = session.update(|_| Board::filled((2, 2), true).unwrap());

        assert_eq!(result, Err(GameError::InvalidBoardShape));
        assert_eq!(session.size(), (1, 2));
    }

    #[test]
    fn previous_board_stays_valid_after_update() {
        let mut session = session(&[&[true, false, true]]);
        let snapshot = session.board().clone();

        session.flip((0, 1)).unwrap();

        assert_eq!(snapshot, Board::from_rows(&[[true, false, true]]).unwrap());
        assert_eq!(session.board(), &Board::from_rows(&[[false, true, false]]).unwrap());
    }

    #[test]
    fn listeners_see_each_committed_board() {
        let mut session = session(&[&[true, true, false]]);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let id = {
            let seen = seen.clone();
            session.subscribe(move |board| seen.borrow_mut().push(board.lit_count()))
        };

        session.flip((0, 2)).unwrap();
        assert_eq!(session.flip((5, 5)), Err(GameError::InvalidCoords));
        assert!(session.unsubscribe(id));
        assert!(!session.unsubscribe(id));
        session.flip((0, 2)).unwrap();

        assert_eq!(*seen.borrow(), [2]);
    }

    #[test]
    fn listeners_run_in_subscription_order() {
        let mut session = session(&[&[true, true]]);
        let order = Rc::new(Cell::new(0));

        for expected in 0..3 {
            let order = order.clone();
            session.subscribe(move |_| {
                assert_eq!(order.get(), expected);
                order.set(expected + 1);
            });
        }

        session.flip((0, 0)).unwrap();

        assert_eq!(order.get(), 3);
    }

    #[test]
    fn from_config_uses_seeded_generator() {
        let config = BoardConfig::default();

        let a = GameSession::from_config(config, 99);
        let b = GameSession::from_config(config, 99);

        assert_eq!(a.board(), b.board());
        assert_eq!(a.size(), (5, 5));
    }
}
