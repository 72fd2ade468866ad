//! Game engine: move ledger, turn alternation and terminal-state evaluation
//!
//! [`GameEngine`] is the single authority over one game: it owns the board,
//! the ordered move history and the current outcome. Input adapters call
//! [`GameEngine::attempt_move`] with raw cell coordinates and branch on the
//! returned [`MoveResult`]; the engine never touches any UI.

use crate::board::{Board, Mark};
use crate::config::GameConfig;
use crate::rules;

/// Terminal state of a game.
///
/// Transitions only move forward: `Ongoing` to `Won` or `Drawn`, never
/// back. Only [`GameEngine::reset`] returns to `Ongoing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Won(Mark),
    Drawn,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// One accepted move, as recorded in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub col: usize,
    pub row: usize,
    pub mark: Mark,
    /// 1-based index in play order
    pub seq: usize,
}

/// Why a move attempt was turned down. These are ordinary values the
/// caller branches on, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The game already has a terminal outcome
    GameOver,
    /// Coordinates outside the configured grid
    OutOfBounds,
    /// The target cell already holds a mark
    CellOccupied,
}

/// Result of a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The move was accepted; state was mutated and the outcome
    /// re-evaluated with the placed cell as pivot.
    Placed {
        col: usize,
        row: usize,
        mark: Mark,
        outcome: Outcome,
    },
    /// The move was turned down; no state changed.
    Rejected(RejectReason),
}

impl MoveResult {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Placed { .. })
    }
}

/// State machine for one game of N-in-a-row.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
    winning_line: Option<Vec<(usize, usize)>>,
}

impl GameEngine {
    /// Create a fresh game for a validated configuration.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(config.width(), config.height()),
            history: Vec::with_capacity(config.total_cells()),
            outcome: Outcome::Ongoing,
            winning_line: None,
        }
    }

    /// Attempt to place the next mark at `(col, row)`.
    ///
    /// Rejections are checked in order: game over, out of bounds, cell
    /// occupied. A rejection mutates nothing. On acceptance the mark to
    /// place is derived from the turn rule, the move is appended to the
    /// history, the cell is set and the outcome re-evaluated.
    pub fn attempt_move(&mut self, col: i32, row: i32) -> MoveResult {
        if self.outcome.is_terminal() {
            return MoveResult::Rejected(RejectReason::GameOver);
        }
        if !self.board.in_bounds(col, row) {
            return MoveResult::Rejected(RejectReason::OutOfBounds);
        }
        let (col, row) = (col as usize, row as usize);
        if !self.board.is_empty_cell(col, row) {
            return MoveResult::Rejected(RejectReason::CellOccupied);
        }

        let mark = self.next_mark();
        self.board.set(col, row, mark);
        self.history.push(Move {
            col,
            row,
            mark,
            seq: self.history.len() + 1,
        });

        self.evaluate_terminal(col, row, mark);

        MoveResult::Placed {
            col,
            row,
            mark,
            outcome: self.outcome,
        }
    }

    /// Reinitialize to an empty board, empty history, `Ongoing` outcome.
    ///
    /// Indistinguishable from a freshly constructed engine with the same
    /// configuration.
    pub fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
        self.outcome = Outcome::Ongoing;
        self.winning_line = None;
    }

    /// The mark that moves next: whichever has been played fewer times,
    /// X on the very first move.
    pub fn next_mark(&self) -> Mark {
        match self.history.last() {
            Some(last) => last.mark.opponent(),
            None => Mark::first(),
        }
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Mark at a cell, `None` if empty. Callers pass in-bounds coordinates.
    #[inline]
    pub fn mark_at(&self, col: usize, row: usize) -> Option<Mark> {
        self.board.get(col, row)
    }

    /// Accepted moves in play order.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cells of the winning run once the outcome is `Won`.
    pub fn winning_line(&self) -> Option<&[(usize, usize)]> {
        self.winning_line.as_deref()
    }

    /// Re-evaluate the outcome after a placement, with that placement as
    /// the pivot. The win scan runs before the draw rule, so a move that
    /// both fills the board and completes a run is reported as a win.
    fn evaluate_terminal(&mut self, col: usize, row: usize, mark: Mark) {
        let win_length = self.config.win_length();

        // No run can exist before the leading mark has been played
        // win_length times
        if self.history.len() >= 2 * win_length - 1 {
            if let Some(line) = rules::winning_line(&self.board, (col, row), mark, win_length) {
                self.outcome = Outcome::Won(mark);
                self.winning_line = Some(line);
                return;
            }
        }

        if self.history.len() == self.config.total_cells() {
            self.outcome = Outcome::Drawn;
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_3x3() -> GameEngine {
        GameEngine::new(GameConfig::default())
    }

    fn play_all(engine: &mut GameEngine, moves: &[(i32, i32)]) -> MoveResult {
        let mut last = MoveResult::Rejected(RejectReason::GameOver);
        for &(col, row) in moves {
            last = engine.attempt_move(col, row);
            assert!(last.is_accepted(), "move at ({col}, {row}) was rejected");
        }
        last
    }

    #[test]
    fn test_marks_alternate_from_x() {
        let mut engine = engine_3x3();
        assert_eq!(engine.next_mark(), Mark::X);

        engine.attempt_move(0, 0);
        assert_eq!(engine.next_mark(), Mark::O);
        engine.attempt_move(1, 0);
        assert_eq!(engine.next_mark(), Mark::X);

        let marks: Vec<_> = engine.history().iter().map(|m| m.mark).collect();
        assert_eq!(marks, vec![Mark::X, Mark::O]);
    }

    #[test]
    fn test_history_sequence_numbers() {
        let mut engine = engine_3x3();
        play_all(&mut engine, &[(0, 0), (1, 1), (2, 2)]);
        let seqs: Vec<_> = engine.history().iter().map(|m| m.seq).collect();
        assert_eq!(seqs, vec![1, 2, 3]);
    }

    #[test]
    fn test_top_row_win() {
        // Scenario: (0,0)=X (1,1)=O (1,0)=X (2,2)=O (2,0)=X completes the
        // top row on the fifth move
        let mut engine = engine_3x3();
        let result = play_all(&mut engine, &[(0, 0), (1, 1), (1, 0), (2, 2), (2, 0)]);

        assert_eq!(engine.outcome(), Outcome::Won(Mark::X));
        match result {
            MoveResult::Placed { mark, outcome, .. } => {
                assert_eq!(mark, Mark::X);
                assert_eq!(outcome, Outcome::Won(Mark::X));
            }
            MoveResult::Rejected(_) => panic!("winning move was rejected"),
        }
        assert_eq!(
            engine.winning_line(),
            Some(&[(0, 0), (1, 0), (2, 0)][..])
        );
    }

    #[test]
    fn test_diagonal_win() {
        // Scenario: (0,0)=X (0,1)=O (1,1)=X (1,0)=O (2,2)=X completes the
        // main diagonal
        let mut engine = engine_3x3();
        play_all(&mut engine, &[(0, 0), (0, 1), (1, 1), (1, 0), (2, 2)]);
        assert_eq!(engine.outcome(), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_win_detected_on_exact_move() {
        let mut engine = engine_3x3();
        play_all(&mut engine, &[(0, 0), (1, 1), (1, 0), (2, 2)]);
        // Four moves in: X has two of the top row, not three
        assert_eq!(engine.outcome(), Outcome::Ongoing);
        engine.attempt_move(2, 0);
        assert_eq!(engine.outcome(), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_draw_on_full_board() {
        // Column-major fill ends with no 3-in-a-row:
        //   X O X
        //   X O X
        //   O X O
        let mut engine = engine_3x3();
        let result = play_all(
            &mut engine,
            &[
                (0, 0),
                (0, 2),
                (0, 1),
                (1, 0),
                (1, 2),
                (1, 1),
                (2, 0),
                (2, 2),
                (2, 1),
            ],
        );

        assert_eq!(engine.outcome(), Outcome::Drawn);
        match result {
            MoveResult::Placed { outcome, .. } => assert_eq!(outcome, Outcome::Drawn),
            MoveResult::Rejected(_) => panic!("final move was rejected"),
        }
    }

    #[test]
    fn test_win_takes_precedence_over_draw() {
        // The ninth move both fills the board and completes the bottom row
        //   X O O
        //   O O X
        //   X X X   <- (2,2) played last
        let mut engine = engine_3x3();
        // X: (0,2) (1,2) (0,0) (2,1) (2,2) / O: (1,0) (1,1) (2,0) (0,1)
        play_all(
            &mut engine,
            &[
                (0, 2),
                (1, 0),
                (1, 2),
                (1, 1),
                (0, 0),
                (2, 0),
                (2, 1),
                (0, 1),
                (2, 2),
            ],
        );
        assert_eq!(engine.history().len(), 9);
        assert_eq!(engine.outcome(), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_occupied_cell_rejected_without_mutation() {
        let mut engine = engine_3x3();
        engine.attempt_move(0, 0);

        let before_history = engine.history().to_vec();
        let before_board = engine.board().clone();

        let result = engine.attempt_move(0, 0);
        assert_eq!(result, MoveResult::Rejected(RejectReason::CellOccupied));
        assert_eq!(engine.history(), &before_history[..]);
        assert_eq!(engine.board(), &before_board);
        assert_eq!(engine.outcome(), Outcome::Ongoing);
        // Turn did not advance either
        assert_eq!(engine.next_mark(), Mark::O);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut engine = engine_3x3();
        for (col, row) in [(-1, 0), (0, -1), (3, 0), (0, 3)] {
            let result = engine.attempt_move(col, row);
            assert_eq!(result, MoveResult::Rejected(RejectReason::OutOfBounds));
        }
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_moves_after_game_over_rejected() {
        let mut engine = engine_3x3();
        play_all(&mut engine, &[(0, 0), (1, 1), (1, 0), (2, 2), (2, 0)]);
        assert_eq!(engine.outcome(), Outcome::Won(Mark::X));

        // Every attempt is now GameOver, even on empty in-bounds cells
        let result = engine.attempt_move(0, 1);
        assert_eq!(result, MoveResult::Rejected(RejectReason::GameOver));
        assert_eq!(engine.history().len(), 5);
        assert_eq!(engine.outcome(), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_game_over_outranks_other_rejections() {
        let mut engine = engine_3x3();
        play_all(&mut engine, &[(0, 0), (1, 1), (1, 0), (2, 2), (2, 0)]);
        // Occupied and out-of-bounds cells still report GameOver
        assert_eq!(
            engine.attempt_move(0, 0),
            MoveResult::Rejected(RejectReason::GameOver)
        );
        assert_eq!(
            engine.attempt_move(9, 9),
            MoveResult::Rejected(RejectReason::GameOver)
        );
    }

    #[test]
    fn test_reset_matches_fresh_engine() {
        let mut engine = engine_3x3();
        play_all(&mut engine, &[(0, 0), (1, 1), (1, 0), (2, 2), (2, 0)]);
        engine.reset();

        let fresh = engine_3x3();
        assert_eq!(engine.outcome(), fresh.outcome());
        assert_eq!(engine.history(), fresh.history());
        assert_eq!(engine.board(), fresh.board());
        assert_eq!(engine.next_mark(), fresh.next_mark());
        assert_eq!(engine.winning_line(), None);

        // The board is playable again
        assert!(engine.attempt_move(1, 1).is_accepted());
    }

    #[test]
    fn test_larger_board_longer_run() {
        let mut engine = GameEngine::new(GameConfig::new(9, 9, 5).unwrap());
        // X builds a column at col 4; O answers along row 8
        for i in 0..4 {
            play_all(&mut engine, &[(4, i), (i, 8)]);
        }
        assert_eq!(engine.outcome(), Outcome::Ongoing);
        engine.attempt_move(4, 4);
        assert_eq!(engine.outcome(), Outcome::Won(Mark::X));
        assert_eq!(
            engine.winning_line(),
            Some(&[(4, 0), (4, 1), (4, 2), (4, 3), (4, 4)][..])
        );
    }

    #[test]
    fn test_rectangular_board() {
        let mut engine = GameEngine::new(GameConfig::new(5, 2, 4).unwrap());
        play_all(
            &mut engine,
            &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0)],
        );
        assert_eq!(engine.outcome(), Outcome::Won(Mark::X));
    }
}
