use crate::ai::LineEvaluator;
use crate::error::BoardError;

use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is out of range")]
    InvalidColumn,
    #[error("column is full")]
    ColumnFull,
    #[error("game is over")]
    GameOver,
}

/// Turn bookkeeping around a [`Board`]: whose move it is and whether the
/// game has ended.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state on a standard board
    pub fn initial() -> Self {
        Self::with_board(Board::new())
    }

    /// Create initial game state on an empty board of the given size
    pub fn with_size(columns: usize, rows: usize) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::with_size(columns, rows)?))
    }

    /// Resume play from an existing position with Red to move.
    ///
    /// The position is assumed not to be won already.
    pub fn with_board(board: Board) -> Self {
        let outcome = if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };
        GameState {
            board,
            current_player: Player::Red, // Red starts
            outcome,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.open_columns()
    }

    /// Drop the current player's token into `column` and pass the turn.
    pub fn apply_move(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if column >= self.board.columns() {
            return Err(MoveError::InvalidColumn);
        }
        let row = self
            .board
            .lowest_open_row(column)
            .ok_or(MoveError::ColumnFull)?;

        let wins = LineEvaluator::new(&self.board).would_win(column, row, self.current_player);
        self.board.place(column, self.current_player);

        if wins {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let mut state = GameState::initial();
        state.apply_move(3).unwrap();

        assert_eq!(state.current_player(), Player::Yellow);
        assert_eq!(state.board().at(3, 5), Cell::Red);
    }

    #[test]
    fn test_invalid_moves() {
        let mut state = GameState::with_size(2, 1).unwrap();
        assert_eq!(state.apply_move(2), Err(MoveError::InvalidColumn));
        state.apply_move(0).unwrap();
        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull));
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red builds a horizontal line, Yellow stacks on top of it
        for col in 0..4 {
            state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state.apply_move(col).unwrap(); // Yellow
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_draw() {
        // 3x2 board cannot hold four in a row
        let mut state = GameState::with_size(3, 2).unwrap();
        for col in [0, 0, 1, 1, 2, 2] {
            state.apply_move(col).unwrap();
        }
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }
}
