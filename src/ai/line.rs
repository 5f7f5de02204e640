//! Line scanning around a hypothetical token.
//!
//! Every query scans outward from a (column, row) cell along the four axes of
//! the grid, counting consecutive tokens of one color. The board is only read.

use crate::game::{Board, Player};

/// Number of contiguous tokens needed to win.
pub const CONNECT_LENGTH: usize = 4;

/// One of the four undirected lines through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Bottom-left to top-right, `/`
    Rising,
    /// Top-left to bottom-right, `\`
    Falling,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Horizontal, Axis::Vertical, Axis::Rising, Axis::Falling];

    /// The two opposing (dx, dy) steps along this axis. Rows grow downward.
    pub fn steps(self) -> [(isize, isize); 2] {
        match self {
            Axis::Horizontal => [(-1, 0), (1, 0)],
            Axis::Vertical => [(0, 1), (0, -1)],
            Axis::Rising => [(-1, 1), (1, -1)],
            Axis::Falling => [(-1, -1), (1, 1)],
        }
    }
}

/// Evaluates hypothetical placements against a borrowed board.
///
/// Built fresh for each turn; it never outlives the position it looks at.
#[derive(Debug, Clone, Copy)]
pub struct LineEvaluator<'a> {
    board: &'a Board,
}

impl<'a> LineEvaluator<'a> {
    pub fn new(board: &'a Board) -> Self {
        LineEvaluator { board }
    }

    /// Whether a `player` token at (column, row) would complete four in a row.
    ///
    /// Each axis starts from the token itself and stops as soon as the run
    /// reaches [`CONNECT_LENGTH`]. Off-grid coordinates never win.
    pub fn would_win(&self, column: usize, row: usize, player: Player) -> bool {
        if !self.board.contains(column, row) {
            return false;
        }

        Axis::ALL.iter().any(|axis| {
            let mut count = 1;
            for step in axis.steps() {
                count += self.run_length(column, row, step, player, CONNECT_LENGTH - count);
                if count >= CONNECT_LENGTH {
                    return true;
                }
            }
            false
        })
    }

    /// Length of the longest existing `player` run, along any single axis,
    /// that a token at (column, row) would attach to. The token itself is not
    /// counted.
    pub fn connectivity(&self, column: usize, row: usize, player: Player) -> usize {
        self.axis_runs(column, row, player)
            .into_iter()
            .max()
            .unwrap_or(0)
    }

    /// Combined run length on both sides of (column, row) for each axis, in
    /// [`Axis::ALL`] order. All zero off the grid.
    pub fn axis_runs(&self, column: usize, row: usize, player: Player) -> [usize; 4] {
        if !self.board.contains(column, row) {
            return [0; 4];
        }

        Axis::ALL.map(|axis| {
            axis.steps()
                .into_iter()
                .map(|step| self.run_length(column, row, step, player, usize::MAX))
                .sum::<usize>()
        })
    }

    /// Count consecutive `player` tokens starting one step away from
    /// (column, row), stopping at the first other cell, the grid edge, or
    /// after `cap` tokens.
    fn run_length(
        &self,
        column: usize,
        row: usize,
        (dx, dy): (isize, isize),
        player: Player,
        cap: usize,
    ) -> usize {
        std::iter::successors(Some((column, row)), |&(c, r)| {
            Some((c.checked_add_signed(dx)?, r.checked_add_signed(dy)?))
        })
        .skip(1)
        .take_while(|&(c, r)| self.board.contains(c, r) && player.owns(self.board.at(c, r)))
        .take(cap)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_three_to_the_left_wins() {
        let board = board(&[
            ".......", //
            ".......", //
            ".......", //
            ".......", //
            ".......", //
            "RRR....", //
        ]);
        let eval = LineEvaluator::new(&board);
        assert!(eval.would_win(3, 5, Player::Red));
        assert!(!eval.would_win(3, 5, Player::Yellow));
    }

    #[test]
    fn test_runs_on_both_sides_add_up() {
        let board = board(&[
            ".......", //
            ".......", //
            ".......", //
            ".......", //
            ".......", //
            "RR.R...", //
        ]);
        let eval = LineEvaluator::new(&board);
        assert!(eval.would_win(2, 5, Player::Red));
        assert_eq!(eval.connectivity(2, 5, Player::Red), 3);
    }

    #[test]
    fn test_vertical_three_is_not_a_win() {
        let board = board(&[
            "......", //
            "......", //
            "......", //
            "..R...", //
            "..R...", //
        ]);
        let eval = LineEvaluator::new(&board);
        assert_eq!(board.lowest_open_row(2), Some(2));
        assert!(!eval.would_win(2, 2, Player::Red));
        assert_eq!(eval.axis_runs(2, 2, Player::Red), [0, 2, 0, 0]);
        assert_eq!(eval.connectivity(2, 2, Player::Red), 2);
    }

    #[test]
    fn test_vertical_win() {
        let board = board(&[
            ".......", //
            ".......", //
            ".......", //
            "...Y...", //
            "...Y...", //
            "...Y...", //
        ]);
        let eval = LineEvaluator::new(&board);
        assert!(eval.would_win(3, 2, Player::Yellow));
        assert!(!eval.would_win(3, 2, Player::Red));
    }

    #[test]
    fn test_rising_diagonal_win() {
        let board = board(&[
            ".......", //
            ".......", //
            ".......", //
            "..RY...", //
            ".RYY...", //
            "RYYY...", //
        ]);
        let eval = LineEvaluator::new(&board);
        assert_eq!(board.lowest_open_row(3), Some(2));
        assert!(eval.would_win(3, 2, Player::Red));
    }

    #[test]
    fn test_falling_diagonal_win() {
        let board = board(&[
            ".......", //
            ".......", //
            ".......", //
            "...YR..", //
            "...YYR.", //
            "...YYYR", //
        ]);
        let eval = LineEvaluator::new(&board);
        assert_eq!(board.lowest_open_row(3), Some(2));
        assert!(eval.would_win(3, 2, Player::Red));
    }

    #[test]
    fn test_opponent_token_stops_scan() {
        let board = board(&[
            ".......", //
            "RRY.R..", //
        ]);
        let eval = LineEvaluator::new(&board);
        assert!(!eval.would_win(3, 1, Player::Red));
        assert_eq!(eval.axis_runs(3, 1, Player::Red), [1, 0, 0, 0]);
    }

    #[test]
    fn test_connectivity_takes_max_not_sum() {
        let board = board(&[
            ".......", //
            ".......", //
            ".......", //
            ".......", //
            "...R...", //
            "RR.Y...", //
        ]);
        let eval = LineEvaluator::new(&board);
        assert_eq!(eval.axis_runs(2, 5, Player::Red), [2, 0, 1, 0]);
        assert_eq!(eval.connectivity(2, 5, Player::Red), 2);
    }

    #[test]
    fn test_edges_are_bounded() {
        let board = board(&[
            ".......", //
            ".RRRRR.", //
        ]);
        let eval = LineEvaluator::new(&board);
        assert!(eval.would_win(0, 1, Player::Red));
        assert!(eval.would_win(6, 1, Player::Red));
        assert_eq!(eval.connectivity(0, 1, Player::Red), 5);
        assert_eq!(eval.connectivity(6, 1, Player::Red), 5);
        assert_eq!(eval.axis_runs(3, 0, Player::Red), [0, 1, 1, 1]);
    }

    #[test]
    fn test_scan_does_not_wrap() {
        let board = board(&[
            "...R", //
            "..YR", //
        ]);
        let eval = LineEvaluator::new(&board);
        assert_eq!(eval.axis_runs(0, 1, Player::Red), [0, 0, 0, 0]);
    }

    #[test]
    fn test_out_of_bounds_is_neutral() {
        let board = board(&["RRR."]);
        let eval = LineEvaluator::new(&board);
        assert!(!eval.would_win(4, 0, Player::Red));
        assert!(!eval.would_win(3, 1, Player::Red));
        assert_eq!(eval.connectivity(4, 0, Player::Red), 0);
        assert_eq!(eval.axis_runs(0, 9, Player::Red), [0; 4]);
    }

    #[test]
    fn test_single_cell_board() {
        let board = Board::with_size(1, 1).unwrap();
        let eval = LineEvaluator::new(&board);
        assert!(!eval.would_win(0, 0, Player::Red));
        assert_eq!(eval.connectivity(0, 0, Player::Red), 0);
    }
}
