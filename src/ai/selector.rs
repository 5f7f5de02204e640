use std::fmt;

use tracing::{debug, trace};

use crate::game::{Board, Player};

use super::line::LineEvaluator;

/// Universal interface for move policies.
pub trait MoveSelector {
    /// Pick the column `player` should drop a token into.
    ///
    /// The board must have at least one open column.
    fn select_column(&mut self, board: &Board, player: Player) -> usize;

    /// Return the policy's display name.
    fn name(&self) -> &str;
}

/// Why the heuristic picked a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The move completes four in a row.
    Win,
    /// The opponent would complete four in a row here.
    Block,
    /// The move attaches to an existing run of this length.
    Connect(usize),
    /// Nothing informative; first open column from the center outward.
    CenterOut,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Win => write!(f, "winning move"),
            Reason::Block => write!(f, "blocking move"),
            Reason::Connect(n) => write!(f, "connects to {n}"),
            Reason::CenterOut => write!(f, "center fallback"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub column: usize,
    pub reason: Reason,
}

/// One-ply layered policy: win, then block, then best connectivity, then the
/// first open column from the center outward.
///
/// Stateless; the same board and color always give the same column.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSelector;

impl HeuristicSelector {
    pub fn new() -> Self {
        HeuristicSelector
    }

    /// Run the full policy and report why the column was chosen.
    ///
    /// # Panics
    ///
    /// Panics if every column is full.
    pub fn decide(&self, board: &Board, player: Player) -> Decision {
        let decision = if let Some(column) = winning_column(board, player) {
            Decision {
                column,
                reason: Reason::Win,
            }
        } else if let Some(column) = winning_column(board, player.other()) {
            Decision {
                column,
                reason: Reason::Block,
            }
        } else if let Some((column, score)) = best_connectivity_column(board, player) {
            Decision {
                column,
                reason: Reason::Connect(score),
            }
        } else {
            let Some(column) = center_out_column(board) else {
                panic!("no open column to play: the board is full");
            };
            Decision {
                column,
                reason: Reason::CenterOut,
            }
        };

        debug!(
            player = player.name(),
            column = decision.column,
            reason = %decision.reason,
            "heuristic decision"
        );
        decision
    }
}

impl MoveSelector for HeuristicSelector {
    fn select_column(&mut self, board: &Board, player: Player) -> usize {
        self.decide(board, player).column
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}

/// Leftmost open column where a `player` token would complete four in a row.
pub fn winning_column(board: &Board, player: Player) -> Option<usize> {
    let eval = LineEvaluator::new(board);
    (0..board.columns()).find(|&column| {
        board
            .lowest_open_row(column)
            .is_some_and(|row| eval.would_win(column, row, player))
    })
}

/// Leftmost open column with the highest non-zero connectivity for `player`,
/// with that connectivity.
pub fn best_connectivity_column(board: &Board, player: Player) -> Option<(usize, usize)> {
    let eval = LineEvaluator::new(board);
    let mut best: Option<(usize, usize)> = None;
    let mut best_score = 0;

    for column in 0..board.columns() {
        let Some(row) = board.lowest_open_row(column) else {
            continue;
        };
        let score = eval.connectivity(column, row, player);
        trace!(column, row, score, "connectivity");
        if score > best_score {
            best_score = score;
            best = Some((column, score));
        }
    }

    best
}

/// Columns visited from the middle outward: mid, mid+1, mid-1, mid+2, ...
pub fn center_out_order(columns: usize) -> impl Iterator<Item = usize> {
    let mid = columns / 2;
    (0..=mid).flat_map(move |i| {
        // mid + i overshoots the last column on even widths
        let right = Some(mid + i).filter(|&c| c < columns);
        let left = if i > 0 { Some(mid - i) } else { None };
        right.into_iter().chain(left)
    })
}

/// First open column in center-out order.
pub fn center_out_column(board: &Board) -> Option<usize> {
    center_out_order(board.columns()).find(|&column| !board.is_column_full(column))
}
