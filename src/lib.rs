//! # Connect Four Agent
//!
//! A one-ply heuristic player for Connect Four. For each turn it takes a
//! winning move if one exists, otherwise blocks the opponent's win, otherwise
//! extends its longest line, and falls back to the most central open column.
//!
//! ## Modules
//!
//! - [`game`]: Board, players, and turn bookkeeping
//! - [`ai`]: Line evaluation, move selection policies, and the agent driver
//! - [`arena`]: Headless series of games between two agents
//! - [`ui`]: Terminal UI for playing against an agent
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//!
//! ```
//! use connect_four_agent::ai::HeuristicSelector;
//! use connect_four_agent::game::{Board, Player};
//!
//! let board = Board::from_rows(&[
//!     ".......",
//!     ".......",
//!     ".......",
//!     ".......",
//!     ".......",
//!     ".RRR...",
//! ])?;
//! let decision = HeuristicSelector::new().decide(&board, Player::Red);
//! assert_eq!(decision.column, 0);
//! # Ok::<(), connect_four_agent::error::BoardError>(())
//! ```

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
