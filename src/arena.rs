//! Headless series of games between two agents.

use tracing::{debug, info, warn};

use crate::ai::Agent;
use crate::config::AppConfig;
use crate::error::BoardError;
use crate::game::{GameOutcome, GameState, MoveError, Player};

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Winner(Player),
    Draw,
    /// `player` picked a column the game refused and lost on the spot.
    Forfeit {
        player: Player,
        column: usize,
        error: MoveError,
    },
}

impl GameResult {
    /// The player credited with the game, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
            GameResult::Forfeit { player, .. } => Some(player.other()),
        }
    }
}

/// Result of playing one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub result: GameResult,
    pub moves: Vec<usize>,
}

/// Play one game on an empty `columns x rows` board. Red moves first.
pub fn play_game(
    red: &mut Agent,
    yellow: &mut Agent,
    columns: usize,
    rows: usize,
) -> Result<GameRecord, BoardError> {
    let mut state = GameState::with_size(columns, rows)?;
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let player = state.current_player();
        let agent = match player {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };
        let column = agent.choose(state.board());

        if let Err(error) = state.apply_move(column) {
            warn!(
                agent = agent.name(),
                player = player.name(),
                column,
                %error,
                "illegal move, forfeiting"
            );
            return Ok(GameRecord {
                result: GameResult::Forfeit {
                    player,
                    column,
                    error,
                },
                moves,
            });
        }
        moves.push(column);
    }

    let result = match state.outcome() {
        Some(GameOutcome::Winner(p)) => GameResult::Winner(p),
        Some(GameOutcome::Draw) | None => GameResult::Draw,
    };
    debug!(?result, length = moves.len(), "game finished");

    Ok(GameRecord { result, moves })
}

/// Aggregated results of a series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArenaReport {
    pub games: usize,
    pub red_wins: usize,
    pub yellow_wins: usize,
    pub draws: usize,
    pub forfeits: usize,
    pub total_moves: usize,
}

impl ArenaReport {
    pub fn record(&mut self, record: &GameRecord) {
        self.games += 1;
        self.total_moves += record.moves.len();
        if let GameResult::Forfeit { .. } = record.result {
            self.forfeits += 1;
        }
        match record.result.winner() {
            Some(Player::Red) => self.red_wins += 1,
            Some(Player::Yellow) => self.yellow_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Fraction of games won by `player`.
    pub fn win_rate(&self, player: Player) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        let wins = match player {
            Player::Red => self.red_wins,
            Player::Yellow => self.yellow_wins,
        };
        wins as f32 / self.games as f32
    }

    pub fn avg_game_length(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.games as f32
    }
}

/// Play `games` games between the two agents, reusing them across games.
pub fn run_series(
    red: &mut Agent,
    yellow: &mut Agent,
    columns: usize,
    rows: usize,
    games: usize,
) -> Result<ArenaReport, BoardError> {
    let mut report = ArenaReport::default();
    for game in 0..games {
        let record = play_game(red, yellow, columns, rows)?;
        debug!(game, moves = ?record.moves, "recorded game");
        report.record(&record);
    }

    info!(
        red = red.name(),
        yellow = yellow.name(),
        games = report.games,
        red_wins = report.red_wins,
        yellow_wins = report.yellow_wins,
        draws = report.draws,
        forfeits = report.forfeits,
        "series finished"
    );
    Ok(report)
}

/// Run the series described by `config`.
pub fn run_arena(config: &AppConfig) -> Result<ArenaReport, BoardError> {
    let seed = config.arena.seed;
    let mut red = config.arena.red.build(Player::Red, seed);
    let mut yellow = config
        .arena
        .yellow
        .build(Player::Yellow, seed.map(|s| s.wrapping_add(1)));

    run_series(
        &mut red,
        &mut yellow,
        config.board.columns,
        config.board.rows,
        config.arena.games,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{AgentKind, MoveSelector};
    use crate::game::Board;

    /// Always picks the same column, full or not.
    struct Stubborn(usize);

    impl MoveSelector for Stubborn {
        fn select_column(&mut self, _board: &Board, _player: Player) -> usize {
            self.0
        }

        fn name(&self) -> &str {
            "Stubborn"
        }
    }

    #[test]
    fn test_heuristic_self_play_is_deterministic() {
        let mut red = Agent::heuristic(Player::Red);
        let mut yellow = Agent::heuristic(Player::Yellow);

        let first = play_game(&mut red, &mut yellow, 7, 6).unwrap();
        let second = play_game(&mut red, &mut yellow, 7, 6).unwrap();
        assert_eq!(first, second);
        assert!(!first.moves.is_empty());
    }

    #[test]
    fn test_full_column_forfeits() {
        let mut red = Agent::new(Player::Red, Box::new(Stubborn(0)));
        let mut yellow = Agent::new(Player::Yellow, Box::new(Stubborn(1)));

        // Two rows: Red fills column 0, then picks it again
        let record = play_game(&mut red, &mut yellow, 4, 2).unwrap();
        assert_eq!(record.moves, vec![0, 1, 0, 1]);
        assert_eq!(
            record.result,
            GameResult::Forfeit {
                player: Player::Red,
                column: 0,
                error: MoveError::ColumnFull,
            }
        );
        assert_eq!(record.result.winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_out_of_range_column_forfeits() {
        let mut red = Agent::new(Player::Red, Box::new(Stubborn(9)));
        let mut yellow = Agent::heuristic(Player::Yellow);

        let record = play_game(&mut red, &mut yellow, 7, 6).unwrap();
        assert!(record.moves.is_empty());
        assert!(matches!(
            record.result,
            GameResult::Forfeit {
                error: MoveError::InvalidColumn,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_board_size() {
        let mut red = Agent::heuristic(Player::Red);
        let mut yellow = Agent::heuristic(Player::Yellow);
        assert!(play_game(&mut red, &mut yellow, 0, 6).is_err());
    }

    #[test]
    fn test_report_counts() {
        let mut report = ArenaReport::default();
        report.record(&GameRecord {
            result: GameResult::Winner(Player::Red),
            moves: vec![3, 3, 4, 4, 5, 5, 6],
        });
        report.record(&GameRecord {
            result: GameResult::Draw,
            moves: vec![0; 3],
        });

        assert_eq!(report.games, 2);
        assert_eq!(report.red_wins, 1);
        assert_eq!(report.draws, 1);
        assert_eq!(report.win_rate(Player::Red), 0.5);
        assert_eq!(report.avg_game_length(), 5.0);
    }

    #[test]
    fn test_heuristic_beats_random() {
        let mut config = AppConfig::default();
        config.arena.games = 40;
        config.arena.seed = Some(3);
        config.arena.red = AgentKind::Heuristic;
        config.arena.yellow = AgentKind::Random;

        let report = run_arena(&config).unwrap();
        assert_eq!(report.games, 40);
        assert_eq!(
            report.red_wins + report.yellow_wins + report.draws,
            report.games
        );
        assert_eq!(report.forfeits, 0);
        assert!(report.red_wins > report.yellow_wins);
    }
}
