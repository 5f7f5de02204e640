use tracing::debug;

use crate::game::{Board, Player};

use super::random::RandomSelector;
use super::selector::{HeuristicSelector, MoveSelector};

/// Which policy drives an agent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Heuristic,
    Random,
}

impl AgentKind {
    /// Build an agent of this kind. `seed` only affects random agents.
    pub fn build(self, player: Player, seed: Option<u64>) -> Agent {
        let selector: Box<dyn MoveSelector> = match self {
            AgentKind::Heuristic => Box::new(HeuristicSelector::new()),
            AgentKind::Random => match seed {
                Some(seed) => Box::new(RandomSelector::seeded(seed)),
                None => Box::new(RandomSelector::new()),
            },
        };
        Agent::new(player, selector)
    }
}

/// A player of one color driven by a [`MoveSelector`].
pub struct Agent {
    player: Player,
    selector: Box<dyn MoveSelector>,
}

impl Agent {
    pub fn new(player: Player, selector: Box<dyn MoveSelector>) -> Self {
        Agent { player, selector }
    }

    /// Agent using the layered one-ply heuristic.
    pub fn heuristic(player: Player) -> Self {
        Self::new(player, Box::new(HeuristicSelector::new()))
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn name(&self) -> &str {
        self.selector.name()
    }

    /// Ask the selector for a column without touching the board.
    pub fn choose(&mut self, board: &Board) -> usize {
        self.selector.select_column(board, self.player)
    }

    /// Play one turn: choose a column and drop a token there.
    ///
    /// Returns the chosen column. The board must have an open column.
    pub fn take_turn(&mut self, board: &mut Board) -> usize {
        let column = self.choose(board);
        let row = board.place(column, self.player);
        debug!(
            agent = self.name(),
            player = self.player.name(),
            column,
            row = ?row,
            "placed token"
        );
        column
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_take_turn_places_one_token() {
        let mut board = Board::with_size(5, 4).unwrap();
        let mut agent = Agent::heuristic(Player::Yellow);

        let column = agent.take_turn(&mut board);
        assert_eq!(column, 2);
        assert_eq!(board.at(2, 3), Cell::Yellow);

        let filled = (0..5)
            .flat_map(|c| (0..4).map(move |r| (c, r)))
            .filter(|&(c, r)| !board.at(c, r).is_empty())
            .count();
        assert_eq!(filled, 1);
    }

    #[test]
    fn test_take_turn_completes_win() {
        let mut board = Board::from_rows(&[
            ".......", //
            ".......", //
            ".......", //
            ".......", //
            ".......", //
            ".RRR...", //
        ])
        .unwrap();
        let mut agent = Agent::heuristic(Player::Red);

        assert_eq!(agent.take_turn(&mut board), 0);
        assert_eq!(board.at(0, 5), Cell::Red);
    }

    #[test]
    fn test_agent_kind_build() {
        let agent = AgentKind::Random.build(Player::Red, Some(1));
        assert_eq!(agent.name(), "Random");
        assert_eq!(agent.player(), Player::Red);

        let agent = AgentKind::Heuristic.build(Player::Yellow, None);
        assert_eq!(agent.name(), "Heuristic");
    }
}
