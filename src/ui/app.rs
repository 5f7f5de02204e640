use crate::ai::{Agent, AgentKind};
use crate::error::BoardError;
use crate::game::{GameOutcome, GameState, MoveError, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// The human plays Red; `opponent` answers as Yellow.
pub struct App {
    game_state: GameState,
    columns: usize,
    rows: usize,
    selected_column: usize,
    opponent: Agent,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(columns: usize, rows: usize, opponent: AgentKind) -> Result<Self, BoardError> {
        Ok(App {
            game_state: GameState::with_size(columns, rows)?,
            columns,
            rows,
            selected_column: columns / 2, // Start in middle
            opponent: opponent.build(Player::Yellow, None),
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.columns {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        // Dimensions were validated in App::new
        if let Ok(state) = GameState::with_size(self.columns, self.rows) {
            self.game_state = state;
        }
        self.selected_column = self.columns / 2;
    }

    /// Drop the human's piece in the selected column, then let the opponent reply
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move(self.selected_column) {
            Ok(()) => {
                if !self.report_outcome() {
                    self.opponent_move();
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    fn opponent_move(&mut self) {
        let column = self.opponent.choose(self.game_state.board());
        match self.game_state.apply_move(column) {
            Ok(()) => {
                if !self.report_outcome() {
                    self.message = Some(format!(
                        "{} played column {}",
                        self.opponent.name(),
                        column + 1
                    ));
                }
            }
            Err(err) => {
                self.message = Some(format!("{} made an illegal move: {err}", self.opponent.name()));
            }
        }
    }

    /// Set the end-of-game message; returns whether the game is over.
    fn report_outcome(&mut self) -> bool {
        match self.game_state.outcome() {
            Some(GameOutcome::Winner(player)) => {
                self.message = Some(format!("{} wins!", player.name()));
                true
            }
            Some(GameOutcome::Draw) => {
                self.message = Some("It's a draw!".to_string());
                true
            }
            None => false,
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.opponent.name(),
        );
    }
}
