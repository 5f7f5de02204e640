//! Terminal UI for playing Connect Four against an agent.

mod app;
mod game_view;

pub use app::App;
