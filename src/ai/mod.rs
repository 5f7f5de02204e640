mod agent;
pub mod line;
mod random;
pub mod selector;

pub use agent::{Agent, AgentKind};
pub use line::{Axis, LineEvaluator, CONNECT_LENGTH};
pub use random::RandomSelector;
pub use selector::{Decision, HeuristicSelector, MoveSelector, Reason};
