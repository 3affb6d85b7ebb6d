//! Game loop: a round state machine and the session around it

mod command;
mod history;
mod round;
mod session;

pub use command::Command;
pub use history::{History, HistoryEntry};
pub use round::{Round, RoundState, RoundStep};
pub use session::{Session, SessionOutcome};
