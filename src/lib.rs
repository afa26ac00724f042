// Round-setup engines, recent-use history, persistence and AI clue assist
// for pass-and-play social-deduction party games.

pub mod content;
pub mod error;
pub mod games;
pub mod history;
pub mod llm;
pub mod rng;
pub mod session;
pub mod storage;
pub mod types;

// The names embedders reach for first
pub use error::{GameError, GameResult};
pub use session::GameSession;
