use crate::games::{impostor, oddone, spyfall, wavelength};

/// Result type for setup and phase-transition operations
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while setting up or advancing a round.
///
/// Every variant is recoverable by fixing the input or starting over; none
/// of them leave a game in a half-mutated state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("{game} needs {min} to {max} players, got {count}")]
    PlayerCount {
        game: &'static str,
        count: usize,
        min: usize,
        max: usize,
    },

    #[error("player names must not be empty")]
    EmptyName,

    #[error("duplicate player name: {0}")]
    DuplicateName(String),

    #[error("clue must not be empty")]
    EmptyClue,

    #[error("guess {0} is outside 0-100")]
    GuessOutOfRange(u8),

    #[error("cannot {action} during the {phase} phase")]
    WrongPhase {
        action: &'static str,
        phase: &'static str,
    },

    #[error("no player with id {0}")]
    UnknownPlayer(String),
}

impl GameError {
    pub(crate) fn player_count(game: &'static str, count: usize, min: usize, max: usize) -> Self {
        GameError::PlayerCount {
            game,
            count,
            min,
            max,
        }
    }
}

/// Player-count bounds for each game variant, for setup screens that want to
/// grey out the start button before attempting a round.
pub fn player_bounds(game: &str) -> Option<(usize, usize)> {
    match game {
        "impostor" => Some((impostor::MIN_PLAYERS, impostor::MAX_PLAYERS)),
        "spyfall" => Some((spyfall::MIN_PLAYERS, spyfall::MAX_PLAYERS)),
        "wavelength" => Some((wavelength::MIN_PLAYERS, wavelength::MAX_PLAYERS)),
        "oddone" => Some((oddone::MIN_PLAYERS, oddone::MAX_PLAYERS)),
        _ => None,
    }
}
