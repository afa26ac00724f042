//! The wavelength game: a psychic, a spectrum, and a hidden target.
//!
//! Each round one player sees where the target sits on an axis like
//! Hot-Cold, gives a clue, and the rest of the table dials in a single
//! guess. Closer guesses score the psychic more.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::content::SPECTRA;
use crate::error::GameError;
use crate::rng::pick_index;
use crate::types::{new_player_id, PlayerId};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 12;
pub const DEFAULT_MAX_ROUNDS: u32 = 5;

/// Points for a guess at the given distance from the target.
///
/// Bands are inclusive: within 5 scores 4, within 10 scores 3, within 20
/// scores 2, within 30 scores 1, anything wider nothing.
pub fn score_for(target: u8, guess: u8) -> u32 {
    match target.abs_diff(guess) {
        0..=5 => 4,
        6..=10 => 3,
        11..=20 => 2,
        21..=30 => 1,
        _ => 0,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WavelengthPlayer {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WavelengthPhase {
    /// The psychic privately memorizes the target.
    PsychicReveal,
    /// The target is hidden again; the psychic thinks up a clue.
    PsychicTurn,
    /// The table argues and commits one guess.
    TeamGuess,
    /// Target and points on the table.
    Reveal,
    Results,
}

impl WavelengthPhase {
    pub fn name(self) -> &'static str {
        match self {
            WavelengthPhase::PsychicReveal => "psychicReveal",
            WavelengthPhase::PsychicTurn => "psychicTurn",
            WavelengthPhase::TeamGuess => "teamGuess",
            WavelengthPhase::Reveal => "reveal",
            WavelengthPhase::Results => "results",
        }
    }
}

/// Owned copy of a spectrum card, so snapshots deserialize standalone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectrumCard {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WavelengthGame {
    pub players: Vec<WavelengthPlayer>,
    /// Seat of the current psychic; rotates round-robin.
    pub psychic_index: usize,
    pub spectrum: SpectrumCard,
    /// Hidden position in `0..=100` along the spectrum, 0 being `left`.
    pub target: u8,
    pub clue: Option<String>,
    pub guess: Option<u8>,
    pub round_number: u32,
    pub max_rounds: u32,
    pub phase: WavelengthPhase,
}

impl WavelengthGame {
    /// Start a game at round one with the first name as psychic.
    pub fn setup<R: Rng>(
        names: &[String],
        max_rounds: Option<u32>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(GameError::player_count(
                "wavelength",
                names.len(),
                MIN_PLAYERS,
                MAX_PLAYERS,
            ));
        }

        let players = names
            .iter()
            .map(|name| WavelengthPlayer {
                id: new_player_id(),
                name: name.clone(),
                score: 0,
            })
            .collect();
        let (spectrum, target) = draw_card(rng);

        Ok(Self {
            players,
            psychic_index: 0,
            spectrum,
            target,
            clue: None,
            guess: None,
            round_number: 1,
            max_rounds: max_rounds.unwrap_or(DEFAULT_MAX_ROUNDS),
            phase: WavelengthPhase::PsychicReveal,
        })
    }

    pub fn psychic(&self) -> &WavelengthPlayer {
        &self.players[self.psychic_index]
    }

    /// The psychic has memorized the target; hide it and ask for a clue.
    pub fn begin_clue(&mut self) -> Result<(), GameError> {
        if self.phase != WavelengthPhase::PsychicReveal {
            return Err(GameError::WrongPhase {
                action: "hide the target",
                phase: self.phase.name(),
            });
        }
        self.phase = WavelengthPhase::PsychicTurn;
        Ok(())
    }

    /// Record the psychic's clue, stored verbatim, and hand over to the
    /// table.
    pub fn submit_clue(&mut self, clue: &str) -> Result<(), GameError> {
        if self.phase != WavelengthPhase::PsychicTurn {
            return Err(GameError::WrongPhase {
                action: "submit a clue",
                phase: self.phase.name(),
            });
        }
        if clue.trim().is_empty() {
            return Err(GameError::EmptyClue);
        }
        self.clue = Some(clue.to_string());
        self.phase = WavelengthPhase::TeamGuess;
        Ok(())
    }

    /// The table's single guess. Scores the psychic and moves to the
    /// reveal.
    pub fn submit_guess(&mut self, guess: u8) -> Result<(), GameError> {
        if self.phase != WavelengthPhase::TeamGuess {
            return Err(GameError::WrongPhase {
                action: "submit a guess",
                phase: self.phase.name(),
            });
        }
        if guess > 100 {
            return Err(GameError::GuessOutOfRange(guess));
        }
        self.guess = Some(guess);
        self.players[self.psychic_index].score += score_for(self.target, guess);
        self.phase = WavelengthPhase::Reveal;
        Ok(())
    }

    /// Rotate the psychic and draw a fresh card, or close the game out once
    /// the round budget is spent.
    pub fn start_next_round<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.phase != WavelengthPhase::Reveal {
            return Err(GameError::WrongPhase {
                action: "start the next round",
                phase: self.phase.name(),
            });
        }
        if self.round_number >= self.max_rounds {
            self.phase = WavelengthPhase::Results;
            return Ok(());
        }

        self.psychic_index = (self.psychic_index + 1) % self.players.len();
        let (spectrum, target) = draw_card(rng);
        self.spectrum = spectrum;
        self.target = target;
        self.clue = None;
        self.guess = None;
        self.round_number += 1;
        self.phase = WavelengthPhase::PsychicReveal;
        Ok(())
    }

    /// Full restart with the same table: zeroed scores, round one. Scores
    /// never carry over.
    pub fn reset<R: Rng>(&self, rng: &mut R) -> Result<Self, GameError> {
        let names: Vec<String> = self.players.iter().map(|p| p.name.clone()).collect();
        Self::setup(&names, Some(self.max_rounds), rng)
    }

    /// Players ranked by score, ties keeping seat order.
    pub fn standings(&self) -> Vec<&WavelengthPlayer> {
        let mut ranked: Vec<&WavelengthPlayer> = self.players.iter().collect();
        ranked.sort_by_key(|p| std::cmp::Reverse(p.score));
        ranked
    }
}

fn draw_card<R: Rng>(rng: &mut R) -> (SpectrumCard, u8) {
    let spectrum = SPECTRA[pick_index(rng, SPECTRA.len())];
    let card = SpectrumCard {
        left: spectrum.left.to_string(),
        right: spectrum.right.to_string(),
    };
    (card, rng.random_range(0..=100u8))
}
