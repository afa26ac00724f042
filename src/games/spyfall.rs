//! The spy game: everyone learns the location except the spy.
//!
//! Non-spies each get a role at the location so their answers have texture;
//! the spy gets the full location list and has to triangulate.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::content::LOCATIONS;
use crate::error::GameError;
use crate::rng::{pick_index, shuffle};
use crate::types::{new_player_id, PlayerId};

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 10;

/// Discussion time when the setup form doesn't pick one.
pub const DEFAULT_TIMER_SECONDS: u32 = 480;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpyfallPlayer {
    pub id: PlayerId,
    pub name: String,
    pub is_spy: bool,
    /// Role at the location; `None` for the spy.
    pub role: Option<String>,
    pub location_revealed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpyfallPhase {
    LocationReveal,
    Playing,
    Results,
}

impl SpyfallPhase {
    pub fn name(self) -> &'static str {
        match self {
            SpyfallPhase::LocationReveal => "locationReveal",
            SpyfallPhase::Playing => "playing",
            SpyfallPhase::Results => "results",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpyfallGame {
    pub players: Vec<SpyfallPlayer>,
    pub location: String,
    /// Every location name in the deck, for the spy's deduction sheet.
    pub all_locations: Vec<String>,
    pub phase: SpyfallPhase,
    pub spy_name: String,
    pub timer_seconds: u32,
    /// Stamped when the last player has seen their card. Advisory: the
    /// timer running out never ends the round by itself.
    pub started_at: Option<DateTime<Utc>>,
}

impl SpyfallGame {
    /// Deal a fresh round: one location, one spy, shuffled roles for the
    /// rest. With more non-spies than roles the labels repeat, which is
    /// fine at a party table.
    pub fn setup<R: Rng>(
        names: &[String],
        timer_seconds: Option<u32>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(GameError::player_count(
                "spyfall",
                names.len(),
                MIN_PLAYERS,
                MAX_PLAYERS,
            ));
        }

        let location = &LOCATIONS[pick_index(rng, LOCATIONS.len())];
        let spy_seat = pick_index(rng, names.len());
        let roles = shuffle(rng, location.roles);

        let mut dealt = 0;
        let players: Vec<SpyfallPlayer> = names
            .iter()
            .enumerate()
            .map(|(seat, name)| {
                let role = if seat == spy_seat {
                    None
                } else {
                    let role = roles[dealt % roles.len()].to_string();
                    dealt += 1;
                    Some(role)
                };
                SpyfallPlayer {
                    id: new_player_id(),
                    name: name.clone(),
                    is_spy: seat == spy_seat,
                    role,
                    location_revealed: false,
                }
            })
            .collect();

        Ok(Self {
            spy_name: names[spy_seat].clone(),
            players,
            location: location.name.to_string(),
            all_locations: LOCATIONS.iter().map(|l| l.name.to_string()).collect(),
            phase: SpyfallPhase::LocationReveal,
            timer_seconds: timer_seconds.unwrap_or(DEFAULT_TIMER_SECONDS),
            started_at: None,
        })
    }

    /// Mark a player's private card as seen. When the last card flips, the
    /// round starts and the clock stamp is taken.
    pub fn reveal_location(&mut self, player_id: &str) -> Result<(), GameError> {
        if self.phase != SpyfallPhase::LocationReveal {
            return Err(GameError::WrongPhase {
                action: "reveal a card",
                phase: self.phase.name(),
            });
        }
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or_else(|| GameError::UnknownPlayer(player_id.to_string()))?;
        player.location_revealed = true;

        if self.players.iter().all(|p| p.location_revealed) {
            self.phase = SpyfallPhase::Playing;
            self.started_at = Some(Utc::now());
        }
        Ok(())
    }

    /// End the round by unmasking the spy.
    pub fn reveal_spy(&mut self) -> Result<(), GameError> {
        if self.phase != SpyfallPhase::Playing {
            return Err(GameError::WrongPhase {
                action: "reveal the spy",
                phase: self.phase.name(),
            });
        }
        self.phase = SpyfallPhase::Results;
        Ok(())
    }

    /// Fresh round with the same table and timer: new location, new spy,
    /// new roles.
    pub fn play_again<R: Rng>(&self, rng: &mut R) -> Result<Self, GameError> {
        let names: Vec<String> = self.players.iter().map(|p| p.name.clone()).collect();
        Self::setup(&names, Some(self.timer_seconds), rng)
    }
}
