//! The impostor word game.
//!
//! Everyone but a few impostors shares one secret word. The device is passed
//! around for private reveals, the table goes through a round of one-word
//! clues, then the impostors are unmasked.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::content::WORDS;
use crate::error::GameError;
use crate::history::HistoryRecord;
use crate::rng::{pick_distinct_indices, pick_index, shuffle};
use crate::types::{new_player_id, PlayerId};

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 16;

/// Shown on an impostor's card in place of the secret word.
pub const IMPOSTOR_MESSAGE: &str = "You are the impostor!";

/// Impostor seats for a table of `player_count`.
///
/// 3-5 players play against one impostor, 6-9 against two, 10-13 against
/// three, 14-16 against four.
pub fn impostor_count(player_count: usize) -> usize {
    match player_count {
        n if n >= 14 => 4,
        n if n >= 10 => 3,
        n if n >= 6 => 2,
        _ => 1,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpostorPlayer {
    pub id: PlayerId,
    pub name: String,
    /// What this player's private card says: the secret word, or
    /// [`IMPOSTOR_MESSAGE`].
    pub word: String,
    pub is_impostor: bool,
    pub word_revealed: bool,
    /// The one-word clue given during the playing phase, verbatim.
    pub clue: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImpostorPhase {
    WordReveal,
    Playing,
    Results,
}

impl ImpostorPhase {
    pub fn name(self) -> &'static str {
        match self {
            ImpostorPhase::WordReveal => "wordReveal",
            ImpostorPhase::Playing => "playing",
            ImpostorPhase::Results => "results",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpostorGame {
    /// Seat order, already shuffled so it hints at nothing.
    pub players: Vec<ImpostorPlayer>,
    pub secret_word: String,
    pub impostor_names: Vec<String>,
    pub phase: ImpostorPhase,
}

impl ImpostorGame {
    /// Deal a fresh round: draw a word the table hasn't seen lately, seat
    /// the impostors, shuffle the reveal order.
    ///
    /// `names` are used as given; trimming and deduplication are the setup
    /// form's job (see [`crate::types::validate_player_names`]). A count
    /// outside the supported range fails before anything is drawn, so a
    /// rejected setup leaves `history` untouched.
    pub fn setup<R: Rng>(
        names: &[String],
        history: &mut HistoryRecord,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(GameError::player_count(
                "impostor",
                names.len(),
                MIN_PLAYERS,
                MAX_PLAYERS,
            ));
        }

        let pool = history.filter_unused_words(WORDS);
        let secret_word = pool[pick_index(rng, pool.len())].to_string();
        history.mark_word_used(&secret_word);

        let impostor_seats = pick_distinct_indices(rng, names.len(), impostor_count(names.len()));

        let players: Vec<ImpostorPlayer> = names
            .iter()
            .enumerate()
            .map(|(seat, name)| {
                let is_impostor = impostor_seats.contains(&seat);
                ImpostorPlayer {
                    id: new_player_id(),
                    name: name.clone(),
                    word: if is_impostor {
                        IMPOSTOR_MESSAGE.to_string()
                    } else {
                        secret_word.clone()
                    },
                    is_impostor,
                    word_revealed: false,
                    clue: None,
                }
            })
            .collect();

        let impostor_names = players
            .iter()
            .filter(|p| p.is_impostor)
            .map(|p| p.name.clone())
            .collect();

        Ok(Self {
            players: shuffle(rng, &players),
            secret_word,
            impostor_names,
            phase: ImpostorPhase::WordReveal,
        })
    }

    /// Mark a player's private card as seen. Once the last player has
    /// looked, the clue round begins.
    pub fn reveal_word(&mut self, player_id: &str) -> Result<(), GameError> {
        if self.phase != ImpostorPhase::WordReveal {
            return Err(GameError::WrongPhase {
                action: "reveal a word",
                phase: self.phase.name(),
            });
        }
        self.player_mut(player_id)?.word_revealed = true;
        if self.players.iter().all(|p| p.word_revealed) {
            self.phase = ImpostorPhase::Playing;
        }
        Ok(())
    }

    /// Record a player's clue, stored verbatim. Resubmitting replaces the
    /// previous clue.
    pub fn submit_clue(&mut self, player_id: &str, clue: &str) -> Result<(), GameError> {
        if self.phase != ImpostorPhase::Playing {
            return Err(GameError::WrongPhase {
                action: "submit a clue",
                phase: self.phase.name(),
            });
        }
        if clue.trim().is_empty() {
            return Err(GameError::EmptyClue);
        }
        self.player_mut(player_id)?.clue = Some(clue.to_string());
        Ok(())
    }

    /// Unmask the impostors and end the round.
    pub fn finish(&mut self) -> Result<(), GameError> {
        if self.phase != ImpostorPhase::Playing {
            return Err(GameError::WrongPhase {
                action: "reveal the impostors",
                phase: self.phase.name(),
            });
        }
        self.phase = ImpostorPhase::Results;
        Ok(())
    }

    /// Fresh round with the same table.
    pub fn play_again<R: Rng>(
        &self,
        history: &mut HistoryRecord,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let names: Vec<String> = self.players.iter().map(|p| p.name.clone()).collect();
        Self::setup(&names, history, rng)
    }

    fn player_mut(&mut self, player_id: &str) -> Result<&mut ImpostorPlayer, GameError> {
        self.players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or_else(|| GameError::UnknownPlayer(player_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Player{i}")).collect()
    }

    fn setup(n: usize, seed: u64) -> ImpostorGame {
        let mut history = HistoryRecord::default();
        ImpostorGame::setup(&names(n), &mut history, &mut ChaCha8Rng::seed_from_u64(seed))
            .unwrap()
    }

    #[test]
    fn test_impostor_count_steps() {
        for (count, expected) in [
            (3, 1),
            (5, 1),
            (6, 2),
            (9, 2),
            (10, 3),
            (13, 3),
            (14, 4),
            (16, 4),
        ] {
            assert_eq!(impostor_count(count), expected, "at {count} players");
        }
    }

    #[test]
    fn test_setup_seats_the_right_number_of_impostors() {
        for n in MIN_PLAYERS..=MAX_PLAYERS {
            let game = setup(n, n as u64);
            let impostors = game.players.iter().filter(|p| p.is_impostor).count();
            assert_eq!(impostors, impostor_count(n), "at {n} players");
            assert_eq!(game.players.len(), n);
        }
    }

    #[test]
    fn test_civilians_share_the_word_and_impostors_get_the_message() {
        let game = setup(5, 1);
        for player in &game.players {
            if player.is_impostor {
                assert_eq!(player.word, IMPOSTOR_MESSAGE);
            } else {
                assert_eq!(player.word, game.secret_word);
            }
            assert!(!player.word_revealed);
            assert!(player.clue.is_none());
        }
        assert_ne!(game.secret_word, IMPOSTOR_MESSAGE);
    }

    #[test]
    fn test_impostor_names_match_flagged_players() {
        let game = setup(10, 2);
        let flagged: Vec<&String> = game
            .players
            .iter()
            .filter(|p| p.is_impostor)
            .map(|p| &p.name)
            .collect();
        assert_eq!(game.impostor_names.len(), 3);
        for name in &game.impostor_names {
            assert!(flagged.contains(&name));
        }
    }

    #[test]
    fn test_player_ids_are_distinct() {
        let game = setup(16, 3);
        let mut ids: Vec<&String> = game.players.iter().map(|p| &p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }

    #[test]
    fn test_rejected_count_leaves_no_partial_state() {
        let mut history = HistoryRecord::default();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for n in [0, 1, 2, 17, 30] {
            let result = ImpostorGame::setup(&names(n), &mut history, &mut rng);
            assert!(matches!(
                result,
                Err(GameError::PlayerCount {
                    game: "impostor",
                    min: 3,
                    max: 16,
                    ..
                })
            ));
        }
        assert!(history.played_words.is_empty());
    }

    #[test]
    fn test_setup_marks_the_word_as_played() {
        let mut history = HistoryRecord::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let game = ImpostorGame::setup(&names(4), &mut history, &mut rng).unwrap();
        assert!(history.is_recent_word(&game.secret_word));

        // The next round draws a different word.
        let next = game.play_again(&mut history, &mut rng).unwrap();
        assert_ne!(next.secret_word, game.secret_word);
    }

    #[test]
    fn test_same_seed_deals_the_same_round() {
        let a = setup(8, 77);
        let b = setup(8, 77);
        assert_eq!(a.secret_word, b.secret_word);
        let seats_a: Vec<(&String, bool)> =
            a.players.iter().map(|p| (&p.name, p.is_impostor)).collect();
        let seats_b: Vec<(&String, bool)> =
            b.players.iter().map(|p| (&p.name, p.is_impostor)).collect();
        assert_eq!(seats_a, seats_b);
    }

    #[test]
    fn test_reveal_all_words_starts_the_clue_round() {
        let mut game = setup(3, 6);
        assert_eq!(game.phase, ImpostorPhase::WordReveal);

        let ids: Vec<String> = game.players.iter().map(|p| p.id.clone()).collect();
        game.reveal_word(&ids[0]).unwrap();
        assert_eq!(game.phase, ImpostorPhase::WordReveal);
        game.reveal_word(&ids[1]).unwrap();
        game.reveal_word(&ids[2]).unwrap();
        assert_eq!(game.phase, ImpostorPhase::Playing);
    }

    #[test]
    fn test_reveal_rejects_unknown_player() {
        let mut game = setup(3, 6);
        assert_eq!(
            game.reveal_word("nobody"),
            Err(GameError::UnknownPlayer("nobody".to_string()))
        );
    }

    #[test]
    fn test_clues_only_during_playing_phase() {
        let mut game = setup(3, 6);
        let id = game.players[0].id.clone();
        assert!(matches!(
            game.submit_clue(&id, "ocean"),
            Err(GameError::WrongPhase { .. })
        ));

        let ids: Vec<String> = game.players.iter().map(|p| p.id.clone()).collect();
        for id in &ids {
            game.reveal_word(id).unwrap();
        }
        assert_eq!(game.submit_clue(&ids[0], "  "), Err(GameError::EmptyClue));
        game.submit_clue(&ids[0], "ocean").unwrap();
        game.submit_clue(&ids[0], "wave").unwrap();
        assert_eq!(game.players[0].clue.as_deref(), Some("wave"));
    }

    #[test]
    fn test_finish_requires_playing_phase() {
        let mut game = setup(3, 6);
        assert!(matches!(
            game.finish(),
            Err(GameError::WrongPhase { .. })
        ));

        let ids: Vec<String> = game.players.iter().map(|p| p.id.clone()).collect();
        for id in &ids {
            game.reveal_word(id).unwrap();
        }
        game.finish().unwrap();
        assert_eq!(game.phase, ImpostorPhase::Results);
        assert!(matches!(game.finish(), Err(GameError::WrongPhase { .. })));
    }

    #[test]
    fn test_three_player_round_always_has_one_impostor_two_civilians() {
        for seed in 0..20 {
            let game = setup(3, seed);
            let civilians: Vec<_> = game.players.iter().filter(|p| !p.is_impostor).collect();
            assert_eq!(civilians.len(), 2, "seed {seed}");
            assert!(civilians.iter().all(|p| p.word == game.secret_word));
            let impostor = game.players.iter().find(|p| p.is_impostor).unwrap();
            assert_eq!(impostor.word, IMPOSTOR_MESSAGE);
        }
    }

    #[test]
    fn test_phase_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&ImpostorPhase::WordReveal).unwrap(),
            "\"wordReveal\""
        );
    }
}
