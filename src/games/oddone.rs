//! The odd-one-out variant: everyone answers the same question aloud,
//! except one player whose prompt is subtly different. Mechanically a
//! sibling of the impostor game, with question cards instead of words.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::content::QUESTION_PAIRS;
use crate::error::GameError;
use crate::history::HistoryRecord;
use crate::rng::{pick_index, shuffle};
use crate::types::{new_player_id, PlayerId, QuestionId};

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 16;

/// Owned copy of a question pair, so snapshots deserialize standalone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionCard {
    pub id: QuestionId,
    pub main: String,
    pub decoy: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OddOnePlayer {
    pub id: PlayerId,
    pub name: String,
    /// The question on this player's private card.
    pub question: String,
    pub is_odd: bool,
    pub question_revealed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OddOnePhase {
    QuestionReveal,
    Playing,
    Results,
}

impl OddOnePhase {
    pub fn name(self) -> &'static str {
        match self {
            OddOnePhase::QuestionReveal => "questionReveal",
            OddOnePhase::Playing => "playing",
            OddOnePhase::Results => "results",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OddOneGame {
    pub players: Vec<OddOnePlayer>,
    pub question: QuestionCard,
    pub odd_player_name: String,
    pub phase: OddOnePhase,
}

impl OddOneGame {
    /// Deal a fresh round: draw a question pair the table hasn't seen
    /// lately and slip the decoy to one player. A count outside the
    /// supported range fails before anything is drawn.
    pub fn setup<R: Rng>(
        names: &[String],
        history: &mut HistoryRecord,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(GameError::player_count(
                "oddone",
                names.len(),
                MIN_PLAYERS,
                MAX_PLAYERS,
            ));
        }

        let pool = history.filter_unused_questions(QUESTION_PAIRS);
        let pair = pool[pick_index(rng, pool.len())];
        history.mark_question_used(pair.id);

        let odd_seat = pick_index(rng, names.len());
        let players: Vec<OddOnePlayer> = names
            .iter()
            .enumerate()
            .map(|(seat, name)| OddOnePlayer {
                id: new_player_id(),
                name: name.clone(),
                question: if seat == odd_seat {
                    pair.decoy.to_string()
                } else {
                    pair.main.to_string()
                },
                is_odd: seat == odd_seat,
                question_revealed: false,
            })
            .collect();

        Ok(Self {
            odd_player_name: names[odd_seat].clone(),
            players: shuffle(rng, &players),
            question: QuestionCard {
                id: pair.id.to_string(),
                main: pair.main.to_string(),
                decoy: pair.decoy.to_string(),
            },
            phase: OddOnePhase::QuestionReveal,
        })
    }

    /// Mark a player's private card as seen. Once the last player has
    /// looked, the answering round begins.
    pub fn reveal_question(&mut self, player_id: &str) -> Result<(), GameError> {
        if self.phase != OddOnePhase::QuestionReveal {
            return Err(GameError::WrongPhase {
                action: "reveal a question",
                phase: self.phase.name(),
            });
        }
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or_else(|| GameError::UnknownPlayer(player_id.to_string()))?;
        player.question_revealed = true;

        if self.players.iter().all(|p| p.question_revealed) {
            self.phase = OddOnePhase::Playing;
        }
        Ok(())
    }

    /// Unmask the odd player and show both questions.
    pub fn finish(&mut self) -> Result<(), GameError> {
        if self.phase != OddOnePhase::Playing {
            return Err(GameError::WrongPhase {
                action: "reveal the odd one",
                phase: self.phase.name(),
            });
        }
        self.phase = OddOnePhase::Results;
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Player{i}")).collect()
    }

    fn setup(n: usize, seed: u64) -> OddOneGame {
        let mut history = HistoryRecord::default();
        OddOneGame::setup(&names(n), &mut history, &mut ChaCha8Rng::seed_from_u64(seed))
            .unwrap()
    }

    #[test]
    fn test_exactly_one_odd_player() {
        for n in MIN_PLAYERS..=MAX_PLAYERS {
            let game = setup(n, n as u64);
            assert_eq!(
                game.players.iter().filter(|p| p.is_odd).count(),
                1,
                "at {n} players"
            );
        }
    }

    #[test]
    fn test_odd_player_holds_the_decoy() {
        let game = setup(6, 1);
        for player in &game.players {
            if player.is_odd {
                assert_eq!(player.question, game.question.decoy);
                assert_eq!(player.name, game.odd_player_name);
            } else {
                assert_eq!(player.question, game.question.main);
            }
        }
    }

    #[test]
    fn test_player_count_bounds() {
        let mut history = HistoryRecord::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for n in [2, 17] {
            let result = OddOneGame::setup(&names(n), &mut history, &mut rng);
            assert!(matches!(
                result,
                Err(GameError::PlayerCount { game: "oddone", .. })
            ));
        }
        assert!(history.played_questions.is_empty());
    }

    #[test]
    fn test_setup_marks_the_question_as_played() {
        let mut history = HistoryRecord::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let game = OddOneGame::setup(&names(4), &mut history, &mut rng).unwrap();
        assert!(history.is_recent_question(&game.question.id));

        let next = game.play_again(&mut history, &mut rng).unwrap();
        assert_ne!(next.question.id, game.question.id);
    }

    #[test]
    fn test_exhausted_question_deck_still_deals() {
        let mut history = HistoryRecord::default();
        for pair in QUESTION_PAIRS {
            history.mark_question_used(pair.id);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let game = OddOneGame::setup(&names(3), &mut history, &mut rng).unwrap();
        assert!(!game.question.id.is_empty());
    }

    #[test]
    fn test_reveal_flow_reaches_results() {
        let mut game = setup(3, 5);
        assert_eq!(game.phase, OddOnePhase::QuestionReveal);
        assert!(matches!(game.finish(), Err(GameError::WrongPhase { .. })));

        let ids: Vec<String> = game.players.iter().map(|p| p.id.clone()).collect();
        for id in &ids {
            game.reveal_question(id).unwrap();
        }
        assert_eq!(game.phase, OddOnePhase::Playing);

        game.finish().unwrap();
        assert_eq!(game.phase, OddOnePhase::Results);
    }

    #[test]
    fn test_reveal_rejects_unknown_player() {
        let mut game = setup(3, 6);
        assert_eq!(
            game.reveal_question("nobody"),
            Err(GameError::UnknownPlayer("nobody".to_string()))
        );
    }

    #[test]
    fn test_phase_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&OddOnePhase::QuestionReveal).unwrap(),
            "\"questionReveal\""
        );
    }
}
