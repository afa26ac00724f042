//! Recent-use history for secret words and question cards.
//!
//! Keeps a round from repeating what the same table just played. The bias
//! is soft: once every candidate has been seen, selection falls back to the
//! full pool rather than starving.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::QuestionPair;

/// Entries kept per category before the oldest are evicted.
pub const HISTORY_CAP: usize = 200;

/// The persisted recent-use record.
///
/// Word keys are stored lowercased and compared case-insensitively;
/// question ids are compared exactly. Both lists run oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryRecord {
    pub played_words: Vec<String>,
    pub played_questions: Vec<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl HistoryRecord {
    pub fn is_recent_word(&self, word: &str) -> bool {
        let key = word.to_lowercase();
        self.played_words.contains(&key)
    }

    pub fn is_recent_question(&self, id: &str) -> bool {
        self.played_questions.iter().any(|q| q == id)
    }

    /// Record that `word` was just played. Re-marking a word that is still
    /// in the list changes nothing, not even its position.
    pub fn mark_word_used(&mut self, word: &str) {
        let key = word.to_lowercase();
        if self.played_words.contains(&key) {
            return;
        }
        self.played_words.push(key);
        evict_oldest(&mut self.played_words);
        self.last_updated = Some(Utc::now());
    }

    /// Record that the question pair with `id` was just played.
    pub fn mark_question_used(&mut self, id: &str) {
        if self.is_recent_question(id) {
            return;
        }
        self.played_questions.push(id.to_string());
        evict_oldest(&mut self.played_questions);
        self.last_updated = Some(Utc::now());
    }

    /// The candidates not played recently, or all of them when every single
    /// one has been.
    pub fn filter_unused_words<'a>(&self, candidates: &[&'a str]) -> Vec<&'a str> {
        filter_soft(candidates, |word| self.is_recent_word(word))
    }

    /// Same soft filter, keyed on question ids.
    pub fn filter_unused_questions(&self, candidates: &[QuestionPair]) -> Vec<QuestionPair> {
        filter_soft(candidates, |pair| self.is_recent_question(pair.id))
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        *self = HistoryRecord::default();
    }
}

fn evict_oldest(entries: &mut Vec<String>) {
    while entries.len() > HISTORY_CAP {
        entries.remove(0);
    }
}

fn filter_soft<T: Copy>(candidates: &[T], recently_used: impl Fn(&T) -> bool) -> Vec<T> {
    let fresh: Vec<T> = candidates
        .iter()
        .copied()
        .filter(|c| !recently_used(c))
        .collect();
    if fresh.is_empty() {
        candidates.to_vec()
    } else {
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_word_is_case_insensitive() {
        let mut history = HistoryRecord::default();
        history.mark_word_used("Pizza");
        assert!(history.is_recent_word("pizza"));
        assert!(history.is_recent_word("PIZZA"));
        assert!(!history.is_recent_word("Pasta"));
    }

    #[test]
    fn test_mark_word_twice_changes_nothing() {
        let mut history = HistoryRecord::default();
        history.mark_word_used("Igloo");
        history.mark_word_used("Kayak");
        let before = history.played_words.clone();
        history.mark_word_used("igloo");
        assert_eq!(history.played_words, before);
    }

    #[test]
    fn test_oldest_word_is_evicted_at_cap() {
        let mut history = HistoryRecord::default();
        for i in 0..HISTORY_CAP {
            history.mark_word_used(&format!("word{i}"));
        }
        assert_eq!(history.played_words.len(), HISTORY_CAP);
        assert!(history.is_recent_word("word0"));

        history.mark_word_used("one-more");
        assert_eq!(history.played_words.len(), HISTORY_CAP);
        assert!(!history.is_recent_word("word0"));
        assert!(history.is_recent_word("word1"));
        assert!(history.is_recent_word("one-more"));
    }

    #[test]
    fn test_filter_skips_recent_words() {
        let mut history = HistoryRecord::default();
        history.mark_word_used("Igloo");
        let pool = ["Igloo", "Kayak", "Waffle"];
        assert_eq!(history.filter_unused_words(&pool), vec!["Kayak", "Waffle"]);
    }

    #[test]
    fn test_filter_falls_back_to_full_pool_when_exhausted() {
        let mut history = HistoryRecord::default();
        history.mark_word_used("Igloo");
        history.mark_word_used("Kayak");
        let pool = ["Igloo", "Kayak"];
        assert_eq!(history.filter_unused_words(&pool), vec!["Igloo", "Kayak"]);
    }

    #[test]
    fn test_question_ids_filter_exactly() {
        let pairs = [
            QuestionPair {
                id: "a",
                main: "m",
                decoy: "d",
            },
            QuestionPair {
                id: "b",
                main: "m",
                decoy: "d",
            },
        ];
        let mut history = HistoryRecord::default();
        history.mark_question_used("a");
        let fresh = history.filter_unused_questions(&pairs);
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].id, "b");
    }

    #[test]
    fn test_clear_forgets_everything() {
        let mut history = HistoryRecord::default();
        history.mark_word_used("Igloo");
        history.mark_question_used("bedtime");
        history.clear();
        assert_eq!(history, HistoryRecord::default());
    }

    #[test]
    fn test_serialized_shape_uses_camel_case_keys() {
        let mut history = HistoryRecord::default();
        history.mark_word_used("Igloo");
        let json = serde_json::to_string(&history).unwrap();
        assert!(json.contains("\"playedWords\""));
        assert!(json.contains("\"playedQuestions\""));
        assert!(json.contains("\"lastUpdated\""));

        // Older blobs may miss fields entirely.
        let partial: HistoryRecord = serde_json::from_str("{\"playedWords\":[\"igloo\"]}").unwrap();
        assert!(partial.is_recent_word("Igloo"));
        assert!(partial.played_questions.is_empty());
    }
}
