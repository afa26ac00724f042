use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Opaque ID types for type safety
pub type PlayerId = String;
pub type QuestionId = String;

/// Mint a fresh player id.
pub fn new_player_id() -> PlayerId {
    ulid::Ulid::new().to_string()
}

/// Which side of the secret word a player is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClueRole {
    Civilian,
    Impostor,
}

impl ClueRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ClueRole::Civilian => "civilian",
            ClueRole::Impostor => "impostor",
        }
    }
}

/// Form-level cleanup for a setup screen's name list.
///
/// Trims every name, rejects empties and case-insensitive duplicates.
/// The engines themselves only enforce count bounds, so callers that skip
/// this get whatever names they passed in.
pub fn validate_player_names(names: &[String]) -> Result<Vec<String>, GameError> {
    let mut seen = HashSet::new();
    let mut cleaned = Vec::with_capacity(names.len());
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(GameError::EmptyName);
        }
        if !seen.insert(trimmed.to_lowercase()) {
            return Err(GameError::DuplicateName(trimmed.to_string()));
        }
        cleaned.push(trimmed.to_string());
    }
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_ids_are_unique() {
        let a = new_player_id();
        let b = new_player_id();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_validate_trims_names() {
        let names = vec!["  Ada ".to_string(), "Grace".to_string()];
        let cleaned = validate_player_names(&names).unwrap();
        assert_eq!(cleaned, vec!["Ada".to_string(), "Grace".to_string()]);
    }

    #[test]
    fn test_validate_rejects_blank_names() {
        let names = vec!["Ada".to_string(), "   ".to_string()];
        assert_eq!(validate_player_names(&names), Err(GameError::EmptyName));
    }

    #[test]
    fn test_validate_rejects_duplicates_case_insensitively() {
        let names = vec!["Ada".to_string(), "ada ".to_string()];
        assert_eq!(
            validate_player_names(&names),
            Err(GameError::DuplicateName("ada".to_string()))
        );
    }

    #[test]
    fn test_clue_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ClueRole::Impostor).unwrap(),
            "\"impostor\""
        );
        let role: ClueRole = serde_json::from_str("\"civilian\"").unwrap();
        assert_eq!(role, ClueRole::Civilian);
    }
}
