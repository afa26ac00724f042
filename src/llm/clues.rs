//! Clue assist for the impostor game.
//!
//! Two operations on top of any [`LlmProvider`]: suggest a clue word for
//! one player, and rank a finished round's clues by how impostor-like they
//! read. Both build a prompt, run a single completion, dig the JSON object
//! out of the reply and validate its shape. No retries; a mangled reply
//! surfaces as [`LlmError::ParseError`] and the table plays on without the
//! assist.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{CompletionRequest, LlmError, LlmManager, LlmProvider, LlmResult};
use crate::types::ClueRole;

const SUGGEST_MAX_TOKENS: u32 = 200;
const RANK_MAX_TOKENS: u32 = 800;
const CLUE_TIMEOUT: Duration = Duration::from_secs(30);

/// Input for a clue suggestion.
#[derive(Debug, Clone)]
pub struct SuggestClueRequest {
    pub player_role: ClueRole,
    /// What this player's own card says (the sentinel text for impostors).
    pub word_known_by_player: String,
    /// The word the civilians actually hold.
    pub actual_civilian_word: String,
}

/// A suggested clue with the model's reasoning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClueSuggestion {
    pub suggested_clue: String,
    pub justification: String,
}

/// One table entry for a ranking request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClueEntry {
    pub name: String,
    pub role: ClueRole,
    pub clue: String,
}

/// Input for ranking a finished round's clues.
#[derive(Debug, Clone)]
pub struct RankCluesRequest {
    pub civilian_word: String,
    pub players: Vec<ClueEntry>,
}

/// A ranked clue. Rank 1 is the clue the model finds most impostor-like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedClue {
    pub player_name: String,
    pub clue: String,
    pub role: ClueRole,
    pub rank: u32,
    pub justification: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RankReply {
    ranked_clues: Vec<RankedClue>,
}

/// Ask for a one-word clue suggestion for a single player.
///
/// The reply must be a JSON object with a single-word `suggestedClue`;
/// anything else is a parse error.
pub async fn suggest_clue(
    provider: &dyn LlmProvider,
    request: &SuggestClueRequest,
) -> LlmResult<ClueSuggestion> {
    let completion = provider
        .complete(CompletionRequest {
            prompt: suggest_prompt(request),
            max_tokens: Some(SUGGEST_MAX_TOKENS),
            timeout: CLUE_TIMEOUT,
            model_override: None,
        })
        .await?;

    let suggestion: ClueSuggestion = parse_json_reply(&completion.text)?;
    let clue = suggestion.suggested_clue.trim();
    if clue.is_empty() || clue.split_whitespace().count() != 1 {
        return Err(LlmError::ParseError(format!(
            "expected a single-word clue, got {:?}",
            suggestion.suggested_clue
        )));
    }

    Ok(ClueSuggestion {
        suggested_clue: clue.to_string(),
        justification: suggestion.justification,
    })
}

/// Fan a suggestion out to every configured provider.
/// Returns (provider_name, suggestion) pairs for the replies that parsed;
/// an empty vector means nobody delivered.
pub async fn suggest_clue_all(
    manager: &LlmManager,
    request: &SuggestClueRequest,
) -> Vec<(String, ClueSuggestion)> {
    let completions = manager
        .complete_all(CompletionRequest {
            prompt: suggest_prompt(request),
            max_tokens: Some(SUGGEST_MAX_TOKENS),
            timeout: CLUE_TIMEOUT,
            model_override: None,
        })
        .await;

    completions
        .into_iter()
        .filter_map(|(provider, completion)| {
            match parse_json_reply::<ClueSuggestion>(&completion.text) {
                Ok(suggestion) => Some((provider, suggestion)),
                Err(e) => {
                    tracing::warn!("Provider {} sent an unusable suggestion: {}", provider, e);
                    None
                }
            }
        })
        .collect()
}

/// Ask the model to rank a round's clues by how impostor-like they read.
///
/// The result comes back sorted ascending by rank. An empty list is a valid
/// verdict (the model refusing to point fingers); ranks below 1 are not.
pub async fn rank_clues(
    provider: &dyn LlmProvider,
    request: &RankCluesRequest,
) -> LlmResult<Vec<RankedClue>> {
    let completion = provider
        .complete(CompletionRequest {
            prompt: rank_prompt(request),
            max_tokens: Some(RANK_MAX_TOKENS),
            timeout: CLUE_TIMEOUT,
            model_override: None,
        })
        .await?;

    let reply: RankReply = parse_json_reply(&completion.text)?;
    if reply.ranked_clues.iter().any(|clue| clue.rank < 1) {
        return Err(LlmError::ParseError("ranks must start at 1".to_string()));
    }

    let mut ranked = reply.ranked_clues;
    ranked.sort_by_key(|clue| clue.rank);
    Ok(ranked)
}

fn suggest_prompt(request: &SuggestClueRequest) -> String {
    format!(
        "You are helping one player in a social-deduction word game. Players take turns \
         saying exactly one word related to a shared secret word. Impostors do not know \
         the secret word and must blend in.\n\
         \n\
         This player's role: {role}\n\
         This player's card says: {known:?}\n\
         The civilians' actual word is: {actual:?}\n\
         \n\
         Suggest one clue word for this player. For a civilian it should clearly relate \
         to the word without giving it away; for an impostor it should sound plausible \
         while committing to nothing.\n\
         Reply with only a JSON object, no other text:\n\
         {{\"suggestedClue\": \"<one word>\", \"justification\": \"<one sentence>\"}}",
        role = request.player_role.as_str(),
        known = request.word_known_by_player,
        actual = request.actual_civilian_word,
    )
}

fn rank_prompt(request: &RankCluesRequest) -> String {
    let mut table = String::new();
    for player in &request.players {
        table.push_str(&format!(
            "- {} ({}): {:?}\n",
            player.name,
            player.role.as_str(),
            player.clue
        ));
    }

    format!(
        "A round of a social-deduction word game just ended. Civilians knew the secret \
         word {word:?}; impostors did not and had to bluff. Each player said one clue \
         word:\n\
         {table}\
         \n\
         Rank the clues from most impostor-like (rank 1) to most clearly in the know. \
         Echo each player's role exactly as given, in lowercase.\n\
         Reply with only a JSON object, no other text:\n\
         {{\"rankedClues\": [{{\"playerName\": \"...\", \"clue\": \"...\", \"role\": \
         \"civilian\", \"rank\": 1, \"justification\": \"<one sentence>\"}}]}}",
        word = request.civilian_word,
        table = table,
    )
}

/// Pull the first JSON object out of a completion, tolerating code fences
/// and prose around it.
fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end >= start).then(|| &text[start..=end])
}

fn parse_json_reply<T: DeserializeOwned>(text: &str) -> LlmResult<T> {
    let json = extract_json(text)
        .ok_or_else(|| LlmError::ParseError("no JSON object in reply".to_string()))?;
    serde_json::from_str(json).map_err(|e| LlmError::ParseError(e.to_string()))
}
