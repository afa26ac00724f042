//! Session persistence: one device, four game slots, one shared history.
//!
//! Every start/save call writes through to the injected store immediately,
//! so a crash or an app switch costs nothing. Loads are forgiving: a blob
//! that is missing, corrupt, or written by a newer schema comes back as
//! "no active game", never as an error.

use chrono::Utc;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::games::impostor::ImpostorGame;
use crate::games::oddone::OddOneGame;
use crate::games::spyfall::SpyfallGame;
use crate::games::wavelength::WavelengthGame;
use crate::history::HistoryRecord;
use crate::storage::{self, KeyValueStore};

/// Bumped whenever a persisted game-state shape changes incompatibly.
pub const SCHEMA_VERSION: u32 = 1;

/// Envelope around every persisted game state.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<T> {
    schema_version: u32,
    saved_at: String,
    game: T,
}

/// One device's games over an injected store.
pub struct GameSession<S: KeyValueStore> {
    store: S,
    history: HistoryRecord,
}

impl<S: KeyValueStore> GameSession<S> {
    /// Open a session over `store`, loading the shared history. A corrupt
    /// history blob is logged and replaced by an empty one.
    pub fn open(store: S) -> Self {
        let history = match store.get(storage::KEY_HISTORY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(history) => history,
                Err(e) => {
                    tracing::warn!("stored history is corrupt ({}), starting empty", e);
                    HistoryRecord::default()
                }
            },
            None => HistoryRecord::default(),
        };
        Self { store, history }
    }

    pub fn history(&self) -> &HistoryRecord {
        &self.history
    }

    /// Forget which words and questions were recently played.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.store.remove(storage::KEY_HISTORY);
    }

    /// Hand the store back, e.g. to reuse it for a fresh session.
    pub fn into_store(self) -> S {
        self.store
    }

    // ---- impostor ----

    /// Deal a fresh impostor round and persist it as the active session.
    pub fn start_impostor<R: Rng>(
        &mut self,
        names: &[String],
        rng: &mut R,
    ) -> Result<ImpostorGame, GameError> {
        let game = ImpostorGame::setup(names, &mut self.history, rng)?;
        self.persist_history();
        self.save_state(storage::KEY_IMPOSTOR, &game);
        Ok(game)
    }

    pub fn load_impostor(&self) -> Option<ImpostorGame> {
        self.load_state(storage::KEY_IMPOSTOR)
    }

    /// Persist a game mutated outside the session, e.g. after a reveal.
    pub fn save_impostor(&mut self, game: &ImpostorGame) {
        self.save_state(storage::KEY_IMPOSTOR, game);
    }

    pub fn end_impostor(&mut self) {
        self.store.remove(storage::KEY_IMPOSTOR);
    }

    // ---- spyfall ----

    pub fn start_spyfall<R: Rng>(
        &mut self,
        names: &[String],
        timer_seconds: Option<u32>,
        rng: &mut R,
    ) -> Result<SpyfallGame, GameError> {
        let game = SpyfallGame::setup(names, timer_seconds, rng)?;
        self.save_state(storage::KEY_SPYFALL, &game);
        Ok(game)
    }

    pub fn load_spyfall(&self) -> Option<SpyfallGame> {
        self.load_state(storage::KEY_SPYFALL)
    }

    pub fn save_spyfall(&mut self, game: &SpyfallGame) {
        self.save_state(storage::KEY_SPYFALL, game);
    }

    pub fn end_spyfall(&mut self) {
        self.store.remove(storage::KEY_SPYFALL);
    }

    // ---- wavelength ----

    pub fn start_wavelength<R: Rng>(
        &mut self,
        names: &[String],
        max_rounds: Option<u32>,
        rng: &mut R,
    ) -> Result<WavelengthGame, GameError> {
        let game = WavelengthGame::setup(names, max_rounds, rng)?;
        self.save_state(storage::KEY_WAVELENGTH, &game);
        Ok(game)
    }

    pub fn load_wavelength(&self) -> Option<WavelengthGame> {
        self.load_state(storage::KEY_WAVELENGTH)
    }

    pub fn save_wavelength(&mut self, game: &WavelengthGame) {
        self.save_state(storage::KEY_WAVELENGTH, game);
    }

    pub fn end_wavelength(&mut self) {
        self.store.remove(storage::KEY_WAVELENGTH);
    }

    // ---- odd one out ----

    pub fn start_odd_one<R: Rng>(
        &mut self,
        names: &[String],
        rng: &mut R,
    ) -> Result<OddOneGame, GameError> {
        let game = OddOneGame::setup(names, &mut self.history, rng)?;
        self.persist_history();
        self.save_state(storage::KEY_ODD_ONE, &game);
        Ok(game)
    }

    pub fn load_odd_one(&self) -> Option<OddOneGame> {
        self.load_state(storage::KEY_ODD_ONE)
    }

    pub fn save_odd_one(&mut self, game: &OddOneGame) {
        self.save_state(storage::KEY_ODD_ONE, game);
    }

    pub fn end_odd_one(&mut self) {
        self.store.remove(storage::KEY_ODD_ONE);
    }

    // ---- plumbing ----

    fn persist_history(&mut self) {
        match serde_json::to_string(&self.history) {
            Ok(raw) => self.store.set(storage::KEY_HISTORY, &raw),
            Err(e) => tracing::error!("failed to serialize history: {}", e),
        }
    }

    fn save_state<T: Serialize>(&mut self, key: &str, game: &T) {
        let snapshot = Snapshot {
            schema_version: SCHEMA_VERSION,
            saved_at: Utc::now().to_rfc3339(),
            game,
        };
        match serde_json::to_string(&snapshot) {
            Ok(raw) => self.store.set(key, &raw),
            Err(e) => tracing::error!(key, "failed to serialize game state: {}", e),
        }
    }

    fn load_state<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str::<Snapshot<T>>(&raw) {
            Ok(snapshot) if snapshot.schema_version <= SCHEMA_VERSION => Some(snapshot.game),
            Ok(snapshot) => {
                tracing::warn!(
                    key,
                    found = snapshot.schema_version,
                    supported = SCHEMA_VERSION,
                    "snapshot written by a newer schema, ignoring"
                );
                None
            }
            Err(e) => {
                tracing::warn!(key, "stored game state is corrupt ({}), ignoring", e);
                None
            }
        }
    }
}
