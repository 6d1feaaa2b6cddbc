//! Persistence for the challenge state
//!
//! The tracker loads the whole record at the start of every operation and
//! saves it back after each mutation. Saving `None` deletes the record.

mod atomic;
mod recover;
mod scope;

pub use atomic::{remove_locked, write_atomic};
pub use recover::decode_state;
pub use scope::{StateScope, PROJECT_DIR};

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::domain::ChallengeState;
use crate::Result;

/// Backing storage for one logical challenge record
pub trait StateStore: Send + Sync {
    /// Load the record. `today` fills in a missing `lastUpdateDate`.
    fn load(&self, today: NaiveDate) -> Result<Option<ChallengeState>>;

    /// Persist the record, or delete it when `state` is `None`
    fn save(&self, state: Option<&ChallengeState>) -> Result<()>;
}

/// JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn for_scope(scope: &StateScope) -> Self {
        Self::new(scope.state_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self, today: NaiveDate) -> Result<Option<ChallengeState>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(decode_state(&content, today))
    }

    fn save(&self, state: Option<&ChallengeState>) -> Result<()> {
        match state {
            Some(state) => {
                let content = serde_json::to_string_pretty(state)?;
                write_atomic(&self.path, content.as_bytes())?;
            }
            None => remove_locked(&self.path)?,
        }
        Ok(())
    }
}

/// In-memory store; clones share the same record
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<Option<ChallengeState>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: ChallengeState) -> Self {
        Self {
            state: Arc::new(Mutex::new(Some(state))),
        }
    }

    /// Current stored record, bypassing the tracker
    pub fn snapshot(&self) -> Option<ChallengeState> {
        self.state.lock().expect("store lock poisoned").clone()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, _today: NaiveDate) -> Result<Option<ChallengeState>> {
        Ok(self.snapshot())
    }

    fn save(&self, state: Option<&ChallengeState>) -> Result<()> {
        *self.state.lock().expect("store lock poisoned") = state.cloned();
        Ok(())
    }
}
