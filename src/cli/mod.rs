//! CLI command implementations

pub mod challenge;
pub mod credit;
pub mod init;
pub mod stats;
pub mod status;
pub mod tracking;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crucible::clock::SystemClock;
use crucible::config::{Config, FileConfigSource};
use crucible::store::{JsonFileStore, StateScope};
use crucible::tracker::TrackerSession;

/// A file-backed session for one command invocation
pub struct CliSession {
    pub session: TrackerSession,
    pub scope: StateScope,
}

/// Open the session for `work_dir`, using a project record if one exists.
///
/// Credits whose grace period ended since the last run are committed before
/// the command reads or changes anything.
pub fn open_session(work_dir: &Path, config_path: Option<&Path>) -> CliSession {
    let scope = StateScope::detect(work_dir);
    let config_path: PathBuf = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);
    tracing::debug!(
        state = %scope.state_path().display(),
        config = %config_path.display(),
        "Opening session"
    );

    let mut session = TrackerSession::new(
        JsonFileStore::for_scope(&scope),
        Arc::new(SystemClock),
        FileConfigSource::new(config_path),
    );
    session.commit_ready();
    CliSession { session, scope }
}
