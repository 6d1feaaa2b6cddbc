//! Editing session: the single owner of tracker state for one host session
//!
//! Every operation follows load -> roll over -> mutate -> save. Settings are
//! re-read from the config source each time. Nothing here fails the host:
//! storage errors are logged and the operation continues on defaults.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use super::counter::{self, CreditOutcome, Rollover};
use super::ledger;
use super::policy::Gate;
use super::reconcile::Baselines;
use crate::clock::Clock;
use crate::config::{ConfigSource, TrackingSettings};
use crate::domain::{
    ChallengePreset, ChallengeState, EditEvent, EditKind, CITATION_CREDIT, CRUCIBLE_GOAL,
    REVISION_CREDIT,
};
use crate::error::validate_correction;
use crate::notify::{DisplaySink, Notification, NotificationSink, NullDisplay, TracingNotifier};
use crate::stats::{render_report, ChartData, Statistics, StatusView};
use crate::store::StateStore;
use crate::Result;

/// Session shared between the edit path and the commit scheduler
pub type SharedSession = Arc<Mutex<TrackerSession>>;

/// What an edit did to the pending ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOutcome {
    pub gate: Gate,
    /// Characters appended to the ledger (after the per-edit cap)
    pub credited: u64,
    /// Characters cancelled from the ledger
    pub reversed: u64,
    /// Deleted characters with no pending credit left to cancel
    pub unmatched: u64,
}

impl EditOutcome {
    fn gated(gate: Gate) -> Self {
        Self {
            gate,
            credited: 0,
            reversed: 0,
            unmatched: 0,
        }
    }

    fn changed_ledger(&self) -> bool {
        self.credited > 0 || self.reversed > 0
    }
}

pub struct TrackerSession {
    store: Box<dyn StateStore>,
    clock: Arc<dyn Clock>,
    config: Box<dyn ConfigSource>,
    notifier: Box<dyn NotificationSink>,
    display: Box<dyn DisplaySink>,
    baselines: Baselines,
}

impl TrackerSession {
    pub fn new(
        store: impl StateStore + 'static,
        clock: Arc<dyn Clock>,
        config: impl ConfigSource + 'static,
    ) -> Self {
        Self {
            store: Box::new(store),
            clock,
            config: Box::new(config),
            notifier: Box::new(TracingNotifier),
            display: Box::new(NullDisplay),
            baselines: Baselines::new(),
        }
    }

    pub fn with_notifier(mut self, notifier: impl NotificationSink + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_display(mut self, display: impl DisplaySink + 'static) -> Self {
        self.display = Box::new(display);
        self
    }

    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    /// Current settings, freshly read
    pub fn settings(&self) -> TrackingSettings {
        self.config.tracking()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Last known length of a document
    pub fn baseline(&self, document_id: &str) -> Option<usize> {
        self.baselines.get(document_id)
    }

    // ========================================
    // EDIT PATH
    // ========================================

    /// A document became active or was otherwise checkpointed.
    ///
    /// Sets the length baseline without crediting anything.
    pub fn observe_document(&mut self, document_id: &str, current_len: usize) -> StatusView {
        self.baselines.observe(document_id, current_len);
        let (state, rolled) = self.begin();
        if rolled {
            self.save(Some(&state));
        }
        self.push_status(&state)
    }

    /// A document was closed; drop its baseline
    pub fn close_document(&mut self, document_id: &str) {
        self.baselines.forget(document_id);
    }

    /// Process a change notification.
    ///
    /// The baseline is refreshed to `current_len` whether or not the edit is
    /// credited, so a later tracked edit never replays an untracked gap.
    pub fn handle_change(&mut self, event: &EditEvent, current_len: usize) -> EditOutcome {
        let settings = self.config.tracking();
        self.baselines.observe(&event.document_id, current_len);

        let (mut state, rolled) = self.begin();
        let gate = Gate::evaluate(state.tracking_paused, &settings, &event.type_id);
        if !gate.is_open() {
            tracing::debug!(document = %event.document_id, ?gate, "Edit not tracked");
            self.settle(&state, rolled);
            return EditOutcome::gated(gate);
        }

        let now = self.clock.now();
        let mut outcome = EditOutcome::gated(gate);
        for kind in event.classified() {
            record_edit(&mut state, kind, &settings, now, &mut outcome);
        }
        tracing::debug!(
            document = %event.document_id,
            credited = outcome.credited,
            reversed = outcome.reversed,
            unmatched = outcome.unmatched,
            "Edit processed"
        );

        self.settle(&state, outcome.changed_ledger() || rolled);
        outcome
    }

    /// Reconcile a document's full length against its baseline.
    ///
    /// Used at checkpoints where no explicit change event was delivered.
    /// Returns `None` when there was no baseline or no difference.
    pub fn reconcile(
        &mut self,
        document_id: &str,
        type_id: &str,
        current_len: usize,
    ) -> Option<EditOutcome> {
        let kind = self.baselines.reconcile(document_id, current_len)?;
        let settings = self.config.tracking();

        let (mut state, rolled) = self.begin();
        let gate = Gate::evaluate(state.tracking_paused, &settings, type_id);
        let mut outcome = EditOutcome::gated(gate);
        if gate.is_open() {
            tracing::debug!(document = %document_id, ?kind, "Reconciled length change");
            record_edit(&mut state, kind, &settings, self.clock.now(), &mut outcome);
        }

        self.settle(&state, outcome.changed_ledger() || rolled);
        Some(outcome)
    }

    /// Move every credit past its grace period into the daily count.
    ///
    /// Returns the number of characters committed.
    pub fn commit_ready(&mut self) -> u64 {
        let settings = self.config.tracking();
        let (mut state, rolled) = self.begin();

        let sweep = ledger::sweep_ready(&state.pending_chars, self.clock.now(), settings.grace_period());
        if sweep.ready == 0 {
            if rolled {
                self.finish(&state);
            }
            return 0;
        }

        state.pending_chars = sweep.remaining;
        let outcome = counter::apply_credit(&mut state, sweep.ready, self.clock.today());
        tracing::info!(
            committed = sweep.ready,
            daily_count = state.daily_count,
            still_pending = state.pending_total(),
            "Committed pending characters"
        );
        self.announce(&outcome, &state);
        self.finish(&state);
        sweep.ready
    }

    // ========================================
    // COMMANDS
    // ========================================

    /// Start (or restart) a challenge. Today's count starts again from zero.
    ///
    /// `goal` must already be validated.
    pub fn start_challenge(&mut self, name: &str, goal: u64) -> StatusView {
        let (mut state, _) = self.begin();
        state.goal = goal;
        state.challenge_name = name.to_string();
        state.daily_count = 0;
        state.pending_chars.clear();

        self.notifier.notify(Notification::ChallengeStarted {
            name: name.to_string(),
            goal,
        });
        self.finish(&state);
        StatusView::from_state(&state)
    }

    pub fn start_preset(&mut self, preset: &ChallengePreset) -> StatusView {
        self.start_challenge(preset.label, preset.target)
    }

    /// Manually add to or subtract from today's count. Returns the new count.
    pub fn correct(&mut self, delta: i64) -> Result<u64> {
        let (mut state, rolled) = self.begin();
        let validated = validate_correction(delta, state.daily_count)
            .and_then(|delta| counter::manual_adjust(&mut state, delta, self.clock.today()));

        let outcome = match validated {
            Ok(outcome) => outcome,
            Err(e) => {
                if rolled {
                    self.finish(&state);
                }
                return Err(e);
            }
        };

        self.notifier.notify(Notification::Corrected {
            delta,
            count: outcome.daily_count,
        });
        self.announce(&outcome, &state);
        self.finish(&state);
        Ok(outcome.daily_count)
    }

    /// Credit 30 minutes of revision work
    pub fn credit_revision(&mut self) -> Result<u64> {
        self.credit_special(REVISION_CREDIT)
    }

    /// Credit one citation
    pub fn credit_citation(&mut self) -> Result<u64> {
        self.credit_special(CITATION_CREDIT)
    }

    fn credit_special(&mut self, amount: u64) -> Result<u64> {
        if self.load().goal != CRUCIBLE_GOAL {
            self.notifier.notify(Notification::Warning(
                "This credit is intended for the \"3K Crucible\" challenge.".to_string(),
            ));
        }
        self.correct(amount as i64)
    }

    /// Pause or resume tracking. Existing counts are untouched.
    pub fn set_paused(&mut self, paused: bool) -> bool {
        let (mut state, rolled) = self.begin();
        if state.tracking_paused == paused {
            if rolled {
                self.finish(&state);
            }
            return paused;
        }

        state.tracking_paused = paused;
        self.notifier.notify(if paused {
            Notification::TrackingPaused
        } else {
            Notification::TrackingResumed
        });
        self.finish(&state);
        paused
    }

    pub fn pause(&mut self) -> bool {
        self.set_paused(true)
    }

    pub fn resume(&mut self) -> bool {
        self.set_paused(false)
    }

    /// Flip the paused flag, returning the new value
    pub fn toggle_pause(&mut self) -> bool {
        let paused = self.load().tracking_paused;
        self.set_paused(!paused)
    }

    /// Discard the whole record
    pub fn reset(&mut self) {
        self.save(None);
        self.baselines.clear();
        self.notifier.notify(Notification::Reset);
        self.push_status(&ChallengeState::new(self.clock.today()));
    }

    // ========================================
    // READS
    // ========================================

    /// Snapshot of the state for today (rolled over if needed)
    pub fn state(&self) -> ChallengeState {
        let (state, rolled) = self.begin();
        if rolled {
            self.save(Some(&state));
        }
        state
    }

    pub fn status(&self) -> StatusView {
        StatusView::from_state(&self.state())
    }

    pub fn chart_data(&self) -> ChartData {
        ChartData::from_state(&self.state())
    }

    /// Push chart data to the display sink
    pub fn show_chart(&self) -> ChartData {
        let chart = self.chart_data();
        self.display.show_chart(&chart);
        chart
    }

    pub fn statistics(&self) -> Statistics {
        let state = self.state();
        Statistics::calculate(&state.history, state.daily_count, self.clock.today())
    }

    /// Markdown statistics report
    pub fn report(&self, project: &str) -> String {
        let state = self.state();
        let stats = Statistics::calculate(&state.history, state.daily_count, self.clock.today());
        render_report(project, &state, &stats)
    }

    // ========================================
    // PERSISTENCE
    // ========================================

    fn load(&self) -> ChallengeState {
        let today = self.clock.today();
        match self.store.load(today) {
            Ok(Some(state)) => state,
            Ok(None) => ChallengeState::new(today),
            Err(e) => {
                tracing::warn!("Failed to load challenge state, using defaults: {}", e);
                ChallengeState::new(today)
            }
        }
    }

    fn save(&self, state: Option<&ChallengeState>) {
        if let Err(e) = self.store.save(state) {
            tracing::warn!("Failed to save challenge state: {}", e);
        }
    }

    /// Load and apply the day rollover. The flag says whether it rolled.
    fn begin(&self) -> (ChallengeState, bool) {
        let mut state = self.load();
        match counter::check_rollover(&mut state, self.clock.today()) {
            Some(rollover) => {
                self.announce_rollover(rollover);
                (state, true)
            }
            None => (state, false),
        }
    }

    fn finish(&self, state: &ChallengeState) {
        self.save(Some(state));
        self.push_status(state);
    }

    /// Save only when something changed, but always refresh the display
    fn settle(&self, state: &ChallengeState, changed: bool) {
        if changed {
            self.save(Some(state));
        }
        self.push_status(state);
    }

    fn push_status(&self, state: &ChallengeState) -> StatusView {
        let view = StatusView::from_state(state);
        self.display.show_status(&view);
        view
    }

    fn announce(&self, outcome: &CreditOutcome, state: &ChallengeState) {
        if let Some(rollover) = outcome.rollover {
            self.announce_rollover(rollover);
        }
        if outcome.goal_reached {
            tracing::info!(goal = state.goal, count = state.daily_count, "Daily goal reached");
            self.notifier.notify(Notification::GoalReached {
                goal: state.goal,
                count: state.daily_count,
            });
        }
    }

    fn announce_rollover(&self, rollover: Rollover) {
        self.notifier.notify(Notification::NewDay {
            archived: rollover.archived,
        });
    }
}

/// Apply one classified edit to the pending ledger
fn record_edit(
    state: &mut ChallengeState,
    kind: EditKind,
    settings: &TrackingSettings,
    now: chrono::DateTime<chrono::Utc>,
    outcome: &mut EditOutcome,
) {
    match kind {
        EditKind::Addition(chars) => {
            outcome.credited += ledger::append(
                &mut state.pending_chars,
                chars,
                settings.max_tracked_chars_per_edit,
                now,
            );
        }
        EditKind::Deletion(chars) => {
            let reversed =
                ledger::reverse(&mut state.pending_chars, chars, now, settings.grace_period());
            outcome.reversed += reversed;
            outcome.unmatched += chars - reversed;
        }
        EditKind::Replacement | EditKind::NoOp => {}
    }
}
