//! Character tracking: pending ledger, daily counter and the session
//!
//! ```text
//! edit event ─► classify ─► gate ─► pending ledger ──(grace period)──┐
//!                                        ▲                            ▼
//!                         undo/delete ───┘              commit ─► daily count
//!                                                                     │
//!                                                       rollover ─► history
//! ```

pub mod counter;
pub mod ledger;
mod policy;
mod reconcile;
mod scheduler;
mod session;

pub use counter::{CreditOutcome, Rollover};
pub use ledger::Sweep;
pub use policy::Gate;
pub use reconcile::Baselines;
pub use scheduler::CommitScheduler;
pub use session::{EditOutcome, SharedSession, TrackerSession};
