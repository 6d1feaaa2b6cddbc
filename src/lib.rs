//! Writer's Crucible - daily writing goals for editors
//!
//! Counts the characters a user adds to tracked documents and accumulates a
//! daily total against a goal, with day-by-day history and statistics.
//!
//! ## Grace period
//!
//! Newly typed characters are credited to a pending ledger first. For the
//! configured grace period an undo or delete can still take them back; after
//! that a periodic sweep commits them to the daily count for good.
//!
//! ## Embedding
//!
//! The host editor builds a [`tracker::TrackerSession`] from a state store,
//! a clock and a config source, feeds it edit events, and runs a
//! [`tracker::CommitScheduler`] for the sweeps.

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod notify;
pub mod stats;
pub mod store;
pub mod tracker;

pub use domain::*;
pub use error::{CrucibleError, Result};
