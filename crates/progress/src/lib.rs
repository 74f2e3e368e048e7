#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Structured progress reporting for pkgbridge backends
//!
//! Long-running operations are described by a strict three-level hierarchy:
//! an [`Action`] (e.g. "Install") contains [`Task`]s (phases), which contain
//! [`Step`]s. [`Message`]s may be emitted at any point and carry the
//! identifiers of whatever levels are open at emission time.
//!
//! Callers observe progress by implementing [`ProgressReporter`]; backends
//! drive a [`ProgressHelper`] which generates correlated identifiers, stamps
//! timestamps, and routes events to the active reporter. When no reporter is
//! configured the helper is inert and every call is a safe no-op.
//!
//! The library retains no event history. Persistence, rendering, and
//! aggregation are reporter concerns.

mod helper;
mod model;
mod reporters;

pub use helper::ProgressHelper;
pub use model::{Action, Message, ProgressReporter, Severity, SharedReporter, Step, Task};
pub use reporters::{MutexReporter, NoopReporter, TracingReporter};
