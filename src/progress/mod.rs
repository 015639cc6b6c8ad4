//! Progress reporting primitives.
//!
//! Builders and the mutation engine emit [`ProgressEvent`]s through a
//! [`Reporter`] they are handed at construction; nothing writes to the
//! console on its own.

pub mod event;
pub mod reporter;

pub use event::{FileOutcome, ProgressEvent};
pub use reporter::{ConsoleReporter, MemoryReporter, NullReporter, Reporter, TracingReporter};
