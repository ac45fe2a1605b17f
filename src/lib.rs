//! Transfer progress types for synchronization clients.
//!
//! The central type is [`Progress`], an immutable snapshot of how many bytes
//! a tracked transfer has moved out of how many it is expected to move.
//! Snapshots are produced by an external notification subsystem and handed to
//! consumers by value; this crate only defines the value type itself, its
//! producer contract ([`ProgressMode`]), and rendering/logging helpers.

pub mod format;
pub mod mode;
pub mod progress;
pub mod report;

pub use mode::ProgressMode;
pub use progress::Progress;
