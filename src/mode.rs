//! Producer contract for sequences of progress snapshots

use serde::{Deserialize, Serialize};

/// How a progress producer was registered, which determines what a consumer
/// may assume across the sequence of [`Progress`](crate::Progress) snapshots
/// it receives.
///
/// The snapshot type itself is mode-agnostic; producers pass the mode along
/// so consumers can tell whether completion is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgressMode {
    /// The registration stays active indefinitely. The transferable total
    /// can grow while tracking is active, so the reported fraction can both
    /// increase and decrease, and a snapshot reporting the transfer complete
    /// can be followed by one reporting it incomplete again.
    Indefinitely,

    /// The registration tracks only the changes pending when it was added.
    /// The transferable total is fixed for that batch, the fraction is
    /// monotonically non-decreasing, and once a snapshot reports the
    /// transfer complete no further snapshots are emitted.
    CurrentChanges,
}

impl std::fmt::Display for ProgressMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgressMode::Indefinitely => write!(f, "indefinitely"),
            ProgressMode::CurrentChanges => write!(f, "current changes"),
        }
    }
}
