//! Logging of progress snapshots

use log::{debug, info};

use crate::format::format_progress;
use crate::progress::Progress;

/// Log a snapshot for the transfer identified by `label`.
///
/// Regular snapshots go to debug so steady progress does not flood the log;
/// a snapshot reporting completion is logged at info.
pub fn log_progress(label: &str, progress: &Progress) {
    if progress.is_transfer_complete() {
        info!("{label}: transfer complete, {}", format_progress(progress));
    } else {
        debug!("{label}: {}", format_progress(progress));
    }
}
