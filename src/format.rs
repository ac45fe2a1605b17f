//! Human-readable rendering of progress snapshots

use crate::progress::Progress;

/// Format bytes as human readable string
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Format a transfer fraction as a percentage string.
///
/// A NaN fraction (empty snapshot, nothing transferable) renders as `"--"`.
pub fn format_fraction(fraction: f64) -> String {
    if fraction.is_nan() {
        "--".to_string()
    } else {
        format!("{:.1}%", fraction * 100.0)
    }
}

/// One-line summary of a snapshot, suitable for log or terminal output.
///
/// Negative byte counts render as zero; the raw values stay available
/// through the snapshot's accessors.
pub fn format_progress(progress: &Progress) -> String {
    format!(
        "{} of {} ({})",
        format_bytes(progress.transferred_bytes().max(0) as u64),
        format_bytes(progress.transferable_bytes().max(0) as u64),
        format_fraction(progress.fraction_transferred())
    )
}
