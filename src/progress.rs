//! Immutable transfer progress snapshots

use serde::{Deserialize, Serialize};

/// Snapshot of transfer progress at a single point in time.
///
/// Each instance captures how many bytes have been transferred since a
/// tracking registration began, and how many bytes are expected to move in
/// total (transferred plus pending). Instances are immutable and cheap to
/// copy, so they can be handed across threads without synchronization.
///
/// What a consumer may assume across a *sequence* of snapshots depends on the
/// [`ProgressMode`](crate::ProgressMode) the producer was registered with:
/// under `Indefinitely` the transferable total can grow between snapshots, so
/// [`fraction_transferred`](Progress::fraction_transferred) can decrease and
/// [`is_transfer_complete`](Progress::is_transfer_complete) can flip back to
/// `false`; under `CurrentChanges` the total is fixed and completion is
/// terminal. A single snapshot carries no knowledge of the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Progress {
    transferred_bytes: i64,
    transferable_bytes: i64,
}

impl Progress {
    /// Create a snapshot with the given counters.
    ///
    /// The counters are stored verbatim. Construction never fails: negative
    /// values or `transferred_bytes > transferable_bytes` are accepted,
    /// since a producer can legitimately emit transiently inconsistent pairs
    /// while new data is still being discovered.
    pub fn new(transferred_bytes: i64, transferable_bytes: i64) -> Self {
        Self {
            transferred_bytes,
            transferable_bytes,
        }
    }

    /// Number of bytes transferred since the tracking registration was added.
    pub fn transferred_bytes(&self) -> i64 {
        self.transferred_bytes
    }

    /// Total number of transferable bytes (bytes already transferred plus
    /// bytes still pending transfer), as known when the snapshot was taken.
    pub fn transferable_bytes(&self) -> i64 {
        self.transferable_bytes
    }

    /// Fraction of bytes transferred out of all transferable bytes, capped
    /// at `1.0`.
    ///
    /// Returns `0.0` when nothing has moved and `1.0` when everything has.
    /// The raw counters are not clamped, so with zero transferable bytes the
    /// IEEE-754 division result flows through: `0 / 0` yields NaN and
    /// `n / 0` for positive `n` yields infinity, which the cap turns into
    /// `1.0`. There is no lower bound.
    pub fn fraction_transferred(&self) -> f64 {
        let fraction = self.transferred_bytes as f64 / self.transferable_bytes as f64;
        // Comparison instead of f64::min: min(NaN, 1.0) is 1.0, which would
        // hide the 0/0 case from consumers.
        if fraction > 1.0 { 1.0 } else { fraction }
    }

    /// Whether all pending bytes have been transferred.
    ///
    /// Compares the raw counters (`transferred >= transferable`), so an
    /// empty snapshot with both counters at zero reports complete. Under
    /// `Indefinitely` mode this can return `false` again on a later snapshot
    /// after having returned `true`.
    pub fn is_transfer_complete(&self) -> bool {
        self.transferred_bytes >= self.transferable_bytes
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} bytes transferred",
            self.transferred_bytes, self.transferable_bytes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(progress: &Progress) -> u64 {
        let mut hasher = DefaultHasher::new();
        progress.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_accessors_return_stored_counters() {
        let progress = Progress::new(50, 100);
        assert_eq!(progress.transferred_bytes(), 50);
        assert_eq!(progress.transferable_bytes(), 100);
    }

    #[test]
    fn test_fraction_and_completion_scenarios() {
        let cases = [
            (0, 100, 0.0, false),
            (50, 100, 0.5, false),
            (100, 100, 1.0, true),
            (150, 100, 1.0, true),
        ];
        for (transferred, transferable, fraction, complete) in cases {
            let progress = Progress::new(transferred, transferable);
            assert_eq!(
                progress.fraction_transferred(),
                fraction,
                "fraction for {transferred}/{transferable}"
            );
            assert_eq!(
                progress.is_transfer_complete(),
                complete,
                "completion for {transferred}/{transferable}"
            );
        }
    }

    #[test]
    fn test_fraction_is_exact_division_below_cap() {
        let progress = Progress::new(1, 3);
        assert_eq!(progress.fraction_transferred(), 1.0 / 3.0);
        assert!(progress.fraction_transferred() >= 0.0);
        assert!(progress.fraction_transferred() <= 1.0);
    }

    #[test]
    fn test_zero_transferable_with_zero_transferred_is_nan_and_complete() {
        // 0/0 is left as NaN on purpose; the cap only applies to values
        // strictly greater than 1.0.
        let progress = Progress::new(0, 0);
        assert!(progress.fraction_transferred().is_nan());
        assert!(progress.is_transfer_complete());
    }

    #[test]
    fn test_zero_transferable_with_positive_transferred_caps_at_one() {
        let progress = Progress::new(10, 0);
        assert_eq!(progress.fraction_transferred(), 1.0);
        assert!(progress.is_transfer_complete());
    }

    #[test]
    fn test_negative_counters_stored_verbatim() {
        let progress = Progress::new(-5, 10);
        assert_eq!(progress.transferred_bytes(), -5);
        assert_eq!(progress.fraction_transferred(), -0.5);
        assert!(!progress.is_transfer_complete());
    }

    #[test]
    fn test_equality_is_exact_on_both_counters() {
        assert_eq!(Progress::new(5, 10), Progress::new(5, 10));
        assert_ne!(Progress::new(5, 10), Progress::new(5, 11));
        assert_ne!(Progress::new(5, 10), Progress::new(6, 10));
    }

    #[test]
    fn test_equal_snapshots_hash_alike() {
        assert_eq!(
            hash_of(&Progress::new(5, 10)),
            hash_of(&Progress::new(5, 10))
        );
    }

    #[test]
    fn test_display_names_both_counters() {
        let rendered = Progress::new(50, 100).to_string();
        assert!(rendered.contains("50"));
        assert!(rendered.contains("100"));
    }

    #[test]
    fn test_serialization_preserves_counters() {
        let progress = Progress::new(50, 100);
        let json = serde_json::to_string(&progress).unwrap();
        let restored: Progress = serde_json::from_str(&json).unwrap();
        assert_eq!(progress, restored);
    }
}
