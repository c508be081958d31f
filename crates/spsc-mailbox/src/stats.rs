//! Per-endpoint delivery statistics.
//!
//! Each [`Sender`](crate::Sender) and [`Receiver`](crate::Receiver) keeps its
//! own counters. Handles are unique, so the counters are plain integers owned
//! by the handle rather than shared atomics:
//! - No cache-line traffic between producer and consumer
//! - One saturating add per operation
//! - Read with `stats()`, or `snapshot_and_reset()` from a periodic reporter

/// Producer-side counters returned by [`Sender::stats`](crate::Sender::stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SenderStats {
    /// Values accepted into the mailbox
    pub sent: u64,
    /// Values discarded because the mailbox was full
    pub rejected: u64,
}

impl SenderStats {
    /// Total number of `send` attempts.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.sent.saturating_add(self.rejected)
    }

    /// Percentage of `send` attempts rejected because the mailbox was full.
    ///
    /// Returns 0.0 if nothing has been sent yet.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "ratio of counters, precision loss is irrelevant")]
    pub fn rejection_percent(&self) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.rejected as f32 / total as f32) * 100.0
    }

    #[inline]
    pub(crate) fn record(&mut self, accepted: bool) {
        if accepted {
            self.sent = self.sent.saturating_add(1);
        } else {
            self.rejected = self.rejected.saturating_add(1);
        }
    }
}

/// Consumer-side counters returned by [`Receiver::stats`](crate::Receiver::stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReceiverStats {
    /// Values taken out of the mailbox
    pub received: u64,
    /// `receive` calls that found the mailbox empty
    pub empty: u64,
}

impl ReceiverStats {
    /// Total number of `receive` attempts.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.received.saturating_add(self.empty)
    }

    /// Percentage of `receive` attempts that found no data.
    ///
    /// Returns 0.0 if nothing has been polled yet.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "ratio of counters, precision loss is irrelevant")]
    pub fn empty_percent(&self) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.empty as f32 / total as f32) * 100.0
    }

    #[inline]
    pub(crate) fn record(&mut self, delivered: bool) {
        if delivered {
            self.received = self.received.saturating_add(1);
        } else {
            self.empty = self.empty.saturating_add(1);
        }
    }
}
