//! Producer and consumer endpoints.
//!
//! A [`Sender`] and a [`Receiver`] are obtained together from
//! [`Mailbox::split`] or [`Mailbox::claim`]. Neither is `Clone`, and both
//! operations take `&mut self`, so at most one thread can send and one thread
//! can receive at any time.
//!
//! # RT Safety
//!
//! `send` and `receive` are RT-safe:
//! - One acquire load and at most one release store on the occupancy flag
//! - One in-place move of `T`
//! - No allocation, no blocking, no retry loop

use core::fmt;

use crate::error::{MailboxError, MailboxResult};
use crate::mailbox::Mailbox;
use crate::stats::{ReceiverStats, SenderStats};

/// The writing end of a [`Mailbox`].
pub struct Sender<'a, T> {
    mailbox: &'a Mailbox<T>,
    stats: SenderStats,
}

impl<'a, T> Sender<'a, T> {
    pub(crate) fn new(mailbox: &'a Mailbox<T>) -> Self {
        Self {
            mailbox,
            stats: SenderStats::default(),
        }
    }

    /// Store `item` if the mailbox is empty.
    ///
    /// # RT Safety
    ///
    /// RT-safe. Returns immediately whatever the mailbox state.
    ///
    /// # Errors
    ///
    /// Returns [`MailboxError::Full`] if the receiver has not yet taken the
    /// previous value. That value is kept and `item` is dropped.
    #[inline]
    pub fn send(&mut self, item: T) -> MailboxResult {
        // SAFETY: this handle is the only producer: it is not `Clone`, it was
        // handed out once by `split`/`claim`, and `&mut self` serializes its
        // own calls.
        let result = unsafe { self.mailbox.publish(item) };
        self.stats.record(result.is_ok());
        if let Err(MailboxError::Full) = result {
            tracing::trace!(
                target: "spsc_mailbox",
                rejected = self.stats.rejected,
                "send rejected: mailbox full"
            );
        }
        result
    }

    /// Returns `true` if no value is pending.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mailbox.is_empty()
    }

    /// Returns `true` if a value is pending.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.mailbox.is_full()
    }

    /// Delivery counters for this sender.
    #[inline]
    #[must_use]
    pub fn stats(&self) -> SenderStats {
        self.stats
    }

    /// Return the delivery counters and reset them to zero.
    pub fn snapshot_and_reset(&mut self) -> SenderStats {
        core::mem::take(&mut self.stats)
    }
}

impl<T> fmt::Debug for Sender<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sender")
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

/// The reading end of a [`Mailbox`].
pub struct Receiver<'a, T> {
    mailbox: &'a Mailbox<T>,
    stats: ReceiverStats,
}

impl<'a, T> Receiver<'a, T> {
    pub(crate) fn new(mailbox: &'a Mailbox<T>) -> Self {
        Self {
            mailbox,
            stats: ReceiverStats::default(),
        }
    }

    /// Take the pending value if there is one.
    ///
    /// # RT Safety
    ///
    /// RT-safe. Returns immediately whatever the mailbox state.
    ///
    /// # Errors
    ///
    /// Returns [`MailboxError::Empty`] if no value is pending. Nothing is
    /// produced and the mailbox stays empty.
    #[inline]
    pub fn receive(&mut self) -> MailboxResult<T> {
        // SAFETY: this handle is the only consumer: it is not `Clone`, it was
        // handed out once by `split`/`claim`, and `&mut self` serializes its
        // own calls.
        let result = unsafe { self.mailbox.consume() };
        self.stats.record(result.is_ok());
        if let Err(MailboxError::Empty) = result {
            tracing::trace!(
                target: "spsc_mailbox",
                empty = self.stats.empty,
                "receive found no data: mailbox empty"
            );
        }
        result
    }

    /// Returns `true` if no value is pending.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mailbox.is_empty()
    }

    /// Returns `true` if a value is pending.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.mailbox.is_full()
    }

    /// Delivery counters for this receiver.
    #[inline]
    #[must_use]
    pub fn stats(&self) -> ReceiverStats {
        self.stats
    }

    /// Return the delivery counters and reset them to zero.
    pub fn snapshot_and_reset(&mut self) -> ReceiverStats {
        core::mem::take(&mut self.stats)
    }
}

impl<T> fmt::Debug for Receiver<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Receiver")
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
