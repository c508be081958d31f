//! Single-slot SPSC mailbox.
//!
//! A [`Mailbox`] stores at most one pending value inline, next to an atomic
//! occupancy flag. The flag is the only synchronization:
//!
//! ```text
//!            send (Ok)
//!   EMPTY ---------------> FULL
//!     ^                      |
//!     +----------------------+
//!           receive (Ok)
//!
//!   send on FULL    -> Err(Full),  no state change
//!   receive on EMPTY -> Err(Empty), no state change
//! ```
//!
//! # Memory ordering
//!
//! The producer writes the slot and then publishes FULL with `Release`. The
//! consumer observes FULL with `Acquire` before reading the slot, so the value
//! write happens-before the value read. Symmetrically the consumer publishes
//! EMPTY with `Release` after moving the value out, and the producer observes
//! EMPTY with `Acquire` before overwriting. Downgrading either side to
//! `Relaxed` is a data race on the slot.
//!
//! The check-then-act sequence (observe, touch slot, publish) is not atomic.
//! It is sound only with exactly one producer and one consumer, which is why
//! every mutating path requires `&mut Mailbox` or a unique
//! [`Sender`]/[`Receiver`] handle.

use core::fmt;
use core::mem::MaybeUninit;

use crate::error::{MailboxError, MailboxResult};
use crate::handle::{Receiver, Sender};
use crate::sync::{AtomicBool, Ordering, UnsafeCell};

const EMPTY: bool = false;
const FULL: bool = true;

/// Wait-free, allocation-free hand-off point for one writer and one reader.
///
/// # Example
///
/// ```rust
/// use spsc_mailbox::{Mailbox, MailboxError};
///
/// let mut mailbox = Mailbox::new();
/// assert!(mailbox.is_empty());
///
/// assert_eq!(mailbox.send(42), Ok(()));
/// assert!(mailbox.is_full());
///
/// // Full: the pending value is kept, the new one is discarded
/// assert_eq!(mailbox.send(7), Err(MailboxError::Full));
///
/// assert_eq!(mailbox.receive(), Ok(42));
/// assert_eq!(mailbox.receive(), Err(MailboxError::Empty));
/// ```
///
/// Across threads, hand the two ends out with [`split`](Mailbox::split) (or
/// [`claim`](Mailbox::claim) for a `static` mailbox):
///
/// ```rust
/// use spsc_mailbox::Mailbox;
///
/// let mut mailbox = Mailbox::<u64>::new();
/// let (mut tx, mut rx) = mailbox.split();
///
/// std::thread::scope(|s| {
///     s.spawn(move || {
///         while tx.send(1).is_err() {
///             std::thread::yield_now();
///         }
///     });
///     s.spawn(move || loop {
///         if let Ok(value) = rx.receive() {
///             assert_eq!(value, 1);
///             break;
///         }
///         std::thread::yield_now();
///     });
/// });
/// ```
pub struct Mailbox<T> {
    /// EMPTY or FULL. The slot holds an initialized value iff FULL.
    occupancy: AtomicBool,
    /// Set once the endpoints have been handed out through `claim`.
    claimed: AtomicBool,
    slot: UnsafeCell<MaybeUninit<T>>,
}

// SAFETY: the slot is only touched by the single producer (while EMPTY) and
// the single consumer (while FULL), ordered by the acquire/release pair on
// `occupancy`. Values cross threads, so `T: Send` is required; `T: Sync` is
// not, since no `&T` is ever shared.
unsafe impl<T: Send> Sync for Mailbox<T> {}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Mailbox<T> {
    /// Create an empty mailbox.
    ///
    /// The slot lives inline, so a mailbox can be placed on the stack, inside
    /// another struct, or in a `static`.
    #[cfg(not(feature = "loom"))]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            occupancy: AtomicBool::new(EMPTY),
            claimed: AtomicBool::new(false),
            slot: UnsafeCell::new(MaybeUninit::uninit()),
        }
    }

    /// Create an empty mailbox.
    #[cfg(feature = "loom")]
    #[must_use]
    pub fn new() -> Self {
        Self {
            occupancy: AtomicBool::new(EMPTY),
            claimed: AtomicBool::new(false),
            slot: UnsafeCell::new(MaybeUninit::uninit()),
        }
    }

    /// Returns `true` if no value is pending.
    ///
    /// Side-effect free and callable from any thread. The answer is a snapshot
    /// and may be stale as soon as it returns.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.is_full()
    }

    /// Returns `true` if a value is pending. Always the negation of
    /// [`is_empty`](Self::is_empty).
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupancy.load(Ordering::Acquire) == FULL
    }

    /// Store `item` if the mailbox is empty.
    ///
    /// # Errors
    ///
    /// Returns [`MailboxError::Full`] if a value is already pending. The
    /// pending value is left untouched and `item` is dropped.
    #[inline]
    pub fn send(&mut self, item: T) -> MailboxResult {
        // SAFETY: `&mut self` excludes every other producer and consumer.
        unsafe { self.publish(item) }
    }

    /// Take the pending value if there is one.
    ///
    /// # Errors
    ///
    /// Returns [`MailboxError::Empty`] if no value is pending. The mailbox
    /// stays empty.
    #[inline]
    pub fn receive(&mut self) -> MailboxResult<T> {
        // SAFETY: `&mut self` excludes every other producer and consumer.
        unsafe { self.consume() }
    }

    /// Split into the producer and consumer endpoints.
    ///
    /// The handles borrow the mailbox, so they can be moved into scoped
    /// threads and no third party can touch the slot while they live.
    #[must_use]
    pub fn split(&mut self) -> (Sender<'_, T>, Receiver<'_, T>) {
        tracing::debug!(
            target: "spsc_mailbox",
            full = self.is_full(),
            "mailbox split into sender and receiver"
        );
        let this: &Self = self;
        (Sender::new(this), Receiver::new(this))
    }

    /// Hand out the producer and consumer endpoints of a shared mailbox.
    ///
    /// Intended for mailboxes in a `static`, where no `&mut` is available.
    /// Only the first call succeeds; every later call returns `None`, even
    /// after the first pair has been dropped.
    ///
    /// ```rust
    /// use spsc_mailbox::Mailbox;
    ///
    /// static MAILBOX: Mailbox<u32> = Mailbox::new();
    ///
    /// let (mut tx, mut rx) = MAILBOX.claim().unwrap();
    /// assert!(MAILBOX.claim().is_none());
    ///
    /// tx.send(5).unwrap();
    /// assert_eq!(rx.receive(), Ok(5));
    /// ```
    #[must_use]
    pub fn claim(&self) -> Option<(Sender<'_, T>, Receiver<'_, T>)> {
        if self.claimed.swap(true, Ordering::AcqRel) {
            tracing::debug!(target: "spsc_mailbox", "mailbox endpoints already claimed");
            return None;
        }
        tracing::debug!(
            target: "spsc_mailbox",
            full = self.is_full(),
            "mailbox endpoints claimed"
        );
        Some((Sender::new(self), Receiver::new(self)))
    }

    /// Returns `true` if [`claim`](Self::claim) has already handed out the
    /// endpoints.
    #[inline]
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.claimed.load(Ordering::Acquire)
    }

    /// Consume the mailbox, returning the pending value if there is one.
    #[must_use]
    pub fn into_inner(mut self) -> Option<T> {
        self.receive().ok()
    }

    /// Producer half of the hand-off.
    ///
    /// # Safety
    ///
    /// The caller must be the only thread that calls `publish` on this
    /// mailbox for the duration of the call.
    pub(crate) unsafe fn publish(&self, item: T) -> MailboxResult {
        // Acquire pairs with the consumer's Release of EMPTY: its read of the
        // previous value is complete before we overwrite the slot.
        if self.occupancy.load(Ordering::Acquire) == FULL {
            return Err(MailboxError::Full);
        }

        self.slot.with_mut(|slot| {
            // SAFETY: the slot is EMPTY and we are the only producer, so the
            // consumer will not read it until we publish FULL below.
            unsafe { slot.cast::<T>().write(item) };
        });

        // Release: the slot write above is visible to whoever observes FULL.
        self.occupancy.store(FULL, Ordering::Release);
        Ok(())
    }

    /// Consumer half of the hand-off.
    ///
    /// # Safety
    ///
    /// The caller must be the only thread that calls `consume` on this
    /// mailbox for the duration of the call.
    pub(crate) unsafe fn consume(&self) -> MailboxResult<T> {
        // Acquire pairs with the producer's Release of FULL: the slot write is
        // complete and visible.
        if self.occupancy.load(Ordering::Acquire) == EMPTY {
            return Err(MailboxError::Empty);
        }

        let item = self.slot.with(|slot| {
            // SAFETY: FULL means the slot was initialized by the producer, and
            // we are the only consumer. The producer will not write again
            // until we publish EMPTY, so this bitwise move-out is unique.
            unsafe { slot.cast::<T>().read() }
        });

        // Release: our read above completes before the producer may reuse
        // the slot.
        self.occupancy.store(EMPTY, Ordering::Release);
        Ok(item)
    }
}

impl<T> Drop for Mailbox<T> {
    fn drop(&mut self) {
        if self.occupancy.load(Ordering::Acquire) == FULL {
            self.slot.with_mut(|slot| {
                // SAFETY: FULL means the slot holds an initialized value that
                // nobody has moved out, and `&mut self` makes this the last
                // access.
                unsafe { slot.cast::<T>().drop_in_place() };
            });
        }
    }
}

impl<T> fmt::Debug for Mailbox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mailbox")
            .field("full", &self.is_full())
            .field("claimed", &self.is_claimed())
            .finish_non_exhaustive()
    }
}
