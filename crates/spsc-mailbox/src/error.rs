//! Mailbox error types.
//!
//! Both variants describe expected steady-state conditions of an asynchronous
//! hand-off, not failures:
//! - `Copy`, fixed `#[repr(u8)]` representation
//! - No heap allocation on construction or formatting
//! - The mailbox state is never affected by returning one

/// Reason a mailbox operation did not transfer a value.
///
/// # Examples
///
/// ```
/// use spsc_mailbox::{Mailbox, MailboxError};
///
/// let mut mailbox = Mailbox::<u32>::new();
///
/// assert_eq!(mailbox.receive(), Err(MailboxError::Empty));
///
/// assert_eq!(mailbox.send(1), Ok(()));
/// assert_eq!(mailbox.send(2), Err(MailboxError::Full));
///
/// // Codes are stable for compact logging
/// assert_eq!(MailboxError::Full.code(), 1);
/// assert!(MailboxError::Empty.is_recoverable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[repr(u8)]
pub enum MailboxError {
    /// `send` found the slot occupied. The pending value is intact and the
    /// offered value was discarded.
    #[error("mailbox is full")]
    Full = 1,
    /// `receive` found the slot empty. No value was produced.
    #[error("mailbox is empty")]
    Empty = 2,
}

impl MailboxError {
    /// Get the numeric error code.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Create an error from a code.
    ///
    /// Returns `None` if the code does not correspond to a known error.
    ///
    /// ```
    /// use spsc_mailbox::MailboxError;
    ///
    /// assert_eq!(MailboxError::from_code(2), Some(MailboxError::Empty));
    /// assert_eq!(MailboxError::from_code(0), None);
    /// ```
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(MailboxError::Full),
            2 => Some(MailboxError::Empty),
            _ => None,
        }
    }

    /// Check if the caller can simply retry later.
    ///
    /// Always true: a full mailbox drains and an empty one fills as the peer
    /// makes progress.
    #[inline]
    #[must_use]
    pub const fn is_recoverable(self) -> bool {
        match self {
            MailboxError::Full | MailboxError::Empty => true,
        }
    }
}

/// A specialized `Result` type for mailbox operations.
pub type MailboxResult<T = ()> = core::result::Result<T, MailboxError>;
