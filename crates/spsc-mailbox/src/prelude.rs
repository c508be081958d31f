//! Prelude for spsc-mailbox.
//!
//! This module re-exports the most commonly used types for convenient importing.
//!
//! # Example
//!
//! ```rust
//! use spsc_mailbox::prelude::*;
//!
//! let mut mailbox = Mailbox::new();
//! let (mut tx, mut rx) = mailbox.split();
//!
//! assert_eq!(tx.send(3_u8), Ok(()));
//! assert_eq!(rx.receive(), Ok(3));
//! assert_eq!(rx.receive(), Err(MailboxError::Empty));
//! ```

pub use crate::error::{MailboxError, MailboxResult};
pub use crate::handle::{Receiver, Sender};
pub use crate::mailbox::Mailbox;
pub use crate::stats::{ReceiverStats, SenderStats};
