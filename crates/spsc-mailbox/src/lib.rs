//! # spsc-mailbox
//!
//! Single-slot, non-blocking hand-off between exactly one writer thread and one
//! reader thread.
//!
//! A [`Mailbox`] holds at most one pending value. Writing into a full mailbox
//! is rejected and leaves the pending value intact; reading from an empty one
//! reports that no valid data exists. Neither side ever waits for the other.
//!
//! ## Safety Guarantees
//!
//! - **No heap allocations** - the slot is stored inline in the mailbox
//! - **No blocking operations** - `send` and `receive` are wait-free, O(1)
//! - **No locks** - one atomic flag with acquire/release ordering
//! - **Single producer, single consumer** - enforced by the type system
//!
//! ## Architecture
//!
//! - [`mailbox`] - The [`Mailbox`] slot, its occupancy flag and the hand-off
//! - [`handle`] - [`Sender`] / [`Receiver`] endpoints for cross-thread use
//! - [`error`] - [`MailboxError`] (`Full`, `Empty`)
//! - [`stats`] - Per-endpoint delivery counters
//!
//! ## Usage
//!
//! ```rust
//! use spsc_mailbox::{Mailbox, MailboxError};
//!
//! let mut mailbox = Mailbox::<u32>::new();
//! let (mut tx, mut rx) = mailbox.split();
//!
//! std::thread::scope(|s| {
//!     s.spawn(move || {
//!         for i in 0..100 {
//!             // A full mailbox drops the new value; the old one is kept
//!             let _accepted = tx.send(i).is_ok();
//!         }
//!     });
//!     s.spawn(move || {
//!         let mut last = None;
//!         for _ in 0..100 {
//!             match rx.receive() {
//!                 Ok(value) => {
//!                     assert!(last < Some(value));
//!                     last = Some(value);
//!                 }
//!                 Err(MailboxError::Empty) => std::thread::yield_now(),
//!                 Err(MailboxError::Full) => unreachable!(),
//!             }
//!         }
//!     });
//! });
//! ```
//!
//! ## Logging
//!
//! Rejected sends and empty receives emit `trace` events, and handing out the
//! endpoints emits `debug` events, all under the `spsc_mailbox` target via
//! [`tracing`](https://docs.rs/tracing). Successful transfers are silent.

#![no_std]
#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod error;
pub mod handle;
pub mod mailbox;
pub mod stats;

mod sync;


pub mod prelude;

pub use error::{MailboxError, MailboxResult};
pub use handle::{Receiver, Sender};
pub use mailbox::Mailbox;
pub use stats::{ReceiverStats, SenderStats};
