//! Fuzz target for sender and receiver statistics.
//!
//! Counters are snapshotted and reset at arbitrary points; the accumulated
//! snapshots must still account for every accepted value.
//!
//! # Usage
//!
//! ```bash
//! cd crates/spsc-mailbox/tests/fuzz
//! cargo fuzz run fuzz_handle_stats
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use spsc_mailbox::Mailbox;

fuzz_target!(|data: &[u8]| {
    let mut mailbox = Mailbox::<u8>::new();
    let (mut tx, mut rx) = mailbox.split();
    let mut sent_total = 0_u64;
    let mut received_total = 0_u64;

    for &byte in data {
        if byte & 1 == 0 {
            let _accepted = tx.send(byte).is_ok();
        } else {
            let _received = rx.receive().is_ok();
        }

        if byte == u8::MAX {
            let sent = tx.snapshot_and_reset();
            let received = rx.snapshot_and_reset();
            assert!((0.0..=100.0).contains(&sent.rejection_percent()));
            assert!((0.0..=100.0).contains(&received.empty_percent()));
            sent_total += sent.sent;
            received_total += received.received;
        }
    }

    sent_total += tx.stats().sent;
    received_total += rx.stats().received;
    assert_eq!(sent_total, received_total + u64::from(rx.is_full()));
});
