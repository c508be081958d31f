//! Fuzz targets for spsc-mailbox.
//!
//! Each input byte decodes to one operation which is applied to a mailbox and
//! to an `Option` that models the single slot.
//!
//! # Usage
//!
//! ```bash
//! cd crates/spsc-mailbox/tests/fuzz
//! cargo fuzz run fuzz_op_sequence
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use spsc_mailbox::{Mailbox, MailboxError};

fuzz_target!(|data: &[u8]| {
    let mut mailbox = Mailbox::<Vec<u8>>::new();
    let mut model: Option<Vec<u8>> = None;

    for &byte in data {
        match byte % 3 {
            0 => {
                let value = vec![byte; usize::from(byte >> 2)];
                let expected = if model.is_none() {
                    model = Some(value.clone());
                    Ok(())
                } else {
                    Err(MailboxError::Full)
                };
                assert_eq!(mailbox.send(value), expected);
            }
            1 => {
                let expected = model.take().ok_or(MailboxError::Empty);
                assert_eq!(mailbox.receive(), expected);
            }
            _ => {
                assert_eq!(mailbox.is_full(), model.is_some());
                assert_eq!(mailbox.is_empty(), model.is_none());
            }
        }
    }

    assert_eq!(mailbox.into_inner(), model);
});
