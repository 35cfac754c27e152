// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Fuzzing entry point, shared by the libfuzzer target and the mutation tests

use crate::{parser::Transaction, summary::TransactionSummary};

/// Decode a transaction prefix from arbitrary bytes, then summarize and
/// render every item.
///
/// Returns the number of bytes consumed on a successful decode, rendering
/// failures are discarded.
pub fn fuzz_transaction(data: &[u8]) -> Option<usize> {
    let (tx, n) = Transaction::decode_prefix(data).ok()?;

    let mut summary: TransactionSummary = TransactionSummary::new();
    if summary.load(&tx).is_ok() {
        for i in 0..summary.item_count() {
            let _ = summary.render(i);
        }
    }

    Some(n)
}
