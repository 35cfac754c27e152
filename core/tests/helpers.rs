#![allow(unused)]

use ledger_nem_core::{parse_transaction, ErrorKind, TransactionSummary};

/// Setup logging for tests
pub fn setup() {
    let _ = simplelog::SimpleLogger::init(log::LevelFilter::Debug, Default::default());
}

/// Decode a payload, returning the error kind on failure
pub fn decode_err(buff: &[u8]) -> Option<ErrorKind> {
    let mut summary: TransactionSummary = TransactionSummary::new();

    match parse_transaction(buff, &mut summary) {
        Ok(_) => None,
        Err(e) => {
            // No partial state is exposed on failure
            assert_eq!(summary.item_count(), 0);
            Some(e.kind)
        }
    }
}
