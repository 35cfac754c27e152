// Copyright (c) 2022-2023 The MobileCoin Foundation

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Some(n) = ledger_nem_core::fuzz::fuzz_transaction(data) {
        assert!(n <= data.len());
    }
});
