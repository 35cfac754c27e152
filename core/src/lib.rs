// Copyright (c) 2022-2023 The MobileCoin Foundation

//! NEM hardware wallet core
//!
//! This provides a `no_std` transaction [parser] and [summary] model for
//! reviewing NEM (NIS1) transactions on hardware wallets prior to signing.
//!
//! Transactions are decoded from untrusted little-endian payloads without
//! allocation, all variable length fields borrow from the input buffer and
//! every read is bounds checked (see [parser::Cursor]).
//!
//! ## Operations
//!
//! 1. Decode the transaction and populate a [TransactionSummary] with
//!    [parse_transaction]
//! 2. Render each of [TransactionSummary::item_count] items via
//!    [TransactionSummary::render] for user approval
//! 3. On approval, sign the payload (handled by the caller)
//!
//! ```
//! use ledger_nem_core::{parse_transaction, TransactionSummary};
//!
//! # fn f(buff: &[u8]) -> Result<(), ledger_nem_core::Error> {
//! let mut summary: TransactionSummary = TransactionSummary::new();
//! let _tx = parse_transaction(buff, &mut summary)?;
//!
//! for i in 0..summary.item_count() {
//!     let _r = summary.render(i)?;
//!     // display _r.title / _r.text
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(test, not(feature = "std")))]
extern crate std;

pub mod consts;

pub mod error;
pub use error::{Error, ErrorKind};

pub mod parser;
pub use parser::{Transaction, TransactionBody, TransactionHeader, TransactionType};

pub mod summary;
pub use summary::{parse_transaction, Rendered, TransactionSummary};

pub mod helpers;

pub mod fuzz;
