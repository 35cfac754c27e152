// Copyright (c) 2022-2023 The MobileCoin Foundation

//! NEM transaction decoding.
//!
//! [Transaction::decode] reads a [TransactionHeader], checks the declared
//! [TransactionType] against the allow-list and dispatches to the matching
//! body decoder. Decoded transactions borrow all variable length fields from
//! the input buffer, capacities are fixed at compile time (see [crate::consts]).
//!
//! ```
//! # use ledger_nem_core::parser::{Transaction, TransactionBody};
//! # fn f(buff: &[u8]) -> Result<(), ledger_nem_core::Error> {
//! let tx = Transaction::decode(buff)?;
//!
//! if let TransactionBody::Transfer(_t) = &tx.body {
//!     // ...
//! }
//! # Ok(())
//! # }
//! ```

mod cursor;
pub use cursor::Cursor;

mod types;
pub use types::*;

mod header;
pub use header::TransactionHeader;

mod transfer;
pub use transfer::Transfer;

mod importance;
pub use importance::{ImportanceMode, ImportanceTransfer};

mod aggregate;
pub use aggregate::{AggregateModification, CosignatoryModification, ModificationAction};

mod signature;
pub use signature::MultisigSignature;

mod multisig;
pub use multisig::{InnerBody, InnerTransaction};

mod namespace;
pub use namespace::ProvisionNamespace;

mod mosaic;
pub use mosaic::{AssetDefinition, MosaicDefinitionCreation, MosaicSupplyChange, SupplyType};

use crate::error::Error;

/// Decoded top-level transaction
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Transaction<'a> {
    pub header: TransactionHeader<'a>,
    pub body: TransactionBody<'a>,
}

/// Transaction body, one variant per allowed [TransactionType]
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TransactionBody<'a> {
    Transfer(Transfer<'a>),
    ImportanceTransfer(ImportanceTransfer<'a>),
    AggregateModification(AggregateModification<'a>),
    MultisigSignature(MultisigSignature<'a>),
    Multisig(InnerTransaction<'a>),
    ProvisionNamespace(ProvisionNamespace<'a>),
    MosaicDefinitionCreation(MosaicDefinitionCreation<'a>),
    MosaicSupplyChange(MosaicSupplyChange<'a>),
}

impl<'a> Transaction<'a> {
    /// Decode a complete transaction, rejecting trailing bytes
    pub fn decode(buff: &'a [u8]) -> Result<Self, Error> {
        let mut c = Cursor::new(buff);

        let tx = Self::decode_cursor(&mut c)?;
        c.finish()?;

        Ok(tx)
    }

    /// Decode a transaction from the start of the buffer, returning the
    /// transaction and the number of bytes consumed
    pub fn decode_prefix(buff: &'a [u8]) -> Result<(Self, usize), Error> {
        let mut c = Cursor::new(buff);

        let tx = Self::decode_cursor(&mut c)?;

        Ok((tx, c.consumed()))
    }

    /// Decode a header and dispatch to the matching body decoder
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn decode_cursor(c: &mut Cursor<'a>) -> Result<Self, Error> {
        let header = TransactionHeader::decode(c)?;

        #[cfg(feature = "log")]
        log::debug!(
            "decode {:?} ({:?}, {:?}) at offset {}",
            header.kind,
            header.version,
            header.network,
            c.offset()
        );

        let body = match header.kind {
            TransactionType::Transfer => {
                TransactionBody::Transfer(Transfer::decode(c, header.version)?)
            }
            TransactionType::ImportanceTransfer => {
                TransactionBody::ImportanceTransfer(ImportanceTransfer::decode(c)?)
            }
            TransactionType::MultisigAggregateModification => {
                TransactionBody::AggregateModification(AggregateModification::decode(
                    c,
                    header.version,
                )?)
            }
            TransactionType::MultisigSignature => {
                TransactionBody::MultisigSignature(MultisigSignature::decode(c)?)
            }
            TransactionType::Multisig => {
                TransactionBody::Multisig(InnerTransaction::decode_delimited(c)?)
            }
            TransactionType::ProvisionNamespace => {
                TransactionBody::ProvisionNamespace(ProvisionNamespace::decode(c)?)
            }
            TransactionType::MosaicDefinitionCreation => {
                TransactionBody::MosaicDefinitionCreation(MosaicDefinitionCreation::decode(c)?)
            }
            TransactionType::MosaicSupplyChange => {
                TransactionBody::MosaicSupplyChange(MosaicSupplyChange::decode(c)?)
            }
        };

        Ok(Self { header, body })
    }
}

impl<'a> From<InnerBody<'a>> for TransactionBody<'a> {
    fn from(b: InnerBody<'a>) -> Self {
        match b {
            InnerBody::Transfer(t) => TransactionBody::Transfer(t),
            InnerBody::ImportanceTransfer(t) => TransactionBody::ImportanceTransfer(t),
            InnerBody::AggregateModification(t) => TransactionBody::AggregateModification(t),
            InnerBody::ProvisionNamespace(t) => TransactionBody::ProvisionNamespace(t),
            InnerBody::MosaicDefinitionCreation(t) => TransactionBody::MosaicDefinitionCreation(t),
            InnerBody::MosaicSupplyChange(t) => TransactionBody::MosaicSupplyChange(t),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorKind;

    fn header(kind: u32, version: u32) -> [u8; 56] {
        let mut d = [0u8; 56];
        d[0..4].copy_from_slice(&kind.to_le_bytes());
        d[4..8].copy_from_slice(&(version | 0x9800_0000).to_le_bytes());
        d[12] = 32;
        d[16..48].fill(0x5a);
        d[48..56].copy_from_slice(&1_000_000u64.to_le_bytes());
        d
    }

    #[test]
    fn unknown_type() {
        let mut d = [0u8; 60];
        d[..56].copy_from_slice(&header(0x0102, 1));

        let e = Transaction::decode(&d).unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidEnum);
        assert_eq!(e.offset, 0);
    }

    #[test]
    fn importance_trailing_bytes() {
        let mut d = [0u8; 60 + 40 + 1];
        d[..56].copy_from_slice(&header(0x0801, 1));
        d[60] = 1;
        d[64] = 32;

        let (_tx, n) = Transaction::decode_prefix(&d).unwrap();
        assert_eq!(n, d.len() - 1);

        let e = Transaction::decode(&d).unwrap_err();
        assert_eq!(e.kind, ErrorKind::TrailingData);
        assert_eq!(e.offset, d.len() - 1);
    }
}
