// Copyright (c) 2022-2023 The MobileCoin Foundation

use super::{
    AggregateModification, Cursor, ImportanceTransfer, MosaicDefinitionCreation,
    MosaicSupplyChange, ProvisionNamespace, TransactionHeader, TransactionType, Transfer,
};
use crate::error::{Error, ErrorKind};

/// Transaction bodies permitted inside a multisig wrapper
///
/// Multisig and multisig signature transactions may not be nested.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum InnerBody<'a> {
    Transfer(Transfer<'a>),
    ImportanceTransfer(ImportanceTransfer<'a>),
    AggregateModification(AggregateModification<'a>),
    ProvisionNamespace(ProvisionNamespace<'a>),
    MosaicDefinitionCreation(MosaicDefinitionCreation<'a>),
    MosaicSupplyChange(MosaicSupplyChange<'a>),
}

/// Inner transaction carried by a multisig wrapper
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                     INNER_TX_LEN (u32)                        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /              INNER HEADER (see [TransactionHeader])           /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                 INNER BODY (see [InnerBody])                  /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct InnerTransaction<'a> {
    pub header: TransactionHeader<'a>,
    pub body: InnerBody<'a>,
}

impl<'a> InnerTransaction<'a> {
    /// Decode a length delimited inner transaction, requiring the
    /// inner buffer be exactly consumed
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn decode_delimited(c: &mut Cursor<'a>) -> Result<Self, Error> {
        c.read_delimited(|t| {
            let start = t.offset();
            let header = TransactionHeader::decode(t)?;

            #[cfg(feature = "log")]
            log::debug!("multisig inner: {:?}", header.kind);

            let body = match header.kind {
                TransactionType::Transfer => {
                    InnerBody::Transfer(Transfer::decode(t, header.version)?)
                }
                TransactionType::ImportanceTransfer => {
                    InnerBody::ImportanceTransfer(ImportanceTransfer::decode(t)?)
                }
                TransactionType::MultisigAggregateModification => InnerBody::AggregateModification(
                    AggregateModification::decode(t, header.version)?,
                ),
                TransactionType::ProvisionNamespace => {
                    InnerBody::ProvisionNamespace(ProvisionNamespace::decode(t)?)
                }
                TransactionType::MosaicDefinitionCreation => {
                    InnerBody::MosaicDefinitionCreation(MosaicDefinitionCreation::decode(t)?)
                }
                TransactionType::MosaicSupplyChange => {
                    InnerBody::MosaicSupplyChange(MosaicSupplyChange::decode(t)?)
                }
                TransactionType::Multisig | TransactionType::MultisigSignature => {
                    #[cfg(feature = "log")]
                    log::error!("nested {:?} not permitted", header.kind);

                    return Err(ErrorKind::InvalidNesting.at(start));
                }
            };

            Ok(Self { header, body })
        })
    }
}
