// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Common NEM types shared between transaction decoders

use num_enum::TryFromPrimitive;
use strum::{Display, EnumIter, IntoStaticStr};

use super::Cursor;
use crate::{
    consts::{ACCOUNT_SIZE, ADDRESS_SIZE, HASH_SIZE},
    error::Error,
};

/// Account public key, borrowed from the input buffer
pub type Account<'a> = &'a [u8; ACCOUNT_SIZE];

/// Base32 encoded address, borrowed from the input buffer
pub type Address<'a> = &'a [u8; ADDRESS_SIZE];

/// Transaction hash, borrowed from the input buffer
pub type Hash<'a> = &'a [u8; HASH_SIZE];

/// Transaction type allow-list
#[derive(
    Copy, Clone, PartialEq, Eq, Debug, Display, EnumIter, IntoStaticStr, TryFromPrimitive,
)]
#[repr(u32)]
pub enum TransactionType {
    #[strum(to_string = "Transfer TX")]
    Transfer = 0x0101,
    #[strum(to_string = "Importance TX")]
    ImportanceTransfer = 0x0801,
    #[strum(to_string = "Convert to Multisig")]
    MultisigAggregateModification = 0x1001,
    #[strum(to_string = "Multisig signature")]
    MultisigSignature = 0x1002,
    #[strum(to_string = "Multisig TX")]
    Multisig = 0x1004,
    #[strum(to_string = "Namespace TX")]
    ProvisionNamespace = 0x2001,
    #[strum(to_string = "Create Mosaic")]
    MosaicDefinitionCreation = 0x4001,
    #[strum(to_string = "Mosaic Supply")]
    MosaicSupplyChange = 0x4002,
}

/// Transaction format version (low 24 bits of the version field)
#[derive(Copy, Clone, PartialEq, Eq, Debug, Display, EnumIter, TryFromPrimitive)]
#[repr(u32)]
pub enum Version {
    V1 = 1,
    V2 = 2,
}

/// Network identifier (top byte of the version field)
#[derive(Copy, Clone, PartialEq, Eq, Debug, Display, EnumIter, TryFromPrimitive)]
#[repr(u8)]
pub enum Network {
    Mainnet = 0x68,
    Testnet = 0x98,
}

/// Message payload type allow-list
#[derive(Copy, Clone, PartialEq, Eq, Debug, Display, TryFromPrimitive)]
#[repr(u32)]
pub enum MessageType {
    Plain = 1,
    Encrypted = 2,
}

/// Transfer message
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Message<'a> {
    None,
    Plain(&'a [u8]),
    Encrypted(&'a [u8]),
}

impl<'a> Message<'a> {
    /// Decode a message blob
    ///
    /// ## Encoding:
    /// ```text
    ///  0                   1                   2                   3
    ///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |              MESSAGE_LEN (u32, 0 for no message)              |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |           MESSAGE_TYPE (u32, 1 plain / 2 encrypted)           |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |                       PAYLOAD_LEN (u32)                       |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// /                          PAYLOAD...                           /
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// ```
    pub fn decode(c: &mut Cursor<'a>) -> Result<Self, Error> {
        c.read_delimited(|m| {
            if m.remaining() == 0 {
                return Ok(Message::None);
            }

            let message = match m.read_enum::<MessageType>()? {
                MessageType::Plain => Message::Plain(m.read_length_prefixed_bytes()?),
                MessageType::Encrypted => Message::Encrypted(m.read_length_prefixed_bytes()?),
            };

            Ok(message)
        })
    }
}

/// Mosaic identifier (namespace + name)
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AssetId<'a> {
    pub namespace: &'a [u8],
    pub name: &'a [u8],
}

impl<'a> AssetId<'a> {
    /// Decode an inline mosaic id (two length prefixed strings)
    pub fn decode(c: &mut Cursor<'a>) -> Result<Self, Error> {
        let namespace = c.read_length_prefixed_bytes()?;
        let name = c.read_length_prefixed_bytes()?;

        Ok(Self { namespace, name })
    }

    /// Decode a length delimited mosaic id
    pub fn decode_delimited(c: &mut Cursor<'a>) -> Result<Self, Error> {
        c.read_delimited(Self::decode)
    }
}

/// Mosaic attachment with quantity (raw units)
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Asset<'a> {
    pub id: AssetId<'a>,
    pub quantity: u64,
}

impl<'a> Asset<'a> {
    /// Decode a length delimited mosaic attachment
    ///
    /// ## Encoding:
    /// ```text
    ///  0                   1                   2                   3
    ///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |                        ASSET_LEN (u32)                        |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |                        ASSET_ID_LEN (u32)                     |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |                        NAMESPACE_LEN (u32)                    |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// /                          NAMESPACE...                         /
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |                          NAME_LEN (u32)                       |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// /                            NAME...                            /
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |                                                               |
    /// +                        QUANTITY (u64)                         +
    /// |                                                               |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// ```
    pub fn decode_delimited(c: &mut Cursor<'a>) -> Result<Self, Error> {
        c.read_delimited(|a| {
            let id = AssetId::decode_delimited(a)?;
            let quantity = a.read_u64()?;

            Ok(Self { id, quantity })
        })
    }
}

/// Mosaic definition property (name / value string pair)
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct AssetProperty<'a> {
    pub name: &'a [u8],
    pub value: &'a [u8],
}

impl<'a> AssetProperty<'a> {
    /// Decode a length delimited property
    pub fn decode_delimited(c: &mut Cursor<'a>) -> Result<Self, Error> {
        c.read_delimited(|p| {
            let name = p.read_length_prefixed_bytes()?;
            let value = p.read_length_prefixed_bytes()?;

            Ok(Self { name, value })
        })
    }
}
