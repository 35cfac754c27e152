// Copyright (c) 2022-2023 The MobileCoin Foundation

use super::{Address, Cursor, Hash};
use crate::error::Error;

/// Multisig signature body, cosigning a pending multisig transaction
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                  HASH_OBJECT_LEN (u32, always 36)             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                    HASH_LEN (u32, always 32)                  |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                      INNER TX HASH (32-byte)                  /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                 ADDRESS_LEN (u32, always 40)                  |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /              MULTISIG ACCOUNT ADDRESS (40-byte ASCII)         /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MultisigSignature<'a> {
    pub hash: Hash<'a>,
    pub address: Address<'a>,
}

impl<'a> MultisigSignature<'a> {
    pub fn decode(c: &mut Cursor<'a>) -> Result<Self, Error> {
        let hash = c.read_delimited(|h| h.read_sized())?;
        let address = c.read_sized()?;

        Ok(Self { hash, address })
    }
}
