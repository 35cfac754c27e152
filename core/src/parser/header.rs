// Copyright (c) 2022-2023 The MobileCoin Foundation

use num_enum::TryFromPrimitive;

use super::{Account, Cursor, Network, TransactionType, Version};
use crate::error::{Error, ErrorKind};

/// Common transaction header
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                     TRANSACTION_TYPE (u32)                    |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                  VERSION (u24)                |    NETWORK    |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                        TIMESTAMP (u32)                        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                   SIGNER_LEN (u32, always 32)                 |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// /                             SIGNER                            /
/// /                     (32-byte Public Key)                      /
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// +                           FEE (u64)                           +
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                        DEADLINE (u32)                         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TransactionHeader<'a> {
    pub kind: TransactionType,
    pub version: Version,
    pub network: Network,
    pub timestamp: u32,
    pub signer: Account<'a>,
    pub fee: u64,
    pub deadline: u32,
}

impl<'a> TransactionHeader<'a> {
    /// Decode a transaction header
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn decode(c: &mut Cursor<'a>) -> Result<Self, Error> {
        let kind = c.read_enum::<TransactionType>()?;
        let (version, network) = decode_version_and_network(c)?;
        let timestamp = c.read_u32()?;
        let signer = c.read_sized()?;
        let fee = c.read_u64()?;
        let deadline = c.read_u32()?;

        Ok(Self {
            kind,
            version,
            network,
            timestamp,
            signer,
            fee,
            deadline,
        })
    }
}

/// Split the combined version field into format version and network
fn decode_version_and_network(c: &mut Cursor) -> Result<(Version, Network), Error> {
    let start = c.offset();
    let mut t = *c;

    let value = t.read_u32()?;

    let network = Network::try_from_primitive((value >> 24) as u8)
        .map_err(|_| ErrorKind::InvalidEnum.at(start))?;
    let version = Version::try_from_primitive(value & 0x00ff_ffff)
        .map_err(|_| ErrorKind::InvalidEnum.at(start))?;

    *c = t;

    Ok((version, network))
}
