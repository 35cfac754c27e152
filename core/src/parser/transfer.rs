// Copyright (c) 2022-2023 The MobileCoin Foundation

use heapless::Vec;

use super::{Address, Asset, Cursor, Message, Version};
use crate::{
    consts::MAX_ASSETS,
    error::{Error, ErrorKind},
};

/// Transfer transaction body
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                 RECIPIENT_LEN (u32, always 40)                |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                     RECIPIENT (40-byte ASCII)                 /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// +                          AMOUNT (u64)                         +
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                      MESSAGE (see [Message])                  /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                 NUM_ASSETS (u32, version 2 only)              |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                  ASSETS (see [Asset], version 2 only)         /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Transfer<'a> {
    pub recipient: Address<'a>,
    pub amount: u64,
    pub message: Message<'a>,
    pub assets: Vec<Asset<'a>, MAX_ASSETS>,
}

impl<'a> Transfer<'a> {
    /// Decode a transfer body for the provided header version
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn decode(c: &mut Cursor<'a>, version: Version) -> Result<Self, Error> {
        let recipient = c.read_sized()?;
        let amount = c.read_u64()?;
        let message = Message::decode(c)?;

        let mut assets = Vec::new();

        if version == Version::V2 {
            let count_offset = c.offset();
            let count = c.read_u32()? as usize;
            if count > MAX_ASSETS {
                #[cfg(feature = "log")]
                log::debug!("transfer declares {} assets (max {})", count, MAX_ASSETS);

                return Err(ErrorKind::CapacityExceeded.at(count_offset));
            }

            for _ in 0..count {
                let a = Asset::decode_delimited(c)?;
                assets
                    .push(a)
                    .map_err(|_| ErrorKind::CapacityExceeded.at(count_offset))?;
            }
        }

        Ok(Self {
            recipient,
            amount,
            message,
            assets,
        })
    }
}
