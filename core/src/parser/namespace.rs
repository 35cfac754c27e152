// Copyright (c) 2022-2023 The MobileCoin Foundation

use super::{Address, Cursor};
use crate::error::Error;

/// Provision namespace body
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                  SINK_LEN (u32, always 40)                    |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                 RENTAL FEE SINK (40-byte ASCII)               /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// +                        RENTAL FEE (u64)                       +
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                       NEW_PART_LEN (u32)                      |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                          NEW_PART...                          /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |            PARENT_LEN (u32, 0xFFFFFFFF for root)              |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                           PARENT...                           /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ProvisionNamespace<'a> {
    pub sink: Address<'a>,
    pub rental_fee: u64,
    pub new_part: &'a [u8],
    /// Parent namespace, `None` when provisioning a root namespace
    pub parent: Option<&'a [u8]>,
}

impl<'a> ProvisionNamespace<'a> {
    pub fn decode(c: &mut Cursor<'a>) -> Result<Self, Error> {
        let sink = c.read_sized()?;
        let rental_fee = c.read_u64()?;
        let new_part = c.read_length_prefixed_bytes()?;
        let parent = c.read_optional_string()?;

        Ok(Self {
            sink,
            rental_fee,
            new_part,
            parent,
        })
    }

    /// Parent namespace if present and non-empty
    pub fn parent(&self) -> Option<&'a [u8]> {
        self.parent.filter(|p| !p.is_empty())
    }
}
