// Copyright (c) 2022-2023 The MobileCoin Foundation

use heapless::Vec;
use num_enum::TryFromPrimitive;
use strum::{Display, EnumIter, IntoStaticStr};

use super::{Account, Cursor, Version};
use crate::{
    consts::MAX_MODIFICATIONS,
    error::{Error, ErrorKind},
};

/// Cosignatory modification action
#[derive(
    Copy, Clone, PartialEq, Eq, Debug, Display, EnumIter, IntoStaticStr, TryFromPrimitive,
)]
#[repr(u32)]
pub enum ModificationAction {
    #[strum(to_string = "Add cosignatory")]
    Add = 1,
    #[strum(to_string = "Delete cosign.")]
    Delete = 2,
}

/// Single cosignatory modification
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CosignatoryModification<'a> {
    pub action: ModificationAction,
    pub account: Account<'a>,
}

impl<'a> CosignatoryModification<'a> {
    /// Decode a length delimited modification
    pub fn decode_delimited(c: &mut Cursor<'a>) -> Result<Self, Error> {
        c.read_delimited(|m| {
            let action = m.read_enum()?;
            let account = m.read_sized()?;

            Ok(Self { action, account })
        })
    }
}

/// Multisig aggregate modification body (convert to / edit multisig account)
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                    NUM_MODIFICATIONS (u32)                    |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                   MODIFICATION_LEN (u32, 40)                  |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                ACTION (u32, 1 add / 2 delete)                 |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                  ACCOUNT_LEN (u32, always 32)                 |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                    ACCOUNT (32-byte Public Key)               /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                ... repeated NUM_MODIFICATIONS times           /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |       MIN_COSIG_LEN (u32, 0 or 4, version 2 only)             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |       RELATIVE_CHANGE (i32, present when MIN_COSIG_LEN = 4)   |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AggregateModification<'a> {
    pub modifications: Vec<CosignatoryModification<'a>, MAX_MODIFICATIONS>,
    /// Change in minimum cosignatories, `None` for version 1 or an empty block
    pub relative_change: Option<i32>,
}

impl<'a> AggregateModification<'a> {
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn decode(c: &mut Cursor<'a>, version: Version) -> Result<Self, Error> {
        let count_offset = c.offset();
        let count = c.read_u32()? as usize;
        if count > MAX_MODIFICATIONS {
            #[cfg(feature = "log")]
            log::debug!("{} modifications exceeds max {}", count, MAX_MODIFICATIONS);

            return Err(ErrorKind::CapacityExceeded.at(count_offset));
        }

        let mut modifications = Vec::new();
        for _ in 0..count {
            let m = CosignatoryModification::decode_delimited(c)?;
            modifications
                .push(m)
                .map_err(|_| ErrorKind::CapacityExceeded.at(count_offset))?;
        }

        let relative_change = match version {
            Version::V1 => None,
            Version::V2 => c.read_delimited(|r| match r.remaining() {
                0 => Ok(None),
                _ => r.read_u32().map(|v| Some(v as i32)),
            })?,
        };

        Ok(Self {
            modifications,
            relative_change,
        })
    }
}
