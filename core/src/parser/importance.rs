// Copyright (c) 2022-2023 The MobileCoin Foundation

use num_enum::TryFromPrimitive;
use strum::{Display, EnumIter, IntoStaticStr};

use super::{Account, Cursor};
use crate::error::Error;

/// Importance transfer mode
#[derive(
    Copy, Clone, PartialEq, Eq, Debug, Display, EnumIter, IntoStaticStr, TryFromPrimitive,
)]
#[repr(u32)]
pub enum ImportanceMode {
    Activate = 1,
    Deactivate = 2,
}

/// Importance transfer body, (de)activating remote harvesting
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                 MODE (u32, 1 activate / 2 deactivate)         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                  REMOTE_LEN (u32, always 32)                  |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                  REMOTE ACCOUNT (32-byte Public Key)           /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ImportanceTransfer<'a> {
    pub mode: ImportanceMode,
    pub remote: Account<'a>,
}

impl<'a> ImportanceTransfer<'a> {
    pub fn decode(c: &mut Cursor<'a>) -> Result<Self, Error> {
        let mode = c.read_enum()?;
        let remote = c.read_sized()?;

        Ok(Self { mode, remote })
    }
}
