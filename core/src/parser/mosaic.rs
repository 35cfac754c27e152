// Copyright (c) 2022-2023 The MobileCoin Foundation

use num_enum::TryFromPrimitive;
use strum::{Display, EnumIter, IntoStaticStr};

use super::{Account, Address, AssetId, AssetProperty, Cursor};
use crate::{
    consts::ASSET_PROPERTIES_NUM,
    error::{Error, ErrorKind},
};

/// Mosaic definition, as embedded in a definition creation transaction
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                      DEFINITION_LEN (u32)                     |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                  CREATOR_LEN (u32, always 32)                 |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                   CREATOR (32-byte Public Key)                /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                  ASSET_ID (see [AssetId], delimited)          /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                     DESCRIPTION_LEN (u32)                     |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                         DESCRIPTION...                        /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                 NUM_PROPERTIES (u32, always 4)                |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /           PROPERTIES (see [AssetProperty], delimited)         /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                 LEVY_LEN (u32, 0 for no levy)                 |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                            LEVY...                            /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AssetDefinition<'a> {
    pub creator: Account<'a>,
    pub id: AssetId<'a>,
    pub description: &'a [u8],
    /// Properties in wire order: divisibility, initial supply,
    /// supply mutable, transferable
    pub properties: [AssetProperty<'a>; ASSET_PROPERTIES_NUM],
    /// Levy is not decoded, only its presence is reported
    pub has_levy: bool,
}

impl<'a> AssetDefinition<'a> {
    /// Decode a length delimited mosaic definition
    pub fn decode_delimited(c: &mut Cursor<'a>) -> Result<Self, Error> {
        c.read_delimited(|d| {
            let creator = d.read_sized()?;
            let id = AssetId::decode_delimited(d)?;
            let description = d.read_length_prefixed_bytes()?;

            let count_offset = d.offset();
            let count = d.read_u32()? as usize;
            if count != ASSET_PROPERTIES_NUM {
                #[cfg(feature = "log")]
                log::debug!("mosaic definition with {} properties", count);

                return Err(ErrorKind::InvalidLength.at(count_offset));
            }

            let mut properties = [AssetProperty::default(); ASSET_PROPERTIES_NUM];
            for p in properties.iter_mut() {
                *p = AssetProperty::decode_delimited(d)?;
            }

            let levy = d.read_length_prefixed_bytes()?;

            Ok(Self {
                creator,
                id,
                description,
                properties,
                has_levy: !levy.is_empty(),
            })
        })
    }

    pub fn divisibility(&self) -> &'a [u8] {
        self.properties[0].value
    }

    pub fn initial_supply(&self) -> &'a [u8] {
        self.properties[1].value
    }

    pub fn supply_mutable(&self) -> &'a [u8] {
        self.properties[2].value
    }

    pub fn transferable(&self) -> &'a [u8] {
        self.properties[3].value
    }
}

/// Mosaic definition creation body
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MosaicDefinitionCreation<'a> {
    pub definition: AssetDefinition<'a>,
    pub sink: Address<'a>,
    pub creation_fee: u64,
}

impl<'a> MosaicDefinitionCreation<'a> {
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn decode(c: &mut Cursor<'a>) -> Result<Self, Error> {
        let definition = AssetDefinition::decode_delimited(c)?;
        let sink = c.read_sized()?;
        let creation_fee = c.read_u64()?;

        Ok(Self {
            definition,
            sink,
            creation_fee,
        })
    }
}

/// Mosaic supply change direction
#[derive(
    Copy, Clone, PartialEq, Eq, Debug, Display, EnumIter, IntoStaticStr, TryFromPrimitive,
)]
#[repr(u32)]
pub enum SupplyType {
    Increase = 1,
    Decrease = 2,
}

/// Mosaic supply change body
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// /                 ASSET_ID (see [AssetId], inline)              /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |              SUPPLY_TYPE (u32, 1 increase / 2 decrease)       |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// +                           DELTA (u64)                         +
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MosaicSupplyChange<'a> {
    pub id: AssetId<'a>,
    pub supply_type: SupplyType,
    pub delta: u64,
}

impl<'a> MosaicSupplyChange<'a> {
    pub fn decode(c: &mut Cursor<'a>) -> Result<Self, Error> {
        let id = AssetId::decode(c)?;
        let supply_type = c.read_enum()?;
        let delta = c.read_u64()?;

        Ok(Self {
            id,
            supply_type,
            delta,
        })
    }
}
