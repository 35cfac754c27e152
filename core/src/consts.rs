// Copyright (c) 2022-2023 The MobileCoin Foundation

//! NEM transaction format and display constants

/// Public key (account) length
pub const ACCOUNT_SIZE: usize = 32;

/// Encoded (base32 ASCII) address length
pub const ADDRESS_SIZE: usize = 40;

/// Transaction hash length
pub const HASH_SIZE: usize = 32;

/// Maximum number of mosaics attached to a transfer
pub const MAX_ASSETS: usize = 4;

/// Maximum number of cosignatory modifications per aggregate modification
pub const MAX_MODIFICATIONS: usize = 5;

/// Mosaic definitions carry exactly this many properties
pub const ASSET_PROPERTIES_NUM: usize = 4;

/// Length prefix marking an absent optional string
pub const ABSENT_LEN: u32 = 0xFFFF_FFFF;

/// Network identifier bytes (top byte of the version field)
pub const NETWORK_MAINNET: u8 = 0x68;
pub const NETWORK_TESTNET: u8 = 0x98;

/// Number of general (non-primary) summary items
pub const NUM_GENERAL_ITEMS: usize = 12;

/// Rendered title buffer length
pub const TITLE_LEN: usize = 32;

/// Rendered text buffer length, sized for a hex encoded hash plus terminator
pub const TEXT_LEN: usize = 2 * HASH_SIZE + 1;

/// Local digit buffer for amounts (integer + fractional digits and separator)
pub const AMOUNT_MAX_SIZE: usize = 17;

/// Maximum displayable mosaic name length
pub const ASSET_NAME_MAX: usize = 31;

/// XEM divisibility (micro-xem)
pub const XEM_DIVISIBILITY: u8 = 6;

/// Native currency label
pub const XEM_LABEL: &str = "xem";
