// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Parser error types

use core::fmt;

/// Decode / render error kinds
///
/// Discriminants are stable and may be forwarded as status codes by the
/// transport layer (see [Error::code]).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
#[repr(u8)]
pub enum ErrorKind {
    /// Read would exceed remaining buffer
    #[cfg_attr(feature = "thiserror", error("insufficient data"))]
    InsufficientData = 0x00,

    /// Value outside an allow-list (transaction type, mode, action, message type)
    #[cfg_attr(feature = "thiserror", error("invalid enumeration value"))]
    InvalidEnum = 0x01,

    /// Fixed-size field or fixed-count list with unexpected length
    #[cfg_attr(feature = "thiserror", error("invalid length"))]
    InvalidLength = 0x02,

    /// Delimited sub-buffer not fully consumed
    #[cfg_attr(feature = "thiserror", error("trailing data"))]
    TrailingData = 0x03,

    /// Multisig wrapper containing a disallowed inner transaction
    #[cfg_attr(feature = "thiserror", error("invalid transaction nesting"))]
    InvalidNesting = 0x04,

    /// Fixed capacity container (assets, modifications, summary items, output buffer) full
    #[cfg_attr(feature = "thiserror", error("capacity exceeded"))]
    CapacityExceeded = 0x05,

    /// Text field not representable for display
    #[cfg_attr(feature = "thiserror", error("invalid text encoding"))]
    InvalidEncoding = 0x06,

    /// Summary index does not address a claimed item
    #[cfg_attr(feature = "thiserror", error("invalid summary index"))]
    InvalidIndex = 0x07,

    /// Summary slot already claimed
    #[cfg_attr(feature = "thiserror", error("summary slot in use"))]
    SlotInUse = 0x08,
}

impl ErrorKind {
    /// Attach a byte offset to an error kind
    pub const fn at(self, offset: usize) -> Error {
        Error { kind: self, offset }
    }
}

/// Parser error, an [ErrorKind] with the absolute byte offset of the
/// failing read (zero for errors not tied to input position)
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub offset: usize,
}

impl Error {
    /// Fetch error kind
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Fetch absolute input offset
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Stable numeric code for the error kind
    pub const fn code(&self) -> u8 {
        self.kind as u8
    }

    /// Returns true for errors raised while decoding input bytes
    /// (as opposed to rendering a decoded summary)
    pub const fn is_decode(&self) -> bool {
        !matches!(
            self.kind,
            ErrorKind::InvalidEncoding | ErrorKind::InvalidIndex | ErrorKind::SlotInUse
        )
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        kind.at(0)
    }
}

/// encdec primitive decoders only fail on short buffers
impl From<encdec::Error> for Error {
    fn from(_e: encdec::Error) -> Self {
        ErrorKind::InsufficientData.at(0)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} at offset {}", self.kind, self.offset)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
