// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Bounds checked little-endian reader over a borrowed buffer

use encdec::DecodeOwned;
use num_enum::TryFromPrimitive;

use crate::{
    consts::ABSENT_LEN,
    error::{Error, ErrorKind},
};

/// Read cursor over a caller-owned byte slice.
///
/// All reads are bounds checked and either advance the cursor or fail
/// leaving the position untouched. Sub-cursors opened over delimited
/// blobs keep track of their absolute offset for error reporting.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Cursor<'a> {
    buff: &'a [u8],
    index: usize,
    base: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor over the provided buffer
    pub const fn new(buff: &'a [u8]) -> Self {
        Self {
            buff,
            index: 0,
            base: 0,
        }
    }

    /// Number of unread bytes
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buff.len() - self.index
    }

    /// Bytes consumed from this cursor
    #[inline]
    pub fn consumed(&self) -> usize {
        self.index
    }

    /// Absolute offset of the read position (relative to the top-level buffer)
    #[inline]
    pub fn offset(&self) -> usize {
        self.base + self.index
    }

    /// Build an error at the current read position
    #[inline]
    pub fn error(&self, kind: ErrorKind) -> Error {
        kind.at(self.offset())
    }

    /// Run a composite read, restoring the position if any step fails
    fn atomic<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, Error>) -> Result<T, Error> {
        let mut c = *self;
        let v = f(&mut c)?;
        *self = c;
        Ok(v)
    }

    /// Decode a fixed width primitive
    fn read_primitive<T: DecodeOwned<Output = T>>(&mut self) -> Result<T, Error> {
        let (v, n) = T::decode_owned(&self.buff[self.index..])
            .map_err(|_| self.error(ErrorKind::InsufficientData))?;
        self.index += n;
        Ok(v)
    }

    /// Read a single byte
    pub fn read_u8(&mut self) -> Result<u8, Error> {
        self.read_primitive::<u8>()
    }

    /// Read a little-endian u32
    pub fn read_u32(&mut self) -> Result<u32, Error> {
        self.read_primitive::<u32>()
    }

    /// Read a little-endian u64, encoded as low then high u32 words
    pub fn read_u64(&mut self) -> Result<u64, Error> {
        self.atomic(|c| {
            let low = c.read_u32()?;
            let high = c.read_u32()?;
            Ok((u64::from(high) << 32) | u64::from(low))
        })
    }

    /// Read a u32 and check it against an enumeration allow-list
    pub fn read_enum<T: TryFromPrimitive<Primitive = u32>>(&mut self) -> Result<T, Error> {
        let start = self.offset();

        self.atomic(|c| {
            let v = c.read_u32()?;
            T::try_from_primitive(v).map_err(|_| {
                #[cfg(feature = "log")]
                log::debug!("invalid {} value: 0x{:x}", T::NAME, v);

                ErrorKind::InvalidEnum.at(start)
            })
        })
    }

    /// Borrow the next `n` bytes
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], Error> {
        let end = match self.index.checked_add(n) {
            Some(v) if v <= self.buff.len() => v,
            _ => return Err(self.error(ErrorKind::InsufficientData)),
        };

        let d = &self.buff[self.index..end];
        self.index = end;

        Ok(d)
    }

    /// Read a u32 length prefix followed by that many bytes
    pub fn read_length_prefixed_bytes(&mut self) -> Result<&'a [u8], Error> {
        self.atomic(|c| {
            let len = c.read_u32()?;
            c.read_bytes(len as usize)
        })
    }

    /// Read a length prefixed blob that must be exactly `N` bytes long
    pub fn read_sized<const N: usize>(&mut self) -> Result<&'a [u8; N], Error> {
        let start = self.offset();

        self.atomic(|c| {
            let d = c.read_length_prefixed_bytes()?;
            <&[u8; N]>::try_from(d).map_err(|_| ErrorKind::InvalidLength.at(start))
        })
    }

    /// Read an optional length prefixed string, where a [ABSENT_LEN]
    /// prefix marks the value as absent
    pub fn read_optional_string(&mut self) -> Result<Option<&'a [u8]>, Error> {
        self.atomic(|c| {
            let len = c.read_u32()?;
            if len == ABSENT_LEN {
                return Ok(None);
            }
            c.read_bytes(len as usize).map(Some)
        })
    }

    /// Open a sub-cursor over a length prefixed blob
    pub fn read_sub_cursor(&mut self) -> Result<Cursor<'a>, Error> {
        self.atomic(|c| {
            let len = c.read_u32()?;
            let base = c.offset();
            let buff = c.read_bytes(len as usize)?;
            Ok(Cursor {
                buff,
                index: 0,
                base,
            })
        })
    }

    /// Decode a length prefixed blob with the provided function,
    /// requiring the blob be exactly consumed
    pub fn read_delimited<T>(
        &mut self,
        f: impl FnOnce(&mut Cursor<'a>) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.atomic(|c| {
            let mut sub = c.read_sub_cursor()?;
            let v = f(&mut sub)?;
            sub.finish()?;
            Ok(v)
        })
    }

    /// Check the cursor has been fully consumed
    pub fn finish(&self) -> Result<(), Error> {
        match self.remaining() {
            0 => Ok(()),
            _ => Err(self.error(ErrorKind::TrailingData)),
        }
    }
}
