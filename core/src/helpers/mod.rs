// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Value formatters for summary rendering
//!
//! Formatters write into caller provided buffers and return the rendered
//! `&str`. Output is limited to `buff.len() - 1` bytes, leaving room for a
//! display terminator.

use core::str::from_utf8;

use emstr::EncodeStr;

use crate::{
    consts::{ADDRESS_SIZE, AMOUNT_MAX_SIZE, ASSET_NAME_MAX, XEM_DIVISIBILITY},
    error::{Error, ErrorKind},
    parser::{Asset, AssetId, Message},
};

/// Native currency mosaic namespace
const CURRENCY_NAMESPACE: &[u8] = b"nem";

/// Native currency mosaic names
const CURRENCY_NAMES: &[&str] = &["xem", "nem"];

/// Truncation marker for long text
const ELLIPSIS: &str = "..";

/// Fetch writable length for a display buffer
fn bound(buff: &[u8]) -> Result<usize, Error> {
    buff.len()
        .checked_sub(1)
        .ok_or_else(|| ErrorKind::CapacityExceeded.into())
}

/// Convert rendered bytes to a string
fn as_str(buff: &[u8]) -> Result<&str, Error> {
    from_utf8(buff).map_err(|_| ErrorKind::InvalidEncoding.into())
}

/// Copy bytes into the buffer at `n`, failing if they do not fit
fn put(buff: &mut [u8], n: usize, s: &[u8]) -> Result<usize, Error> {
    let end = n + s.len();
    if end > bound(buff)? {
        return Err(ErrorKind::CapacityExceeded.into());
    }
    buff[n..end].copy_from_slice(s);
    Ok(end)
}

/// Format an amount in base units as a decimal value with the provided
/// divisibility and optional label.
///
/// Trailing fractional zeros (and a bare separator) are removed,
/// `1234560000` with divisibility 6 renders as `1234.56`.
pub fn fmt_amount<'a>(
    amount: u64,
    divisibility: u8,
    label: Option<&str>,
    buff: &'a mut [u8],
) -> Result<&'a str, Error> {
    let div = divisibility as usize;

    // Write digits least-significant first
    let mut digits = [0u8; AMOUNT_MAX_SIZE];
    let (mut i, mut count, mut v) = (0, 0, amount);

    while v > 0 || count <= div {
        if i >= AMOUNT_MAX_SIZE {
            return Err(ErrorKind::CapacityExceeded.into());
        }
        digits[i] = b'0' + (v % 10) as u8;
        v /= 10;
        i += 1;
        count += 1;

        if div > 0 && count == div {
            if i >= AMOUNT_MAX_SIZE {
                return Err(ErrorKind::CapacityExceeded.into());
            }
            digits[i] = b'.';
            i += 1;
        }
    }

    if i > bound(buff)? {
        return Err(ErrorKind::CapacityExceeded.into());
    }

    for (o, d) in buff[..i].iter_mut().zip(digits[..i].iter().rev()) {
        *o = *d;
    }

    // Strip trailing zeros then a dangling separator
    let mut n = i;
    if div > 0 {
        while n > 1 && buff[n - 1] == b'0' {
            n -= 1;
        }
        if buff[n - 1] == b'.' {
            n -= 1;
        }
    }

    if let Some(l) = label {
        n = put(buff, n, b" ")?;
        n = put(buff, n, l.as_bytes())?;
    }

    as_str(&buff[..n])
}

/// Format an amount in micro-xem
pub fn fmt_xem(amount: u64, buff: &mut [u8]) -> Result<&str, Error> {
    fmt_amount(amount, XEM_DIVISIBILITY, Some(crate::consts::XEM_LABEL), buff)
}

/// Format a 40 character base32 address
pub fn fmt_address<'a>(address: &[u8; ADDRESS_SIZE], buff: &'a mut [u8]) -> Result<&'a str, Error> {
    let n = put(buff, 0, address)?;
    as_str(&buff[..n])
}

/// Format binary data (hashes, public keys) as lowercase hex
pub fn fmt_hex<'a>(data: &[u8], buff: &'a mut [u8]) -> Result<&'a str, Error> {
    let n = data.len() * 2;
    if n > bound(buff)? {
        return Err(ErrorKind::CapacityExceeded.into());
    }

    hex::encode_to_slice(data, &mut buff[..n])
        .map_err(|_| Error::from(ErrorKind::CapacityExceeded))?;

    as_str(&buff[..n])
}

/// Format free text, truncating with `..` where the text exceeds the buffer
pub fn fmt_text<'a>(text: &[u8], buff: &'a mut [u8]) -> Result<&'a str, Error> {
    let s = as_str(text)?;
    let max = bound(buff)?;

    if s.len() <= max {
        let n = put(buff, 0, s.as_bytes())?;
        return as_str(&buff[..n]);
    }

    // Backtrack to a character boundary to fit the marker
    let mut n = max.saturating_sub(ELLIPSIS.len());
    while !s.is_char_boundary(n) {
        n -= 1;
    }

    let n = put(buff, 0, s[..n].as_bytes())?;
    let n = put(buff, n, ELLIPSIS.as_bytes())?;

    as_str(&buff[..n])
}

/// Format a transfer message
pub fn fmt_message<'a>(message: &Message, buff: &'a mut [u8]) -> Result<&'a str, Error> {
    match message {
        Message::None => fmt_text(b"<empty msg>", buff),
        Message::Plain(text) => fmt_text(text, buff),
        Message::Encrypted(_) => fmt_text(b"<encrypted msg>", buff),
    }
}

pub fn fmt_boolean(value: bool, buff: &mut [u8]) -> Result<&str, Error> {
    match value {
        true => fmt_text(b"Yes", buff),
        false => fmt_text(b"No", buff),
    }
}

/// Format an unsigned integer
pub fn fmt_number(value: u64, buff: &mut [u8]) -> Result<&str, Error> {
    let max = bound(buff)?;
    let n = emstr::write!(&mut buff[..max], value)
        .map_err(|_| Error::from(ErrorKind::CapacityExceeded))?;
    as_str(&buff[..n])
}

/// Format the number of attached mosaics
pub fn fmt_num_assets(count: usize, buff: &mut [u8]) -> Result<&str, Error> {
    let max = bound(buff)?;
    let n = emstr::write!(&mut buff[..max], "Found ", count, " mosaics")
        .map_err(|_| Error::from(ErrorKind::CapacityExceeded))?;
    as_str(&buff[..n])
}

/// Returns true for native currency mosaics, which must be
/// declared under the `nem` namespace
pub fn is_currency(id: &AssetId) -> bool {
    id.namespace == CURRENCY_NAMESPACE && CURRENCY_NAMES.iter().any(|c| c.as_bytes() == id.name)
}

/// Format a mosaic attachment.
///
/// Native currency renders as a xem amount, other mosaics as
/// `<quantity> <name>` in raw units.
pub fn fmt_asset<'a>(asset: &Asset, buff: &'a mut [u8]) -> Result<&'a str, Error> {
    let name = asset.id.name;
    if name.len() > ASSET_NAME_MAX {
        return Err(ErrorKind::CapacityExceeded.into());
    }
    let name = as_str(name)?;

    if is_currency(&asset.id) {
        return fmt_amount(asset.quantity, XEM_DIVISIBILITY, Some(name), buff);
    }

    if asset.quantity > i32::MAX as u64 {
        #[cfg(feature = "log")]
        log::debug!("raw quantity {} exceeds display range", asset.quantity);

        return Err(ErrorKind::CapacityExceeded.into());
    }

    let max = bound(buff)?;
    let n = emstr::write!(&mut buff[..max], asset.quantity, ' ', name)
        .map_err(|_| Error::from(ErrorKind::CapacityExceeded))?;
    as_str(&buff[..n])
}

/// Format a change in minimum cosignatories
pub fn fmt_relative_change(change: Option<i32>, buff: &mut [u8]) -> Result<&str, Error> {
    let max = bound(buff)?;

    let r = match change {
        Some(v) if v > 0 => emstr::write!(&mut buff[..max], "Add ", v.unsigned_abs(), " address(es)"),
        Some(v) if v < 0 => {
            emstr::write!(&mut buff[..max], "Remove ", v.unsigned_abs(), " address(es)")
        }
        _ => emstr::write!(&mut buff[..max], "Not change"),
    };

    let n = r.map_err(|_| Error::from(ErrorKind::CapacityExceeded))?;
    as_str(&buff[..n])
}
