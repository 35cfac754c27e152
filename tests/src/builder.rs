// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Little-endian NEM transaction encoder for building test payloads

use byteorder::{LittleEndian, WriteBytesExt};

use ledger_nem_core::{
    consts::ABSENT_LEN,
    parser::{Network, TransactionType, Version},
};

/// Default signer public key
pub const SIGNER: [u8; 32] = [0x11; 32];

/// Default header timestamp
pub const TIMESTAMP: u32 = 179_201_716;

/// Default header deadline
pub const DEADLINE: u32 = TIMESTAMP + 3600;

/// Transaction payload builder
#[derive(Clone, Debug, Default)]
pub struct TxBuilder {
    buff: Vec<u8>,
}

impl TxBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder starting with a common transaction header
    pub fn header(kind: TransactionType, version: Version, network: Network, fee: u64) -> Self {
        Self::new()
            .u32(kind as u32)
            .u32((network as u32) << 24 | version as u32)
            .u32(TIMESTAMP)
            .bytes(&SIGNER)
            .u64(fee)
            .u32(DEADLINE)
    }

    /// Append a u32
    pub fn u32(mut self, v: u32) -> Self {
        self.buff
            .write_u32::<LittleEndian>(v)
            .expect("vec write");
        self
    }

    /// Append a u64 as low then high words
    pub fn u64(self, v: u64) -> Self {
        self.u32(v as u32).u32((v >> 32) as u32)
    }

    /// Append raw bytes with no length prefix
    pub fn raw(mut self, d: &[u8]) -> Self {
        self.buff.extend_from_slice(d);
        self
    }

    /// Append a length prefixed blob
    pub fn bytes(self, d: &[u8]) -> Self {
        self.u32(d.len() as u32).raw(d)
    }

    /// Append an absent optional string
    pub fn absent(self) -> Self {
        self.u32(ABSENT_LEN)
    }

    /// Append a length prefixed nested structure
    pub fn nested(self, f: impl FnOnce(TxBuilder) -> TxBuilder) -> Self {
        let inner = f(TxBuilder::new()).build();
        self.bytes(&inner)
    }

    /// Append a message blob (`None` for an empty message)
    pub fn message(self, kind: Option<u32>, payload: &[u8]) -> Self {
        match kind {
            Some(k) => self.nested(|m| m.u32(k).bytes(payload)),
            None => self.u32(0),
        }
    }

    /// Append a delimited mosaic id
    pub fn asset_id(self, namespace: &str, name: &str) -> Self {
        self.nested(|i| i.bytes(namespace.as_bytes()).bytes(name.as_bytes()))
    }

    /// Append a delimited mosaic attachment
    pub fn asset(self, namespace: &str, name: &str, quantity: u64) -> Self {
        self.nested(|a| a.asset_id(namespace, name).u64(quantity))
    }

    /// Append a delimited mosaic property
    pub fn property(self, name: &str, value: &str) -> Self {
        self.nested(|p| p.bytes(name.as_bytes()).bytes(value.as_bytes()))
    }

    /// Current payload length
    pub fn len(&self) -> usize {
        self.buff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buff.is_empty()
    }

    /// Finish building, returning the encoded payload
    pub fn build(self) -> Vec<u8> {
        self.buff
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encode_header() {
        let h = TxBuilder::header(
            TransactionType::Transfer,
            Version::V2,
            Network::Testnet,
            1_000_000,
        )
        .build();

        assert_eq!(h.len(), 60);
        assert_eq!(&h[..8], &[0x01, 0x01, 0x00, 0x00, 0x02, 0x00, 0x00, 0x98]);
        assert_eq!(&h[48..56], &1_000_000u64.to_le_bytes());
    }
}
