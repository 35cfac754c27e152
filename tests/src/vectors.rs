// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Canonical transaction vectors with expected summaries

use strum::{Display, EnumIter};

use ledger_nem_core::parser::{Network, TransactionType, Version};

use crate::builder::TxBuilder;

/// Transfer recipient
pub const RECIPIENT: &str = "TALICE5VF6J5FYMTCB7A3QG6OIRDRUXDWJGFVXNW";

/// Rental / creation fee sink
pub const SINK: &str = "TBMOSAICOD4F54EE5CDMR23CCBGOAM2XSJBR5OLC";

/// Remote harvesting account
pub const REMOTE: [u8; 32] = [0xab; 32];

/// Cosignatory accounts for aggregate modifications
pub const COSIGNER_ADD: [u8; 32] = [0x01; 32];
pub const COSIGNER_DEL: [u8; 32] = [0x02; 32];

/// Hash of a pending multisig transaction
pub const INNER_HASH: [u8; 32] = [0xcd; 32];

/// Multisig wrapped mosaic definition with levy, as produced by the
/// NEM SDK for a testnet multisig account
pub const MULTISIG_LEVY_MOSAIC_HEX: &str = concat!(
    "0410000001000098b466ae0a200000009f96df7e7a639b4034b8bee5b88ab1d640db66eb5a47afe018e320cb",
    "130c183df049020000000000c474ae0acb0100000140000001000098b466ae0a20000000180158d9feed1711",
    "fbfc7718ed144275311dcfd10a4480035d1856cdac7242abf049020000000000c474ae0a5701000020000000",
    "180158d9feed1711fbfc7718ed144275311dcfd10a4480035d1856cdac7242ab2900000008000000746573745f",
    "6e656d190000006d6f736169635f6372656174655f66726f6d5f6c65646765724100000054686973206d6f73",
    "61696320697320637265617465642062792061206c65646765722077616c6c65742066726f6d2061206d756c",
    "7469736967206163636f756e7404000000150000000c00000064697669736962696c69747901000000331900",
    "00000d000000696e697469616c537570706c790400000031303030190000000d000000737570706c794d7574",
    "61626c650400000074727565180000000c0000007472616e7366657261626c6504000000747275654a000000",
    "010000002800000054423749423644534a4b57425651454b3750443754574f3636454357354c593653495",
    "34d32434a4a0e000000030000006e656d0300000078656d05000000000000002800000054424d4f5341494",
    "34f443446353445453543444d523233434342474f414d3258534a4252354f4c438096980000000000",
);

/// Named test vectors
#[derive(Copy, Clone, PartialEq, Eq, Debug, Display, EnumIter)]
pub enum Vector {
    TransferV1,
    TransferV2Mosaics,
    ImportanceActivate,
    AggregateModificationV2,
    MultisigSignature,
    NamespaceRoot,
    NamespaceChild,
    MosaicDefinition,
    MosaicSupplyChange,
    MultisigTransfer,
    MultisigLevyMosaic,
}

impl Vector {
    /// Encode the vector payload
    pub fn encode(&self) -> Vec<u8> {
        use TransactionType::*;

        match self {
            Vector::TransferV1 => transfer_v1(),
            Vector::TransferV2Mosaics => {
                TxBuilder::header(Transfer, Version::V2, Network::Mainnet, 150_000)
                    .bytes(RECIPIENT.as_bytes())
                    .u64(1_000_000)
                    .message(None, &[])
                    .u32(2)
                    .asset("nem", "xem", 5_000_000)
                    .asset("test_nem", "coin", 42)
                    .build()
            }
            Vector::ImportanceActivate => {
                TxBuilder::header(ImportanceTransfer, Version::V1, Network::Testnet, 150_000)
                    .u32(1)
                    .bytes(&REMOTE)
                    .build()
            }
            Vector::AggregateModificationV2 => TxBuilder::header(
                MultisigAggregateModification,
                Version::V2,
                Network::Testnet,
                500_000,
            )
            .u32(2)
            .nested(|m| m.u32(1).bytes(&COSIGNER_ADD))
            .nested(|m| m.u32(2).bytes(&COSIGNER_DEL))
            .nested(|r| r.u32(1))
            .build(),
            Vector::MultisigSignature => {
                TxBuilder::header(MultisigSignature, Version::V1, Network::Testnet, 150_000)
                    .nested(|h| h.bytes(&INNER_HASH))
                    .bytes(SINK.as_bytes())
                    .build()
            }
            Vector::NamespaceRoot => {
                TxBuilder::header(ProvisionNamespace, Version::V1, Network::Testnet, 150_000)
                    .bytes(SINK.as_bytes())
                    .u64(100_000_000)
                    .bytes(b"ledger")
                    .absent()
                    .build()
            }
            Vector::NamespaceChild => {
                TxBuilder::header(ProvisionNamespace, Version::V1, Network::Testnet, 150_000)
                    .bytes(SINK.as_bytes())
                    .u64(10_000_000)
                    .bytes(b"wallet")
                    .bytes(b"ledger")
                    .build()
            }
            Vector::MosaicDefinition => TxBuilder::header(
                MosaicDefinitionCreation,
                Version::V1,
                Network::Testnet,
                150_000,
            )
            .nested(|d| {
                d.bytes(&[0x22; 32])
                    .asset_id("test_nem", "coin")
                    .bytes(b"a coin")
                    .u32(4)
                    .property("divisibility", "2")
                    .property("initialSupply", "100")
                    .property("supplyMutable", "false")
                    .property("transferable", "true")
                    .u32(0)
            })
            .bytes(SINK.as_bytes())
            .u64(10_000_000)
            .build(),
            Vector::MosaicSupplyChange => {
                TxBuilder::header(MosaicSupplyChange, Version::V1, Network::Mainnet, 150_000)
                    .bytes(b"test_nem")
                    .bytes(b"coin")
                    .u32(1)
                    .u64(5000)
                    .build()
            }
            Vector::MultisigTransfer => {
                TxBuilder::header(Multisig, Version::V1, Network::Testnet, 150_000)
                    .bytes(&transfer_v1())
                    .build()
            }
            Vector::MultisigLevyMosaic => {
                hex::decode(MULTISIG_LEVY_MOSAIC_HEX).expect("invalid vector hex")
            }
        }
    }

    /// Expected rendered summary (title, text) in display order
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        match self {
            Vector::TransferV1 => transfer_v1_summary(),
            Vector::TransferV2Mosaics => vec![
                ("Confirm", "Transfer TX".into()),
                ("Recipient", RECIPIENT.into()),
                ("Message", "<empty msg>".into()),
                ("Fee", "0.15 xem".into()),
                ("Mosaics", "Found 2 mosaics".into()),
                ("Amount", "5 xem".into()),
                ("Raw units", "42 coin".into()),
            ],
            Vector::ImportanceActivate => vec![
                ("Confirm", "Importance TX".into()),
                ("Mode", "Activate".into()),
                ("Remote account", hex::encode(REMOTE)),
                ("Fee", "0.15 xem".into()),
            ],
            Vector::AggregateModificationV2 => vec![
                ("Confirm", "Convert to Multisig".into()),
                ("Add cosignatory", hex::encode(COSIGNER_ADD)),
                ("Delete cosign.", hex::encode(COSIGNER_DEL)),
                ("Min signatures", "Add 1 address(es)".into()),
                ("Fee", "0.5 xem".into()),
            ],
            Vector::MultisigSignature => vec![
                ("Confirm", "Multisig signature".into()),
                ("Cosign tx for", SINK.into()),
                ("SHA hash", hex::encode(INNER_HASH)),
                ("Multisig fee", "0.15 xem".into()),
            ],
            Vector::NamespaceRoot => vec![
                ("Confirm", "Namespace TX".into()),
                ("Sink Address", SINK.into()),
                ("Rental Fee", "100 xem".into()),
                ("Fee", "0.15 xem".into()),
                ("Namespace", "ledger".into()),
                ("Parent Name", "<New namespace>".into()),
            ],
            Vector::NamespaceChild => vec![
                ("Confirm", "Namespace TX".into()),
                ("Sink Address", SINK.into()),
                ("Rental Fee", "10 xem".into()),
                ("Fee", "0.15 xem".into()),
                ("Namespace", "wallet".into()),
                ("Parent Name", "ledger".into()),
            ],
            Vector::MosaicDefinition => vec![
                ("Confirm", "Create Mosaic".into()),
                ("Namespace", "test_nem".into()),
                ("Mosaic Name", "coin".into()),
                ("Fee", "0.15 xem".into()),
                ("Rental Fee", "10 xem".into()),
                ("Description", "a coin".into()),
                ("Initial Supply", "100".into()),
                ("Divisibility", "2".into()),
                ("Mutable Supply", "false".into()),
                ("Transferable", "true".into()),
                ("Requires Levy", "No".into()),
            ],
            Vector::MosaicSupplyChange => vec![
                ("Confirm", "Mosaic Supply".into()),
                ("Namespace", "test_nem".into()),
                ("Mosaic Name", "coin".into()),
                ("Change", "Increase".into()),
                ("Quantity", "5000".into()),
                ("Fee", "0.15 xem".into()),
            ],
            Vector::MultisigTransfer => {
                let mut s = transfer_v1_summary();
                s.push(("Multisig fee", "0.15 xem".into()));
                s
            }
            Vector::MultisigLevyMosaic => vec![
                ("Confirm", "Create Mosaic".into()),
                ("Namespace", "test_nem".into()),
                ("Mosaic Name", "mosaic_create_from_ledger".into()),
                ("Fee", "0.15 xem".into()),
                ("Rental Fee", "10 xem".into()),
                (
                    "Description",
                    "This mosaic is created by a ledger wallet from a multisig acco..".into(),
                ),
                ("Initial Supply", "1000".into()),
                ("Divisibility", "3".into()),
                ("Mutable Supply", "true".into()),
                ("Transferable", "true".into()),
                ("Requires Levy", "Yes".into()),
                ("Multisig fee", "0.15 xem".into()),
            ],
        }
    }
}

/// Version 1 testnet transfer with a plain message
fn transfer_v1() -> Vec<u8> {
    TxBuilder::header(
        TransactionType::Transfer,
        Version::V1,
        Network::Testnet,
        100_000,
    )
    .bytes(RECIPIENT.as_bytes())
    .u64(1_234_560_000)
    .message(Some(1), b"hello")
    .build()
}

fn transfer_v1_summary() -> Vec<(&'static str, String)> {
    vec![
        ("Confirm", "Transfer TX".into()),
        ("Recipient", RECIPIENT.into()),
        ("Message", "hello".into()),
        ("Fee", "0.1 xem".into()),
        ("Amount", "1234.56 xem".into()),
    ]
}
