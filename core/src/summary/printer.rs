// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Per-transaction summary population

use crate::{
    error::Error,
    parser::{
        AggregateModification, ImportanceTransfer, InnerBody, MosaicDefinitionCreation,
        MosaicSupplyChange, MultisigSignature, ProvisionNamespace, Transaction, TransactionBody,
        TransactionHeader, TransactionType, Transfer, Version,
    },
};

use super::TransactionSummary;

/// Populate a summary for a decoded transaction
pub(super) fn summarize<'a, const N: usize>(
    s: &mut TransactionSummary<'a, N>,
    tx: &Transaction<'a>,
) -> Result<(), Error> {
    let h = &tx.header;

    match &tx.body {
        TransactionBody::Transfer(t) => transfer(s, h, t),
        TransactionBody::ImportanceTransfer(t) => importance(s, h, t),
        TransactionBody::AggregateModification(t) => aggregate(s, h, t),
        TransactionBody::MultisigSignature(t) => signature(s, h, t),
        TransactionBody::ProvisionNamespace(t) => namespace(s, h, t),
        TransactionBody::MosaicDefinitionCreation(t) => mosaic_definition(s, h, t),
        TransactionBody::MosaicSupplyChange(t) => supply_change(s, h, t),
        TransactionBody::Multisig(inner) => {
            let ih = &inner.header;

            match &inner.body {
                InnerBody::Transfer(t) => transfer(s, ih, t)?,
                InnerBody::ImportanceTransfer(t) => importance(s, ih, t)?,
                InnerBody::AggregateModification(t) => aggregate(s, ih, t)?,
                InnerBody::ProvisionNamespace(t) => namespace(s, ih, t)?,
                InnerBody::MosaicDefinitionCreation(t) => mosaic_definition(s, ih, t)?,
                InnerBody::MosaicSupplyChange(t) => supply_change(s, ih, t)?,
            }

            s.claim_general()?.set_amount("Multisig fee", h.fee);

            Ok(())
        }
    }
}

fn confirm<const N: usize>(
    s: &mut TransactionSummary<'_, N>,
    kind: TransactionType,
) -> Result<(), Error> {
    s.claim_primary()?.set_string("Confirm", kind.into());
    Ok(())
}

fn transfer<'a, const N: usize>(
    s: &mut TransactionSummary<'a, N>,
    h: &TransactionHeader<'a>,
    t: &Transfer<'a>,
) -> Result<(), Error> {
    confirm(s, h.kind)?;

    s.claim_general()?.set_address("Recipient", t.recipient);
    s.claim_general()?.set_message("Message", t.message);
    s.claim_general()?.set_amount("Fee", h.fee);

    if t.assets.is_empty() {
        s.claim_general()?.set_amount("Amount", t.amount);
        return Ok(());
    }

    s.claim_general()?.set_num_assets("Mosaics", t.assets.len());
    for a in t.assets.iter() {
        s.claim_general()?.set_asset(*a);
    }

    Ok(())
}

fn importance<'a, const N: usize>(
    s: &mut TransactionSummary<'a, N>,
    h: &TransactionHeader<'a>,
    t: &ImportanceTransfer<'a>,
) -> Result<(), Error> {
    confirm(s, h.kind)?;

    s.claim_general()?.set_string("Mode", t.mode.into());
    s.claim_general()?.set_account("Remote account", t.remote);
    s.claim_general()?.set_amount("Fee", h.fee);

    Ok(())
}

fn aggregate<'a, const N: usize>(
    s: &mut TransactionSummary<'a, N>,
    h: &TransactionHeader<'a>,
    t: &AggregateModification<'a>,
) -> Result<(), Error> {
    confirm(s, h.kind)?;

    for m in t.modifications.iter() {
        s.claim_general()?.set_account(m.action.into(), m.account);
    }

    if h.version == Version::V2 {
        s.claim_general()?
            .set_relative_change("Min signatures", t.relative_change);
    }

    s.claim_general()?.set_amount("Fee", h.fee);

    Ok(())
}

fn signature<'a, const N: usize>(
    s: &mut TransactionSummary<'a, N>,
    h: &TransactionHeader<'a>,
    t: &MultisigSignature<'a>,
) -> Result<(), Error> {
    confirm(s, h.kind)?;

    s.claim_general()?.set_address("Cosign tx for", t.address);
    s.claim_general()?.set_hash("SHA hash", t.hash);
    s.claim_general()?.set_amount("Multisig fee", h.fee);

    Ok(())
}

fn namespace<'a, const N: usize>(
    s: &mut TransactionSummary<'a, N>,
    h: &TransactionHeader<'a>,
    t: &ProvisionNamespace<'a>,
) -> Result<(), Error> {
    confirm(s, h.kind)?;

    s.claim_general()?.set_address("Sink Address", t.sink);
    s.claim_general()?.set_amount("Rental Fee", t.rental_fee);
    s.claim_general()?.set_amount("Fee", h.fee);
    s.claim_general()?.set_sized_string("Namespace", t.new_part);

    let i = s.claim_general()?;
    match t.parent() {
        Some(p) => i.set_sized_string("Parent Name", p),
        None => i.set_string("Parent Name", "<New namespace>"),
    }

    Ok(())
}

fn mosaic_definition<'a, const N: usize>(
    s: &mut TransactionSummary<'a, N>,
    h: &TransactionHeader<'a>,
    t: &MosaicDefinitionCreation<'a>,
) -> Result<(), Error> {
    let d = &t.definition;

    confirm(s, h.kind)?;

    s.claim_general()?.set_sized_string("Namespace", d.id.namespace);
    s.claim_general()?.set_sized_string("Mosaic Name", d.id.name);
    s.claim_general()?.set_amount("Fee", h.fee);
    s.claim_general()?.set_amount("Rental Fee", t.creation_fee);

    s.claim_general()?.set_sized_string("Description", d.description);
    s.claim_general()?.set_sized_string("Initial Supply", d.initial_supply());
    s.claim_general()?.set_sized_string("Divisibility", d.divisibility());
    s.claim_general()?.set_sized_string("Mutable Supply", d.supply_mutable());
    s.claim_general()?.set_sized_string("Transferable", d.transferable());
    s.claim_general()?.set_boolean("Requires Levy", d.has_levy);

    Ok(())
}

fn supply_change<'a, const N: usize>(
    s: &mut TransactionSummary<'a, N>,
    h: &TransactionHeader<'a>,
    t: &MosaicSupplyChange<'a>,
) -> Result<(), Error> {
    confirm(s, h.kind)?;

    s.claim_general()?.set_sized_string("Namespace", t.id.namespace);
    s.claim_general()?.set_sized_string("Mosaic Name", t.id.name);
    s.claim_general()?.set_string("Change", t.supply_type.into());
    s.claim_general()?.set_number("Quantity", t.delta);
    s.claim_general()?.set_amount("Fee", h.fee);

    Ok(())
}
