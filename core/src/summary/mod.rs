// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Transaction summary model, populated from a decoded [Transaction] and
//! rendered item by item for user confirmation.
//!
//! A summary holds one primary item (the transaction kind) followed by up
//! to `N` general items in claim order. Index `0` renders the primary item,
//! `1..=N` the general items.

use heapless::String;

use crate::{
    consts::{NUM_GENERAL_ITEMS, TEXT_LEN, TITLE_LEN},
    error::{Error, ErrorKind},
    parser::Transaction,
};

mod item;
pub use item::{ItemKind, ItemValue, SummaryItem};

mod printer;

/// Rendered summary item
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Rendered {
    pub title: String<TITLE_LEN>,
    pub text: String<TEXT_LEN>,
}

/// Fixed capacity transaction summary
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TransactionSummary<'a, const N: usize = NUM_GENERAL_ITEMS> {
    primary: SummaryItem<'a>,
    general: [SummaryItem<'a>; N],
}

impl<'a, const N: usize> Default for TransactionSummary<'a, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> TransactionSummary<'a, N> {
    /// Create a new (empty) summary
    pub const fn new() -> Self {
        Self {
            primary: SummaryItem::EMPTY,
            general: [SummaryItem::EMPTY; N],
        }
    }

    /// Clear all summary items
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Claim the primary item, failing if it is already set
    pub fn claim_primary(&mut self) -> Result<&mut SummaryItem<'a>, Error> {
        match self.primary.is_unused() {
            true => Ok(&mut self.primary),
            false => Err(ErrorKind::SlotInUse.into()),
        }
    }

    /// Claim the first unused general item
    pub fn claim_general(&mut self) -> Result<&mut SummaryItem<'a>, Error> {
        match self.general.iter_mut().find(|i| i.is_unused()) {
            Some(i) => Ok(i),
            None => {
                #[cfg(feature = "log")]
                log::error!("summary exhausted ({} general items)", N);

                Err(ErrorKind::CapacityExceeded.into())
            }
        }
    }

    /// Number of claimed items, including the primary item
    pub fn item_count(&self) -> usize {
        let primary = usize::from(!self.primary.is_unused());
        primary + self.general.iter().filter(|i| !i.is_unused()).count()
    }

    /// Fetch the item at the provided display index
    pub fn item(&self, index: usize) -> Option<&SummaryItem<'a>> {
        let i = match index {
            0 => &self.primary,
            _ => self.general.get(index - 1)?,
        };

        match i.is_unused() {
            true => None,
            false => Some(i),
        }
    }

    /// Render the item at the provided display index
    pub fn render(&self, index: usize) -> Result<Rendered, Error> {
        let item = self.item(index).ok_or(ErrorKind::InvalidIndex)?;

        let mut title = String::new();
        title
            .push_str(item.title)
            .map_err(|_| ErrorKind::CapacityExceeded)?;

        let mut buff = [0u8; TEXT_LEN];
        let s = item.render_value(&mut buff)?;

        let mut text = String::new();
        text.push_str(s).map_err(|_| ErrorKind::CapacityExceeded)?;

        Ok(Rendered { title, text })
    }

    /// Populate the summary from a decoded transaction.
    ///
    /// The summary is reset before loading and cleared on failure.
    pub fn load(&mut self, tx: &Transaction<'a>) -> Result<(), Error> {
        self.reset();

        if let Err(e) = printer::summarize(self, tx) {
            #[cfg(feature = "log")]
            log::error!("summary failed: {}", e);

            self.reset();
            return Err(e);
        }

        Ok(())
    }
}

/// Decode a transaction and populate the provided summary.
///
/// On failure the summary is left empty so no partial state is exposed.
pub fn parse_transaction<'a, const N: usize>(
    buff: &'a [u8],
    summary: &mut TransactionSummary<'a, N>,
) -> Result<Transaction<'a>, Error> {
    summary.reset();

    let tx = Transaction::decode(buff).map_err(|e| {
        #[cfg(feature = "log")]
        log::error!("decode failed: {}", e);

        e
    })?;

    summary.load(&tx)?;

    Ok(tx)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn claim_and_render() {
        let address = [b'T'; 40];
        let mut s = TransactionSummary::<'_, 2>::new();
        assert_eq!(s.item_count(), 0);

        s.claim_primary().unwrap().set_string("Confirm", "Transfer TX");
        assert_eq!(
            s.claim_primary().map(|_| ()).map_err(|e| e.kind),
            Err(ErrorKind::SlotInUse)
        );

        s.claim_general().unwrap().set_address("Recipient", &address);
        s.claim_general().unwrap().set_amount("Fee", 150_000);
        assert_eq!(
            s.claim_general().map(|_| ()).map_err(|e| e.kind),
            Err(ErrorKind::CapacityExceeded)
        );
        assert_eq!(s.item_count(), 3);

        let r = s.render(0).unwrap();
        assert_eq!(r.title.as_str(), "Confirm");
        assert_eq!(r.text.as_str(), "Transfer TX");

        let r = s.render(1).unwrap();
        assert_eq!(r.title.as_str(), "Recipient");
        assert_eq!(r.text.as_str(), "T".repeat(40));
        assert_eq!(s.item(1).map(|i| i.kind()), Some(ItemKind::Address));

        let r = s.render(2).unwrap();
        assert_eq!(r.text.as_str(), "0.15 xem");

        assert_eq!(s.render(3).map_err(|e| e.kind), Err(ErrorKind::InvalidIndex));

        s.reset();
        assert_eq!(s.item_count(), 0);
        assert_eq!(s.render(0).map_err(|e| e.kind), Err(ErrorKind::InvalidIndex));
    }
}
