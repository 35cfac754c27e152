// Copyright (c) 2022-2023 The MobileCoin Foundation

use strum::{Display, EnumDiscriminants};

use crate::{
    consts::TEXT_LEN,
    error::{Error, ErrorKind},
    helpers::{
        fmt_address, fmt_asset, fmt_boolean, fmt_hex, fmt_message, fmt_num_assets, fmt_number,
        fmt_relative_change, fmt_text, fmt_xem, is_currency,
    },
    parser::{Account, Address, Asset, Hash, Message},
};

/// Typed summary value, borrowing from the decoded input
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, EnumDiscriminants)]
#[strum_discriminants(name(ItemKind), derive(Display))]
pub enum ItemValue<'a> {
    /// Unused slot
    #[default]
    None,
    Address(Address<'a>),
    /// Public key, rendered as hex
    Account(Account<'a>),
    Message(Message<'a>),
    /// Amount in micro-xem
    Amount(u64),
    String(&'static str),
    SizedString(&'a [u8]),
    Boolean(bool),
    NumAssets(usize),
    Asset(Asset<'a>),
    Hash(Hash<'a>),
    Number(u64),
    RelativeChange(Option<i32>),
}

/// Summary item, a display title with a typed value
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct SummaryItem<'a> {
    pub title: &'static str,
    pub value: ItemValue<'a>,
}

impl<'a> SummaryItem<'a> {
    /// Unused summary item
    pub const EMPTY: Self = Self {
        title: "",
        value: ItemValue::None,
    };

    /// Fetch the kind of the item value
    pub fn kind(&self) -> ItemKind {
        ItemKind::from(&self.value)
    }

    /// Returns true if the item has not been set
    pub fn is_unused(&self) -> bool {
        matches!(self.value, ItemValue::None)
    }

    fn set(&mut self, title: &'static str, value: ItemValue<'a>) {
        *self = Self { title, value };
    }

    pub fn set_address(&mut self, title: &'static str, address: Address<'a>) {
        self.set(title, ItemValue::Address(address))
    }

    pub fn set_account(&mut self, title: &'static str, account: Account<'a>) {
        self.set(title, ItemValue::Account(account))
    }

    pub fn set_message(&mut self, title: &'static str, message: Message<'a>) {
        self.set(title, ItemValue::Message(message))
    }

    pub fn set_amount(&mut self, title: &'static str, amount: u64) {
        self.set(title, ItemValue::Amount(amount))
    }

    pub fn set_string(&mut self, title: &'static str, value: &'static str) {
        self.set(title, ItemValue::String(value))
    }

    pub fn set_sized_string(&mut self, title: &'static str, value: &'a [u8]) {
        self.set(title, ItemValue::SizedString(value))
    }

    pub fn set_boolean(&mut self, title: &'static str, value: bool) {
        self.set(title, ItemValue::Boolean(value))
    }

    pub fn set_num_assets(&mut self, title: &'static str, count: usize) {
        self.set(title, ItemValue::NumAssets(count))
    }

    /// Set a mosaic attachment, titled `Amount` for native currency and
    /// `Raw units` otherwise
    pub fn set_asset(&mut self, asset: Asset<'a>) {
        let title = match is_currency(&asset.id) {
            true => "Amount",
            false => "Raw units",
        };
        self.set(title, ItemValue::Asset(asset))
    }

    pub fn set_hash(&mut self, title: &'static str, hash: Hash<'a>) {
        self.set(title, ItemValue::Hash(hash))
    }

    pub fn set_number(&mut self, title: &'static str, value: u64) {
        self.set(title, ItemValue::Number(value))
    }

    pub fn set_relative_change(&mut self, title: &'static str, change: Option<i32>) {
        self.set(title, ItemValue::RelativeChange(change))
    }

    /// Render the item value into the provided buffer
    pub fn render_value<'b>(&self, buff: &'b mut [u8; TEXT_LEN]) -> Result<&'b str, Error> {
        let buff = &mut buff[..];

        match &self.value {
            ItemValue::None => Err(ErrorKind::InvalidIndex.into()),
            ItemValue::Address(a) => fmt_address(a, buff),
            ItemValue::Account(a) => fmt_hex(&a[..], buff),
            ItemValue::Message(m) => fmt_message(m, buff),
            ItemValue::Amount(v) => fmt_xem(*v, buff),
            ItemValue::String(s) => fmt_text(s.as_bytes(), buff),
            ItemValue::SizedString(s) => fmt_text(s, buff),
            ItemValue::Boolean(b) => fmt_boolean(*b, buff),
            ItemValue::NumAssets(n) => fmt_num_assets(*n, buff),
            ItemValue::Asset(a) => fmt_asset(a, buff),
            ItemValue::Hash(h) => fmt_hex(&h[..], buff),
            ItemValue::Number(v) => fmt_number(*v, buff),
            ItemValue::RelativeChange(c) => fmt_relative_change(*c, buff),
        }
    }
}
