// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Common test vectors and helpers for NEM transaction parsing.
//!
//! Shared between the core integration tests and the fuzz corpus.

use log::debug;

use ledger_nem_core::{parse_transaction, TransactionSummary};

pub mod builder;
pub use builder::TxBuilder;

pub mod vectors;
pub use vectors::Vector;

/// Render every summary item as (title, text) pairs
pub fn render_all(summary: &TransactionSummary) -> anyhow::Result<Vec<(String, String)>> {
    let mut items = Vec::new();

    for i in 0..summary.item_count() {
        let r = summary
            .render(i)
            .map_err(|e| anyhow::anyhow!("render {} failed: {}", i, e))?;

        debug!("{:2}: {:16} {}", i, r.title.as_str(), r.text.as_str());

        items.push((r.title.as_str().to_string(), r.text.as_str().to_string()));
    }

    Ok(items)
}

/// Decode a payload and check the rendered summary matches expectations
pub fn check_summary(buff: &[u8], expected: &[(&str, String)]) -> anyhow::Result<()> {
    let mut summary: TransactionSummary = TransactionSummary::new();

    parse_transaction(buff, &mut summary)
        .map_err(|e| anyhow::anyhow!("parse failed: {}", e))?;

    let items = render_all(&summary)?;

    assert_eq!(items.len(), expected.len(), "item count mismatch");
    for (i, ((title, text), (t, v))) in items.iter().zip(expected.iter()).enumerate() {
        assert_eq!(title.as_str(), *t, "title mismatch for item {i}");
        assert_eq!(text, v, "text mismatch for item {i} ({t})");
    }

    Ok(())
}
