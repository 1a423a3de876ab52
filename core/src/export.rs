//! CSV export of the alias history.
//!
//! The file starts with an `Alias,Date Created` header followed by one fully
//! quoted row per entry. An empty history has nothing to export: no text is
//! produced and no file is written.

use std::fs;
use std::path::Path;

use aliasguard_common::history::HistoryEntry;
use anyhow::Context;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug;

pub const CSV_HEADER: &str = "Alias,Date Created";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders `entries` as CSV text, or `None` when there is nothing to export.
pub fn export_csv(entries: &[HistoryEntry]) -> anyhow::Result<Option<String>> {
    if entries.is_empty() {
        return Ok(None);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for entry in entries {
        let created = entry.created_at.format(DATE_FORMAT).to_string();
        writer.write_record([entry.alias.as_str(), created.as_str()])?;
    }

    let rows = writer.into_inner().context("failed to flush CSV rows")?;
    let rows = String::from_utf8(rows).context("CSV rows are not UTF-8")?;

    Ok(Some(format!("{CSV_HEADER}\n{rows}")))
}

/// Writes the CSV export of `entries` to `path`.
///
/// Returns `false`, leaving the filesystem untouched, for an empty history.
pub fn write_csv(entries: &[HistoryEntry], path: &Path) -> anyhow::Result<bool> {
    let Some(csv) = export_csv(entries)? else {
        return Ok(false);
    };
    fs::write(path, csv).with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), rows = entries.len(), "history exported");
    Ok(true)
}
