use aliasguard_common::history::HistoryEntry;
use chrono::{DateTime, Local};
use colored::*;

use crate::terminal::colors;

type Detail = (String, ColoredString);

/// Renders the tree lines shown under a history entry.
pub fn entry_details(entry: &HistoryEntry) -> Vec<Detail> {
    let local: DateTime<Local> = entry.created_at.with_timezone(&Local);
    let created = local
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
        .color(colors::TIMESTAMP);

    let mut details: Vec<Detail> = vec![("Created".to_string(), created)];
    if let Some(kind) = alias_kind(&entry.alias) {
        details.push(("Kind".to_string(), kind.normal()));
    }
    details
}

/// Guesses which method produced `alias` from its shape.
fn alias_kind(alias: &str) -> Option<&'static str> {
    let (local, _) = alias.split_once('@')?;
    if local.contains('+') {
        Some("plus tag")
    } else if local.contains('.') {
        Some("dotted")
    } else {
        None
    }
}
