use aliasguard_common::address;
use aliasguard_common::config::Config;
use aliasguard_common::error::AliasError;
use aliasguard_common::{success, warn};
use colored::*;

use crate::commands::open_history;
use crate::mprint;
use crate::terminal::{colors, format, print};

pub fn list(cfg: &Config) -> anyhow::Result<()> {
    let history = open_history(cfg)?;

    if history.is_empty() {
        if cfg.quiet < 2 {
            print::header("history is empty", cfg.quiet);
            print::no_results();
        }
        return Ok(());
    }

    if cfg.quiet >= 2 {
        for entry in history.entries() {
            mprint!(&entry.alias);
        }
        return Ok(());
    }

    print::header("alias history", cfg.quiet);
    for (idx, entry) in history.entries().iter().enumerate() {
        print::tree_head(idx, &entry.alias);
        print::as_tree_one_level(format::entry_details(entry));
        if idx + 1 != history.len() {
            mprint!();
        }
    }

    let total: ColoredString = history.len().to_string().color(colors::ACCENT).bold();
    print::fat_separator(cfg.quiet);
    print::centerln(&format!("{total} saved aliases"), cfg.quiet);
    Ok(())
}

pub fn save(alias: &str, cfg: &Config) -> anyhow::Result<()> {
    if !address::validate(alias) {
        return Err(AliasError::InvalidAddress(alias.to_string()).into());
    }

    let mut history = open_history(cfg)?;
    if history.save(alias)? {
        success!("Saved {} to history", alias.color(colors::ALIAS));
    } else {
        warn!("{alias} is already in history");
    }
    Ok(())
}

pub fn remove(alias: &str, cfg: &Config) -> anyhow::Result<()> {
    let mut history = open_history(cfg)?;
    if history.remove(alias)? {
        success!("Removed {} from history", alias.color(colors::ALIAS));
    } else {
        warn!("{alias} is not in history");
    }
    Ok(())
}

pub fn clear(cfg: &Config) -> anyhow::Result<()> {
    let mut history = open_history(cfg)?;
    match history.clear()? {
        0 => warn!("History is already empty"),
        removed => success!("Cleared {removed} aliases from history"),
    }
    Ok(())
}
