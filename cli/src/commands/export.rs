use std::path::Path;

use aliasguard_common::config::Config;
use aliasguard_common::{success, warn};
use aliasguard_core::export;

use crate::commands::open_history;

pub fn export(output: &Path, cfg: &Config) -> anyhow::Result<()> {
    let history = open_history(cfg)?;

    if export::write_csv(history.entries(), output)? {
        if cfg.quiet < 2 {
            success!("Exported {} aliases to {}", history.len(), output.display());
        }
    } else {
        warn!("History is empty, nothing to export");
    }
    Ok(())
}
