use aliasguard_common::address::GmailAddress;
use aliasguard_common::config::Config;
use aliasguard_common::method::AliasMethod;
use aliasguard_common::{success, warn};
use aliasguard_core::generator::{AliasGenerator, AliasRequest, MAX_BULK, MIN_BULK};
use colored::*;

use crate::commands::open_history;
use crate::mprint;
use crate::terminal::print;

pub fn generate(
    address: &str,
    method: AliasMethod,
    tag: &str,
    count: usize,
    save: bool,
    cfg: &Config,
) -> anyhow::Result<()> {
    let address: GmailAddress = address.parse()?;
    let request = AliasRequest {
        method,
        tag: tag.to_string(),
        count,
    };

    let aliases: Vec<String> = AliasGenerator::new().generate(&address, &request)?;

    print_aliases(&aliases, method, cfg);
    report_shortfall(&aliases, method, count, cfg);

    if should_record(method, save) {
        let mut history = open_history(cfg)?;
        let inserted = history.save_all(&aliases)?;
        if cfg.quiet < 2 {
            success!("{inserted} new aliases saved to history ({} total)", history.len());
        }
    }

    Ok(())
}

/// A plus alias goes straight into history; bulk results wait for `--save`.
fn should_record(method: AliasMethod, save: bool) -> bool {
    save || method.bulk().is_none()
}

fn print_aliases(aliases: &[String], method: AliasMethod, cfg: &Config) {
    if cfg.quiet >= 2 {
        for alias in aliases {
            mprint!(alias);
        }
        return;
    }

    print::header(&format!("{method} aliases"), cfg.quiet);
    for (idx, alias) in aliases.iter().enumerate() {
        print::tree_head(idx, alias);
    }
}

fn report_shortfall(aliases: &[String], method: AliasMethod, count: usize, cfg: &Config) {
    if method.bulk().is_none() || cfg.quiet >= 2 {
        return;
    }
    let requested = count.clamp(MIN_BULK, MAX_BULK);
    if aliases.len() < requested {
        warn!(
            "Only {} of {requested} unique aliases could be generated",
            aliases.len()
        );
    } else {
        success!("{} unique aliases generated", aliases.len().to_string().green().bold());
    }
}
