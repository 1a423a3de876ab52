use aliasguard_common::address::validate as is_valid;
use aliasguard_common::config::Config;
use aliasguard_common::error::AliasError;
use aliasguard_common::success;

use crate::mprint;

pub fn validate(address: &str, cfg: &Config) -> anyhow::Result<()> {
    if !is_valid(address) {
        return Err(AliasError::InvalidAddress(address.to_string()).into());
    }

    match cfg.quiet {
        0 | 1 => success!("{address} is a valid Gmail address"),
        _ => mprint!(address),
    }
    Ok(())
}
