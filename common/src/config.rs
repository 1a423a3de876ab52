use std::path::PathBuf;

/// Name of the directory AliasGuard keeps its data in.
pub const APP_DIR: &str = "aliasguard";

/// Where the history store lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Storage {
    /// Kept in memory and dropped on exit.
    Ephemeral,
    /// Persisted under this directory.
    Directory(PathBuf),
}

pub struct Config {
    /// Suppresses decorative output. `1` hides headers, `2` prints bare aliases only.
    pub quiet: u8,
    /// Hides the startup banner.
    pub no_banner: bool,
    /// Keeps the history in memory for this run only.
    pub ephemeral: bool,
    /// Directory given on the command line or through the environment.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Picks the history storage for this run.
    ///
    /// `ephemeral` wins, then an explicit directory, then the platform's local
    /// data directory. Failing all three is an error rather than a silent
    /// fallback to memory.
    pub fn storage(&self) -> anyhow::Result<Storage> {
        choose_storage(
            self.ephemeral,
            self.data_dir.clone(),
            dirs::data_local_dir().map(|dir| dir.join(APP_DIR)),
        )
    }
}

fn choose_storage(
    ephemeral: bool,
    explicit: Option<PathBuf>,
    platform_default: Option<PathBuf>,
) -> anyhow::Result<Storage> {
    if ephemeral {
        return Ok(Storage::Ephemeral);
    }
    match explicit.or(platform_default) {
        Some(dir) => Ok(Storage::Directory(dir)),
        None => anyhow::bail!(
            "no data directory found for the history; pass --data-dir or set ALIASGUARD_DATA_DIR"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ephemeral_wins() {
        let explicit = Some(PathBuf::from("/tmp/aliasguard-test"));
        assert_eq!(choose_storage(true, explicit, None).unwrap(), Storage::Ephemeral);
        assert_eq!(choose_storage(true, None, None).unwrap(), Storage::Ephemeral);
    }

    #[test]
    fn test_explicit_data_dir_beats_platform_default() {
        let explicit = PathBuf::from("/tmp/aliasguard-test");
        let platform = PathBuf::from("/home/jane/.local/share/aliasguard");
        assert_eq!(
            choose_storage(false, Some(explicit.clone()), Some(platform.clone())).unwrap(),
            Storage::Directory(explicit)
        );
        assert_eq!(
            choose_storage(false, None, Some(platform.clone())).unwrap(),
            Storage::Directory(platform)
        );
    }

    #[test]
    fn test_missing_data_dir_is_an_error() {
        let err = choose_storage(false, None, None).unwrap_err();
        assert!(err.to_string().contains("--data-dir"));
    }

    #[test]
    fn test_platform_default_ends_with_app_dir() {
        let cfg = Config {
            quiet: 0,
            no_banner: true,
            ephemeral: false,
            data_dir: None,
        };
        if let Ok(Storage::Directory(dir)) = cfg.storage() {
            assert!(dir.ends_with(APP_DIR));
        }
    }
}
