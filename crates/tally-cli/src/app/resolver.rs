//! Path resolution for config and ledger files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_ledger_path, TallyConfig};

/// Resolve the config file path, checking TALLY_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("TALLY_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the ledger file path.
///
/// Order: `--file` / `TALLY_FILE`, then `[ledger] path` from the config,
/// then the data-directory default.
pub fn resolve_ledger_path(cli: &Cli, config: &TallyConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.file.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.ledger.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_ledger_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flag_wins_over_config() {
        let cli = Cli::try_parse_from(["tally", "--file", "flag.json", "balance"]).unwrap();
        let mut config = TallyConfig::default();
        config.ledger.path = Some("config.json".to_string());

        let path = resolve_ledger_path(&cli, &config).unwrap();

        assert_eq!(path, PathBuf::from("flag.json"));
    }

    #[test]
    fn test_config_path_used_without_flag() {
        let cli = Cli {
            file: None,
            command: None,
            quiet: false,
            no_color: false,
        };
        let mut config = TallyConfig::default();
        config.ledger.path = Some("/srv/books/ledger.json".to_string());

        let path = resolve_ledger_path(&cli, &config).unwrap();

        assert_eq!(path, PathBuf::from("/srv/books/ledger.json"));
    }
}
