//! Application context for the Tally CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use tracing::debug;

use tally_core::Ledger;

use crate::cli::Cli;
use crate::config::{read_config, TallyConfig};
use crate::helpers::OutputFormat;
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_ledger_path};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<TallyConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    ///
    /// A missing config file yields the defaults; a malformed one is an error.
    pub fn config(&self) -> anyhow::Result<&TallyConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                debug!(path = %path.display(), "loading config");
                read_config(&path)
            } else {
                Ok(TallyConfig::default())
            }
        })
    }

    /// Currency suffix for report lines, if configured.
    pub fn currency(&self) -> anyhow::Result<Option<&str>> {
        Ok(self.config()?.display.currency.as_deref())
    }

    /// Resolve the ledger location for this invocation.
    pub fn ledger_path(&self) -> anyhow::Result<PathBuf> {
        resolve_ledger_path(self.cli, self.config()?)
    }

    /// Open the ledger at the resolved location.
    pub fn open_ledger(&self) -> anyhow::Result<Ledger> {
        let path = self.ledger_path()?;
        debug!(path = %path.display(), "opening ledger");
        Ok(Ledger::open(path)?)
    }

    /// Build a UI context for a command's output flags.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color)
    }
}
