//! Output mode routing logic.

use crate::helpers::OutputFormat;

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Aligned plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Bordered tables and colors (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// `--json` wins over everything. `--format plain` and `TERM=dumb` force
    /// plain. Otherwise pretty on a TTY, plain elsewhere; `--format table`
    /// cannot force borders onto a pipe.
    pub fn resolve(
        json_flag: bool,
        format: Option<OutputFormat>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        match (json_flag, format) {
            (true, _) => Self::Json,
            (false, Some(OutputFormat::Plain)) => Self::Plain,
            _ if term_is_dumb || !is_tty => Self::Plain,
            _ => Self::Pretty,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_exclusive() {
        let mode = OutputMode::resolve(true, Some(OutputFormat::Plain), true, false);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_plain_format_on_tty() {
        let mode = OutputMode::resolve(false, Some(OutputFormat::Plain), true, false);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_term_dumb_forces_plain() {
        let mode = OutputMode::resolve(false, Some(OutputFormat::Table), true, true);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_tty_defaults_to_pretty() {
        assert_eq!(OutputMode::resolve(false, None, true, false), OutputMode::Pretty);
    }

    #[test]
    fn test_pipe_stays_plain_even_for_table() {
        let mode = OutputMode::resolve(false, Some(OutputFormat::Table), false, false);
        assert_eq!(mode, OutputMode::Plain);
    }
}
