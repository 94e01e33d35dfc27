//! Scan settings resolved from the command line.

use crate::cli::{Args, OutputFormat};
use crate::errors::{LinkScanError, LinkScanResult};
use crate::exporter::JsonExporter;
use std::path::PathBuf;
use std::time::Duration;

/// Simulated network latency between generation and delivery.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub delay: Duration,
    pub seed: Option<u64>,
    pub animate: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            seed: None,
            animate: true,
            format: OutputFormat::Text,
            output: None,
        }
    }
}

impl From<&Args> for ScanConfig {
    fn from(args: &Args) -> Self {
        Self {
            delay: Duration::from_millis(args.delay_ms),
            seed: args.seed,
            animate: !args.quiet && args.format == OutputFormat::Text,
            format: args.format,
            output: args.output.clone(),
        }
    }
}

impl ScanConfig {
    /// A single `.json` export file can only hold one report.
    pub fn check_output(&self, url_count: usize) -> LinkScanResult<()> {
        match &self.output {
            Some(target) if url_count > 1 && JsonExporter::is_file_target(target) => {
                Err(LinkScanError::Config(format!(
                    "export file {} cannot hold {} reports; pass a directory instead",
                    target.display(),
                    url_count
                )))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_matches_cli_defaults() {
        let args = Args::parse_from(["linkscan"]);
        let config = ScanConfig::from(&args);
        let default = ScanConfig::default();
        assert_eq!(config.delay, default.delay);
        assert_eq!(config.animate, default.animate);
        assert_eq!(config.format, default.format);
    }

    #[test]
    fn test_json_or_quiet_disables_animation() {
        let quiet = ScanConfig::from(&Args::parse_from(["linkscan", "-q"]));
        assert!(!quiet.animate);

        let json = ScanConfig::from(&Args::parse_from(["linkscan", "--format", "json"]));
        assert!(!json.animate);
    }

    #[test]
    fn test_json_file_target_needs_single_url() {
        let single = ScanConfig::from(&Args::parse_from([
            "linkscan",
            "-o",
            "out.json",
            "https://a.example",
        ]));
        assert!(single.check_output(1).is_ok());

        let batch = ScanConfig::from(&Args::parse_from([
            "linkscan",
            "-o",
            "out.json",
            "https://a.example",
            "https://b.example",
        ]));
        let err = batch.check_output(2).unwrap_err();
        assert!(matches!(err, LinkScanError::Config(_)));
        assert!(err.to_string().contains("out.json"));

        let dir = ScanConfig::from(&Args::parse_from(["linkscan", "-o", "reports"]));
        assert!(dir.check_output(5).is_ok());
    }
}
