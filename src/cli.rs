use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "linkscan",
    about = "linkscan - URL threat report mockup with synthetic results",
    version
)]

pub struct Args {
    /// URLs to scan (starts an interactive session when omitted)
    pub urls: Vec<String>,

    /// Seed for reproducible reports
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulated scan latency in milliseconds
    #[arg(long, default_value = "1500")]
    pub delay_ms: u64,

    /// How to print each report
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Export each report as JSON into a directory (a .json file path only with one URL)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Enable verbose logging of all operations
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide spinners and animations
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rendered report cards
    Text,
    /// Full report as pretty JSON on stdout
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "Json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["linkscan"]);
        assert!(args.urls.is_empty());
        assert_eq!(args.delay_ms, 1500);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_full_invocation() {
        let args = Args::parse_from([
            "linkscan",
            "https://example.com",
            "http://example.org",
            "--seed",
            "9",
            "--delay-ms",
            "0",
            "--format",
            "json",
            "-o",
            "reports",
            "-q",
        ]);
        assert_eq!(args.urls.len(), 2);
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.delay_ms, 0);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.output, Some(PathBuf::from("reports")));
        assert!(args.quiet);
    }
}
