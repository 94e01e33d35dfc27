//! Scan sessions: a batch of URLs from the command line, or an interactive
//! prompt with scan again / export / quit.

use crate::cli::OutputFormat;
use crate::config::ScanConfig;
use crate::errors::{LinkScanError, LinkScanResult};
use crate::exporter::JsonExporter;
use crate::models::ThreatReport;
use crate::random::RandomSource;
use crate::scanner::UrlScanner;
use crate::ui::TerminalPresenter;
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Outcome counts for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub scanned: usize,
    pub rejected: usize,
    pub failed: usize,
    pub exported: usize,
}

impl SessionSummary {
    pub fn all_succeeded(&self) -> bool {
        self.rejected == 0 && self.failed == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextAction {
    ScanAgain,
    Export,
    Quit,
}

fn parse_action(line: &str) -> Option<NextAction> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "s" | "scan" => Some(NextAction::ScanAgain),
        "e" | "export" => Some(NextAction::Export),
        "q" | "quit" | "exit" => Some(NextAction::Quit),
        _ => None,
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim(), "q" | "quit" | "exit")
}

/// Resolves when the user presses Ctrl-C. Never resolves if the handler
/// cannot be installed.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::debug!("Ctrl-C handler unavailable: {}", e);
        std::future::pending::<()>().await;
    }
}

pub struct Session<R> {
    scanner: UrlScanner<R>,
    presenter: TerminalPresenter,
    config: ScanConfig,
    summary: SessionSummary,
}

impl<R: RandomSource> Session<R> {
    pub fn new(scanner: UrlScanner<R>, presenter: TerminalPresenter, config: ScanConfig) -> Self {
        Self {
            scanner,
            presenter,
            config,
            summary: SessionSummary::default(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Scan every URL in order. A bad URL is reported and skipped.
    pub async fn run_batch(&mut self, urls: &[String]) -> LinkScanResult<SessionSummary> {
        self.config.check_output(urls.len())?;
        for input in urls {
            if let Some(report) = self.scan_and_show(input).await? {
                if let Some(target) = self.config.output.clone() {
                    self.export(&report, &target)?;
                }
            }
        }
        Ok(self.summary)
    }

    /// Prompt for URLs on `input` until it is exhausted, the user quits, or
    /// Ctrl-C is pressed at a prompt.
    pub async fn run_interactive<I>(&mut self, mut input: I) -> LinkScanResult<SessionSummary>
    where
        I: AsyncBufRead + Unpin,
    {
        loop {
            self.presenter
                .render_notice("Enter a URL to scan (q to quit):")?;
            let Some(line) = read_line(&mut input).await? else {
                break;
            };
            if is_quit(&line) {
                break;
            }

            let Some(report) = self.scan_and_show(&line).await? else {
                continue;
            };

            match self.prompt_after_report(&mut input, &report).await? {
                NextAction::Quit => break,
                NextAction::ScanAgain | NextAction::Export => continue,
            }
        }
        Ok(self.summary)
    }

    /// Returns `Ok(None)` when the scan was rejected or aborted; the user has
    /// already been told why.
    async fn scan_and_show(&mut self, input: &str) -> LinkScanResult<Option<ThreatReport>> {
        let spinner = self.presenter.start_spinner(input.trim());
        let result = self.scanner.scan_until(input, interrupted()).await;
        spinner.finish_and_clear();

        match result {
            Ok(report) => {
                self.summary.scanned += 1;
                match self.config.format {
                    OutputFormat::Text => self.presenter.render(&report).await?,
                    OutputFormat::Json => self.presenter.render_json(&report)?,
                }
                Ok(Some(report))
            }
            Err(err @ LinkScanError::InvalidInput { .. }) => {
                self.summary.rejected += 1;
                self.presenter.render_error(&err)?;
                Ok(None)
            }
            Err(err @ LinkScanError::Generation(_)) => {
                log::error!("Scan failed: {}", err);
                self.summary.failed += 1;
                self.presenter.render_error(&err)?;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn prompt_after_report<I>(
        &mut self,
        input: &mut I,
        report: &ThreatReport,
    ) -> LinkScanResult<NextAction>
    where
        I: AsyncBufRead + Unpin,
    {
        loop {
            self.presenter
                .render_notice("[s]can again, [e]xport report, [q]uit:")?;
            let Some(line) = read_line(input).await? else {
                return Ok(NextAction::Quit);
            };

            match parse_action(&line) {
                Some(NextAction::Export) => {
                    let target = self
                        .config
                        .output
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("."));
                    self.export(report, &target)?;
                }
                Some(action) => return Ok(action),
                None => self.presenter.render_notice("Unknown choice.")?,
            }
        }
    }

    fn export(&mut self, report: &ThreatReport, target: &Path) -> LinkScanResult<()> {
        let path = JsonExporter::export(report, target)?;
        self.summary.exported += 1;
        self.presenter
            .render_notice(&format!("Report exported to {}", path.display()))
    }
}

/// Next line of input, or `None` at end of input or on Ctrl-C.
async fn read_line<I>(input: &mut I) -> LinkScanResult<Option<String>>
where
    I: AsyncBufRead + Unpin,
{
    read_line_until(input, interrupted()).await
}

async fn read_line_until<I, F>(input: &mut I, interrupt: F) -> LinkScanResult<Option<String>>
where
    I: AsyncBufRead + Unpin,
    F: Future,
{
    let mut line = String::new();
    let read = tokio::select! {
        read = input.read_line(&mut line) => read?,
        _ = interrupt => {
            log::info!("Interrupted at prompt");
            return Ok(None);
        }
    };
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn session(output: Option<PathBuf>) -> Session<rand_chacha::ChaCha8Rng> {
        let config = ScanConfig {
            delay: Duration::ZERO,
            seed: Some(3),
            animate: false,
            format: OutputFormat::Text,
            output,
        };
        Session::new(
            UrlScanner::from_config(&config),
            TerminalPresenter::new(false),
            config,
        )
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("e"), Some(NextAction::Export));
        assert_eq!(parse_action(" Quit "), Some(NextAction::Quit));
        assert_eq!(parse_action(""), Some(NextAction::ScanAgain));
        assert_eq!(parse_action("maybe"), None);
    }

    #[tokio::test]
    async fn test_batch_counts_rejections() -> LinkScanResult<()> {
        let mut session = session(None);
        let urls = vec![
            "https://example.com".to_string(),
            "ftp://example.com".to_string(),
            "".to_string(),
            "http://example.org".to_string(),
        ];

        let summary = session.run_batch(&urls).await?;
        assert_eq!(summary.scanned, 2);
        assert_eq!(summary.rejected, 2);
        assert!(!summary.all_succeeded());
        Ok(())
    }

    #[tokio::test]
    async fn test_batch_exports_each_report() -> LinkScanResult<()> {
        let dir = TempDir::new()?;
        let mut session = session(Some(dir.path().to_path_buf()));
        let urls = vec!["https://a.example".to_string(), "https://b.example".to_string()];

        let summary = session.run_batch(&urls).await?;
        assert_eq!(summary.exported, 2);
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_batch_refuses_single_file_for_many_reports() -> LinkScanResult<()> {
        let dir = TempDir::new()?;
        let target = dir.path().join("report.json");
        let mut session = session(Some(target.clone()));
        let urls = vec!["https://a.example".to_string(), "https://b.example".to_string()];

        let err = session.run_batch(&urls).await.unwrap_err();
        assert!(matches!(err, LinkScanError::Config(_)));
        assert_eq!(session.summary().scanned, 0);
        assert!(!target.exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_interactive_scan_export_quit() -> LinkScanResult<()> {
        let dir = TempDir::new()?;
        let mut session = session(Some(dir.path().to_path_buf()));
        let script = "not a url\nhttps://example.com\ne\nq\n";

        let summary = session.run_interactive(script.as_bytes()).await?;
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.scanned, 1);
        assert_eq!(summary.exported, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_read_line_stops_on_interrupt() -> LinkScanResult<()> {
        let (mut reader, _writer) = tokio::io::duplex(64);
        let mut reader = tokio::io::BufReader::new(&mut reader);
        let line = read_line_until(&mut reader, async {}).await?;
        assert_eq!(line, None);

        let mut script = "https://example.com\r\n".as_bytes();
        let line = read_line_until(&mut script, std::future::pending::<()>()).await?;
        assert_eq!(line.as_deref(), Some("https://example.com"));
        Ok(())
    }

    #[tokio::test]
    async fn test_interactive_reads_async_buffer() -> LinkScanResult<()> {
        let mut session = session(None);
        let script = std::io::Cursor::new(b"https://example.com\nq\n".to_vec());
        let reader = tokio::io::BufReader::new(script);

        let summary = session.run_interactive(reader).await?;
        assert_eq!(summary.scanned, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_interactive_scan_again_until_eof() -> LinkScanResult<()> {
        let mut session = session(None);
        let script = "https://example.com\ns\nhttp://example.com\n";

        let summary = session.run_interactive(script.as_bytes()).await?;
        assert_eq!(summary.scanned, 2);
        assert!(summary.all_succeeded());
        Ok(())
    }
}
