//! Simulated scan.
//!
//! A scan validates the input, generates the report up front, then holds it
//! back for a fixed delay to mimic network latency. The report is delivered
//! exactly once, or not at all if the scan is aborted during the delay.

use crate::config::ScanConfig;
use crate::errors::{LinkScanError, LinkScanResult};
use crate::generator::ReportGenerator;
use crate::models::ThreatReport;
use crate::random::{self, RandomSource};
use crate::validator;
use rand_chacha::ChaCha8Rng;
use std::future::Future;
use std::time::Duration;

pub struct UrlScanner<R> {
    generator: ReportGenerator<R>,
    delay: Duration,
}

impl UrlScanner<ChaCha8Rng> {
    /// Scanner seeded from the config (or OS entropy when no seed is set).
    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(random::seeded_rng(config.seed), config.delay)
    }
}

impl<R: RandomSource> UrlScanner<R> {
    pub fn new(rng: R, delay: Duration) -> Self {
        Self {
            generator: ReportGenerator::new(rng),
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Scan `input`, waiting out the full delay.
    pub async fn scan(&mut self, input: &str) -> LinkScanResult<ThreatReport> {
        self.scan_until(input, std::future::pending::<()>()).await
    }

    /// Scan `input`, giving up if `abort` resolves before the delay ends.
    pub async fn scan_until<F>(&mut self, input: &str, abort: F) -> LinkScanResult<ThreatReport>
    where
        F: Future,
    {
        let input = input.trim();
        let url = validator::parse_target(input)?;
        log::info!("Scanning {}", url);

        let report = self.generator.generate(input, &url)?;

        tokio::select! {
            _ = tokio::time::sleep(self.delay) => {
                log::info!("Scan of {} complete: score {}", report.domain, report.score);
                Ok(report)
            }
            _ = abort => {
                log::warn!("Scan of {} aborted", report.domain);
                Err(LinkScanError::Generation("scan aborted".to_string()))
            }
        }
    }
}
