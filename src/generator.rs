//! Synthetic threat report generation.
//!
//! Scores are drawn from three weighted bands so most URLs come out safe.
//! Category verdicts follow from the score, SSL from the scheme, and the
//! technical details are picked at random.

use crate::classifier;
use crate::errors::{LinkScanError, LinkScanResult};
use crate::models::{
    Category, CategoryResult, CategoryResults, Status, TechnicalDetails, ThreatReport,
};
use crate::random::RandomSource;
use crate::validator;
use url::Url;

pub const COUNTRIES: [&str; 8] = [
    "United States",
    "United Kingdom",
    "Germany",
    "France",
    "Japan",
    "Canada",
    "Netherlands",
    "Singapore",
];

pub const DOMAIN_AGES: [&str; 7] = [
    "2 years", "5 years", "10 years", "1 year", "15 years", "3 months", "8 years",
];

/// Timestamp format for `last_scanned`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Draw an overall score: 70% in 70-99, 20% in 40-69, 10% in 0-39.
pub fn draw_score<R: RandomSource + ?Sized>(rng: &mut R) -> u8 {
    let band = rng.next_unit();
    let (low, width) = if band < 0.7 {
        (70, 30)
    } else if band < 0.9 {
        (40, 30)
    } else {
        (0, 40)
    };
    low + rng.pick(width) as u8
}

/// SSL verdict from the URL scheme alone.
pub fn ssl_result(url: &Url) -> CategoryResult {
    if url.scheme() == "https" {
        CategoryResult::new(Status::Clean, "Valid SSL/TLS certificate detected")
    } else {
        CategoryResult::new(Status::Warning, "No SSL/TLS encryption detected")
    }
}

fn random_ip<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let octets: Vec<String> = (0..4).map(|_| rng.pick(256).to_string()).collect();
    octets.join(".")
}

/// Builds reports from an owned random source.
pub struct ReportGenerator<R> {
    rng: R,
}

impl<R: RandomSource> ReportGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Validate `input`, then generate. Bad input never produces a report.
    pub fn generate_for(&mut self, input: &str) -> LinkScanResult<ThreatReport> {
        let input = input.trim();
        let url = validator::parse_target(input)?;
        self.generate(input, &url)
    }

    /// Generate a report for an already validated URL.
    ///
    /// `input` is the text the URL was parsed from; the report keeps it as is.
    pub fn generate(&mut self, input: &str, url: &Url) -> LinkScanResult<ThreatReport> {
        let domain = url
            .host_str()
            .ok_or_else(|| LinkScanError::Generation(format!("URL has no host: {}", url)))?
            .to_string();

        let score = draw_score(&mut self.rng);
        log::debug!(
            "Generated score {} ({}) for {}",
            score,
            classifier::level_of(score).band,
            domain
        );

        let categories = CategoryResults {
            malware: classifier::classify(Category::Malware, score, &mut self.rng),
            phishing: classifier::classify(Category::Phishing, score, &mut self.rng),
            reputation: classifier::classify(Category::Reputation, score, &mut self.rng),
        };

        let domain_age = DOMAIN_AGES[self.rng.pick(DOMAIN_AGES.len())].to_string();
        let ip_address = random_ip(&mut self.rng);
        let country = COUNTRIES[self.rng.pick(COUNTRIES.len())].to_string();

        Ok(ThreatReport {
            url: input.to_string(),
            domain,
            score,
            categories,
            ssl: ssl_result(url),
            technical_details: TechnicalDetails {
                domain_age,
                ip_address,
                country,
                last_scanned: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
            },
        })
    }
}
