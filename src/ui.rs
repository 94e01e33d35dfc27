use crate::classifier;
use crate::errors::{LinkScanError, LinkScanResult};
use crate::models::{CategoryResult, RiskBand, Severity, ThreatReport};
use console::{style, Style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Frames in the score count-up animation.
const SCORE_STEPS: f64 = 30.0;
const SCORE_FRAME: Duration = Duration::from_millis(30);

/// Terminal presentation of scan progress and reports.
pub struct TerminalPresenter {
    term: Term,
    animate: bool,
}

impl TerminalPresenter {
    pub fn new(animate: bool) -> Self {
        Self {
            term: Term::stdout(),
            animate,
        }
    }

    pub fn print_banner(&self) -> LinkScanResult<()> {
        let user = whoami::username();
        let host = whoami::devicename();

        self.line("")?;
        self.line(&format!(
            "    {} {}",
            style("🛡  LINKSCAN").cyan().bold(),
            style("URL threat report mockup").dim()
        ))?;
        self.line(&format!(
            "    {} {}@{} {}/{}",
            style("◉").color256(240),
            style(user).color256(145),
            style(host).color256(145),
            std::env::consts::OS,
            std::env::consts::ARCH
        ))?;
        self.line(&format!(
            "    {}",
            style("Results are randomly generated. No real scanning is performed.").yellow()
        ))?;
        self.line("")
    }

    /// Spinner shown while a scan is pending. Hidden when animation is off.
    pub fn start_spinner(&self, target: &str) -> ProgressBar {
        if !self.animate {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        let spinner_style = ProgressStyle::with_template("{prefix} {spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&[
                "▰▱▱▱▱▱▱", "▰▰▱▱▱▱▱", "▰▰▰▱▱▱▱", "▰▰▰▰▱▱▱", "▰▰▰▰▰▱▱", "▰▰▰▰▰▰▱", "▰▰▰▰▰▰▰",
                "▱▰▰▰▰▰▰",
            ]);
        spinner.set_style(spinner_style);
        spinner.set_prefix(style("🔍 Scanning...").green().bold().to_string());
        spinner.set_message(style(target).white().bold().to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    /// Render a report, counting the score up first when animating.
    pub async fn render(&self, report: &ThreatReport) -> LinkScanResult<()> {
        self.line("")?;
        self.line(&format!(
            "   {} {}",
            style("Scanned URL:").dim(),
            style(&report.url).white().bold()
        ))?;

        if self.animate {
            self.animate_score(report.score).await;
        }

        for line in report_lines(report) {
            self.line(&line)?;
        }
        Ok(())
    }

    pub fn render_json(&self, report: &ThreatReport) -> LinkScanResult<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.line(&json)
    }

    pub fn render_error(&self, err: &LinkScanError) -> LinkScanResult<()> {
        self.line(&format!(
            "   {} {}",
            style("✗").red().bold(),
            style(err.user_message()).red()
        ))
    }

    pub fn render_notice(&self, message: &str) -> LinkScanResult<()> {
        self.line(&format!("   {} {}", style("▶").color256(33), message))
    }

    async fn animate_score(&self, score: u8) {
        let bar = ProgressBar::new(99);
        let template = "   {prefix} [{bar:40.cyan/blue}] {pos:>2}";
        if let Ok(bar_style) = ProgressStyle::with_template(template) {
            bar.set_style(bar_style.progress_chars("█▉▊▋▌▍▎▏  "));
        }
        bar.set_prefix(style("Threat score").bold().to_string());

        let mut ticker = tokio::time::interval(SCORE_FRAME);
        for frame in score_frames(score) {
            ticker.tick().await;
            bar.set_position(u64::from(frame));
        }
        bar.finish();
    }

    fn line(&self, text: &str) -> LinkScanResult<()> {
        self.term
            .write_line(text)
            .map_err(|e| LinkScanError::Ui(e.to_string()))
    }
}

/// Values shown while counting up to `score`. Ends exactly on `score`.
pub fn score_frames(score: u8) -> Vec<u8> {
    let target = f64::from(score);
    let increment = target / SCORE_STEPS;
    let mut current = 0.0_f64;
    let mut frames = Vec::new();

    loop {
        current += increment;
        if current >= target {
            frames.push(score);
            break;
        }
        frames.push(current.floor() as u8);
    }
    frames
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Safe => Style::new().green(),
        Severity::Warning => Style::new().yellow(),
        Severity::Danger => Style::new().red().bold(),
    }
}

fn band_style(band: RiskBand) -> Style {
    match band {
        RiskBand::Safe => Style::new().green().bold(),
        RiskBand::Low => Style::new().cyan().bold(),
        RiskBand::Medium => Style::new().yellow().bold(),
        RiskBand::High => Style::new().red().bold(),
        RiskBand::Critical => Style::new().magenta().bold(),
    }
}

fn category_line(name: &str, result: &CategoryResult) -> String {
    let paint = severity_style(result.severity);
    format!(
        "   {:<12} {:<16} {}",
        style(name.to_uppercase()).bold(),
        paint.apply_to(result.status.label()),
        style(&result.details).dim()
    )
}

/// Report body as display lines: level, category cards and technical details.
pub fn report_lines(report: &ThreatReport) -> Vec<String> {
    let level = classifier::level_of(report.score);
    let paint = band_style(level.band);
    let details = &report.technical_details;

    let mut lines = vec![
        format!(
            "   {} {}  {}",
            style("Score:").dim(),
            paint.apply_to(report.score),
            paint.apply_to(level.label)
        ),
        format!("   {}", level.description),
        String::new(),
        format!("   {}", style("THREAT CATEGORIES").cyan().bold()),
    ];

    for (name, result) in report.all_results() {
        lines.push(category_line(name, result));
    }

    lines.push(String::new());
    lines.push(format!("   {}", style("TECHNICAL DETAILS").cyan().bold()));
    lines.push(format!("   {:<14} {}", "Domain Age", details.domain_age));
    lines.push(format!("   {:<14} {}", "IP Address", details.ip_address));
    lines.push(format!("   {:<14} {}", "Country", details.country));
    lines.push(format!("   {:<14} {}", "Last Scanned", details.last_scanned));
    lines.push(String::new());
    lines
}
