use crate::classifier;
use crate::errors::{LinkScanError, LinkScanResult};
use crate::models::{Status, TechnicalDetails, ThreatReport};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Exported view of a report: what the report screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub url: String,
    pub domain: String,
    pub threat_score: u8,
    pub threat_level: String,
    pub categories: ExportCategories,
    pub technical_details: TechnicalDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportCategories {
    pub malware: Status,
    pub phishing: Status,
    pub reputation: Status,
    pub ssl: Status,
}

impl From<&ThreatReport> for ExportDocument {
    fn from(report: &ThreatReport) -> Self {
        Self {
            url: report.url.clone(),
            domain: report.domain.clone(),
            threat_score: report.score,
            threat_level: classifier::level_of(report.score).label.to_string(),
            categories: ExportCategories {
                malware: report.categories.malware.status,
                phishing: report.categories.phishing.status,
                reputation: report.categories.reputation.status,
                ssl: report.ssl.status,
            },
            technical_details: report.technical_details.clone(),
        }
    }
}

pub struct JsonExporter;

impl JsonExporter {
    /// `threat-report-<unix millis>.json`
    pub fn default_file_name() -> String {
        format!("threat-report-{}.json", chrono::Utc::now().timestamp_millis())
    }

    /// Write `report` under `target`.
    ///
    /// A target ending in `.json` is used as the file path. Anything else is a
    /// directory that receives a timestamped file. Returns the written path.
    pub fn export(report: &ThreatReport, target: &Path) -> LinkScanResult<PathBuf> {
        let path = if Self::is_file_target(target) {
            if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .map_err(|e| LinkScanError::io(e, parent.to_path_buf()))?;
            }
            target.to_path_buf()
        } else {
            std::fs::create_dir_all(target)
                .map_err(|e| LinkScanError::io(e, target.to_path_buf()))?;
            Self::unique_path(target)
        };

        let document = ExportDocument::from(report);
        let json = serde_json::to_string_pretty(&document)?;
        std::fs::write(&path, json).map_err(|e| LinkScanError::io(e, path.clone()))?;

        log::info!("Exported report for {} to {:?}", report.domain, path);
        Ok(path)
    }

    /// True when `target` names a single `.json` file rather than a directory.
    pub fn is_file_target(target: &Path) -> bool {
        !target.is_dir()
            && target
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
    }

    // Several reports can land in the same millisecond during a batch run.
    fn unique_path(dir: &Path) -> PathBuf {
        let name = Self::default_file_name();
        let candidate = dir.join(&name);
        if !candidate.exists() {
            return candidate;
        }

        let stem = name.trim_end_matches(".json");
        (1..)
            .map(|n| dir.join(format!("{}-{}.json", stem, n)))
            .find(|p| !p.exists())
            .unwrap_or(candidate)
    }
}
