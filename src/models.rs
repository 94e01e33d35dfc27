use serde::{Deserialize, Serialize};
use std::fmt;

/// Threat categories that get a randomized verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Malware,
    Phishing,
    Reputation,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Malware, Category::Phishing, Category::Reputation];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Malware => "malware",
            Category::Phishing => "phishing",
            Category::Reputation => "reputation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Clean,
    Suspicious,
    #[serde(rename = "Threat Detected")]
    ThreatDetected,
    /// Only produced by the SSL rule
    Warning,
}

impl Status {
    pub fn severity(&self) -> Severity {
        match self {
            Status::Clean => Severity::Safe,
            Status::Suspicious | Status::Warning => Severity::Warning,
            Status::ThreatDetected => Severity::Danger,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Clean => "Clean",
            Status::Suspicious => "Suspicious",
            Status::ThreatDetected => "Threat Detected",
            Status::Warning => "Warning",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Safe,
    Warning,
    Danger,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Safe => write!(f, "safe"),
            Severity::Warning => write!(f, "warning"),
            Severity::Danger => write!(f, "danger"),
        }
    }
}

/// Verdict for one category. Severity always follows from status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub status: Status,
    pub details: String,
    pub severity: Severity,
}

impl CategoryResult {
    pub fn new(status: Status, details: impl Into<String>) -> Self {
        Self {
            status,
            details: details.into(),
            severity: status.severity(),
        }
    }
}

/// Verdicts for the randomized categories. Every category is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResults {
    pub malware: CategoryResult,
    pub phishing: CategoryResult,
    pub reputation: CategoryResult,
}

impl CategoryResults {
    pub fn get(&self, category: Category) -> &CategoryResult {
        match category {
            Category::Malware => &self.malware,
            Category::Phishing => &self.phishing,
            Category::Reputation => &self.reputation,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryResult)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalDetails {
    pub domain_age: String,
    pub ip_address: String,
    pub country: String,
    pub last_scanned: String,
}

/// A fabricated scan result. Built once per scan and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatReport {
    pub url: String,
    pub domain: String,
    pub score: u8,
    pub categories: CategoryResults,
    pub ssl: CategoryResult,
    pub technical_details: TechnicalDetails,
}

impl ThreatReport {
    /// Category verdicts followed by the SSL verdict, in display order.
    pub fn all_results(&self) -> Vec<(&'static str, &CategoryResult)> {
        let mut results: Vec<(&'static str, &CategoryResult)> =
            self.categories.iter().map(|(c, r)| (c.name(), r)).collect();
        results.push(("ssl", &self.ssl));
        results
    }
}

/// Display band derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Critical,
    High,
    Medium,
    Low,
    Safe,
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskBand::Safe => write!(f, "safe"),
            RiskBand::Low => write!(f, "low"),
            RiskBand::Medium => write!(f, "medium"),
            RiskBand::High => write!(f, "high"),
            RiskBand::Critical => write!(f, "critical"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreatLevel {
    pub label: &'static str,
    pub description: &'static str,
    pub band: RiskBand,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_status() {
        assert_eq!(CategoryResult::new(Status::Clean, "").severity, Severity::Safe);
        assert_eq!(CategoryResult::new(Status::Suspicious, "").severity, Severity::Warning);
        assert_eq!(CategoryResult::new(Status::Warning, "").severity, Severity::Warning);
        assert_eq!(CategoryResult::new(Status::ThreatDetected, "").severity, Severity::Danger);
    }

    #[test]
    fn test_report_json_field_names() -> Result<(), serde_json::Error> {
        let result = CategoryResult::new(Status::ThreatDetected, "bad");
        let report = ThreatReport {
            url: "https://example.com".to_string(),
            domain: "example.com".to_string(),
            score: 12,
            categories: CategoryResults {
                malware: result.clone(),
                phishing: result.clone(),
                reputation: result.clone(),
            },
            ssl: CategoryResult::new(Status::Clean, "ok"),
            technical_details: TechnicalDetails {
                domain_age: "1 year".to_string(),
                ip_address: "10.0.0.1".to_string(),
                country: "Japan".to_string(),
                last_scanned: "2024-01-01 00:00:00".to_string(),
            },
        };

        let value = serde_json::to_value(&report)?;
        assert_eq!(value["technicalDetails"]["ipAddress"], "10.0.0.1");
        assert_eq!(value["technicalDetails"]["domainAge"], "1 year");
        assert_eq!(value["categories"]["malware"]["status"], "Threat Detected");
        assert_eq!(value["categories"]["malware"]["severity"], "danger");
        assert_eq!(value["ssl"]["status"], "Clean");
        Ok(())
    }

    #[test]
    fn test_all_results_order() {
        let clean = CategoryResult::new(Status::Clean, "");
        let results = CategoryResults {
            malware: clean.clone(),
            phishing: clean.clone(),
            reputation: clean.clone(),
        };
        let names: Vec<_> = results.iter().map(|(c, _)| c.name()).collect();
        assert_eq!(names, ["malware", "phishing", "reputation"]);
    }
}
