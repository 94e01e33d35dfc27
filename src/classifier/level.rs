use crate::models::{RiskBand, ThreatLevel};

/// Threat level for a score. Bands are checked from the top down.
pub fn level_of(score: u8) -> ThreatLevel {
    match score {
        80..=u8::MAX => ThreatLevel {
            label: "Safe",
            description: "This URL appears to be safe with no significant threats detected.",
            band: RiskBand::Safe,
        },
        60..=79 => ThreatLevel {
            label: "Low Risk",
            description: "This URL has minimal risk factors. Generally safe to visit.",
            band: RiskBand::Low,
        },
        40..=59 => ThreatLevel {
            label: "Medium Risk",
            description: "This URL shows some concerning indicators. Proceed with caution.",
            band: RiskBand::Medium,
        },
        20..=39 => ThreatLevel {
            label: "High Risk",
            description: "This URL has multiple risk factors. Not recommended to visit.",
            band: RiskBand::High,
        },
        _ => ThreatLevel {
            label: "Critical Risk",
            description: "This URL is highly dangerous. Do not visit this site.",
            band: RiskBand::Critical,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(level_of(79).label, "Low Risk");
        assert_eq!(level_of(80).label, "Safe");
        assert_eq!(level_of(59).label, "Medium Risk");
        assert_eq!(level_of(60).label, "Low Risk");
        assert_eq!(level_of(40).label, "Medium Risk");
        assert_eq!(level_of(39).label, "High Risk");
        assert_eq!(level_of(20).label, "High Risk");
        assert_eq!(level_of(19).label, "Critical Risk");
        assert_eq!(level_of(0).label, "Critical Risk");
        assert_eq!(level_of(u8::MAX).band, RiskBand::Safe);
    }

    #[test]
    fn test_band_is_monotonic() {
        let mut previous = level_of(0).band;
        for score in 1..=99u8 {
            let band = level_of(score).band;
            assert!(band >= previous, "band dropped at {}", score);
            previous = band;
        }
    }
}
