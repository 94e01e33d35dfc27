use super::{CLEAN_THRESHOLD, SUSPICIOUS_THRESHOLD};
use crate::models::{Category, CategoryResult, Status};
use crate::random::RandomSource;

/// Verdict for one category.
///
/// Takes exactly one draw from `rng` on every call, even when the score
/// alone decides the outcome.
pub fn classify<R: RandomSource + ?Sized>(
    category: Category,
    overall_score: u8,
    rng: &mut R,
) -> CategoryResult {
    let draw = rng.next_unit();

    if overall_score >= CLEAN_THRESHOLD {
        CategoryResult::new(
            Status::Clean,
            format!("No {} threats detected. This URL appears safe.", category),
        )
    } else if overall_score >= SUSPICIOUS_THRESHOLD {
        if draw < 0.5 {
            CategoryResult::new(
                Status::Suspicious,
                format!("Potential {} indicators detected. Exercise caution.", category),
            )
        } else {
            CategoryResult::new(Status::Clean, format!("No {} threats detected.", category))
        }
    } else {
        CategoryResult::new(
            Status::ThreatDetected,
            format!("High risk {} activity detected. Avoid this URL.", category),
        )
    }
}
