//! Classification rules.
//!
//! - `category`: per-category verdict from the overall score plus one draw
//! - `level`: deterministic threat level banding for display

mod category;
mod level;

pub use category::classify;
pub use level::level_of;

/// Lowest score treated as clean for every category.
pub const CLEAN_THRESHOLD: u8 = 70;

/// Lowest score that can avoid a detected threat.
pub const SUSPICIOUS_THRESHOLD: u8 = 40;
