//! linkscan
//!
//! A URL threat report mockup. Reports are fabricated from a seedable random
//! source and classified with fixed rules; nothing is actually scanned.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exporter;
pub mod generator;
pub mod models;
pub mod random;
pub mod scanner;
pub mod session;
pub mod ui;
pub mod validator;

pub use errors::{LinkScanError, LinkScanResult};
pub use generator::ReportGenerator;
pub use scanner::UrlScanner;
pub use validator::validate;
