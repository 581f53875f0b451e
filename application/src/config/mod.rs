//! Application-level configuration.
//!
//! - [`ReportSettings`] - report wording plus sender/admin addresses

pub mod report_settings;

pub use report_settings::ReportSettings;
