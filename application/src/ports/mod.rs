//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod chart_renderer;
pub mod email_sender;
pub mod progress;
pub mod report_writer;
