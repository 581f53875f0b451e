//! Score calculation.

pub mod score_table;
