//! Chart layout.

pub mod radial;
