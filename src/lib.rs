//! citygeo-rs
//!
//! Umbrella crate re-exporting [`citygeo_core`] so the demos can write
//! `use citygeo_rs::prelude::*;`.
pub use citygeo_core::*;
