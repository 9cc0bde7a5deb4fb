//! Optional domain integrations, one module per Cargo feature.

#[cfg(feature = "chrono")]
pub mod chrono;
