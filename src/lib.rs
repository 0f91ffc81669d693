//! Track boundary resampling.
//!
//! Loads the inner and outer boundary of a closed track from plain-text
//! coordinate files and resamples both with four interpolation methods so they
//! can be compared side by side.

pub mod data;
pub mod settings;
