//! Core types shared across the byeol screensaver crates.
//!
//! Holds the compact color encoding and interpolation, the cycling text
//! palette, and the device-tier profile that fixes densities and spawn
//! cadences once at startup.

mod color;
mod cycle;
mod tier;

pub use color::Rgb;
pub use cycle::{ColorCycle, Palette, COLOR_CYCLE_STEP};
pub use tier::{DeviceTier, TierProfile};
