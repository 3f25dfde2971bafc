//! Perceptual color ramp generation
//!
//! Turns a handful of user-chosen key colors into a continuous, lightness-indexed
//! color function, samples it at named stops, and picks legible label colors for
//! each swatch. Projects, curve presets and exports are plain data around that core.

pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod preset;
pub mod project;
pub mod ramp;
pub mod stops;
pub mod storage;

pub use crate::color::{Color, ColorModel, Space};
pub use config::RampConfig;
pub use error::{Error, Result};
pub use project::{ColorSpaceType, Project, ProjectPatch, ProjectStore, Swatch};
pub use ramp::{ColorRamp, RampRange};
pub use stops::{Curve, Point, StopsConfig, name_stops, sample_stops};
