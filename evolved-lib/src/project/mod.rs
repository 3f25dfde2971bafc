//! Projects
//!
//! A project bundles the stop configuration, the color ramps and the display
//! choices (color space, stop order) that together define one palette.

mod persist;
mod store;

pub use persist::*;
pub use store::*;

use serde::{Deserialize, Serialize};

use crate::color::Space;
use crate::error::{Error, RangeError};
use crate::export::{HuetoneHue, HuetoneJson};
use crate::preset::builtin_curves;
use crate::ramp::ColorRamp;
use crate::stops::{Curve, StopsConfig, name_stops, sample_stops};

/// Name given to projects that don't have one.
pub const DEFAULT_PROJECT_NAME: &str = "Untitled Project";

/// Number of Bézier stops in a new project.
pub const DEFAULT_NUM_STOPS: usize = 13;

/// Which Oklab flavour the ramps are built in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorSpaceType {
    #[default]
    #[serde(rename = "oklab")]
    Oklab,
    #[serde(rename = "oklab_lr")]
    OklabLr,
}

impl ColorSpaceType {
    /// The color space ramps are interpolated in.
    pub const fn space(self) -> Space {
        match self {
            ColorSpaceType::Oklab => Space::Oklab,
            ColorSpaceType::OklabLr => Space::OklabLr,
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            ColorSpaceType::Oklab => "Oklab",
            ColorSpaceType::OklabLr => "Oklab (Lr)",
        }
    }
}

/// One palette: stops, ramps and display settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    pub stops: StopsConfig,
    pub color_ramps: Vec<ColorRamp>,
    pub color_space_type: ColorSpaceType,
    pub is_inverted: bool,
}

impl Default for Project {
    /// A fresh project; every call builds new values.
    fn default() -> Self {
        let curve = builtin_curves()
            .remove("default")
            .map(|preset| preset.content)
            .unwrap_or_else(Curve::linear);
        Self {
            name: DEFAULT_PROJECT_NAME.to_string(),
            stops: StopsConfig::bezier(DEFAULT_NUM_STOPS, curve),
            color_ramps: Vec::new(),
            color_space_type: ColorSpaceType::default(),
            is_inverted: false,
        }
    }
}

/// A sampled, named swatch of a ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub name: String,
    pub lightness: f64,
    /// sRGB hex of the swatch.
    pub color: String,
    /// sRGB hex of the label color.
    pub label: String,
}

impl Project {
    /// Creates a default project with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn space(&self) -> Space {
        self.color_space_type.space()
    }

    /// Applies every field set in `patch`.
    pub fn apply(&mut self, patch: ProjectPatch) {
        let ProjectPatch {
            name,
            stops,
            color_ramps,
            color_space_type,
            is_inverted,
        } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(stops) = stops {
            self.stops = stops;
        }
        if let Some(color_ramps) = color_ramps {
            self.color_ramps = color_ramps;
        }
        if let Some(color_space_type) = color_space_type {
            self.color_space_type = color_space_type;
        }
        if let Some(is_inverted) = is_inverted {
            self.is_inverted = is_inverted;
        }
    }

    /// Lightness of each stop, in display order.
    pub fn stop_lightnesses(&self) -> Vec<f64> {
        sample_stops(&self.stops, self.is_inverted)
    }

    /// Names of each stop, in display order.
    pub fn stop_names(&self) -> Vec<String> {
        name_stops(&self.stop_lightnesses(), self.is_inverted)
    }

    /// Swatches of the ramp at `ramp_index`.
    pub fn swatches(&self, ramp_index: usize) -> Result<Vec<Swatch>, Error> {
        let ramp = self
            .color_ramps
            .get(ramp_index)
            .ok_or(RangeError::RampIndex(ramp_index))?;
        let lightnesses = self.stop_lightnesses();
        let names = name_stops(&lightnesses, self.is_inverted);
        swatches_for(ramp, &lightnesses, &names, self.space())
    }

    /// The project as a Huetone palette.
    pub fn to_huetone(&self) -> Result<HuetoneJson, Error> {
        let lightnesses = self.stop_lightnesses();
        let tones = name_stops(&lightnesses, self.is_inverted);
        let hues = self
            .color_ramps
            .iter()
            .map(|ramp| {
                let swatches = swatches_for(ramp, &lightnesses, &tones, self.space())?;
                Ok(HuetoneHue {
                    name: ramp.name().to_string(),
                    colors: swatches.into_iter().map(|s| s.color).collect(),
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(HuetoneJson {
            name: self.name.clone(),
            hues,
            tones,
        })
    }
}

fn swatches_for(
    ramp: &ColorRamp,
    lightnesses: &[f64],
    names: &[String],
    space: Space,
) -> Result<Vec<Swatch>, Error> {
    lightnesses
        .iter()
        .zip(names)
        .map(|(&lightness, name)| {
            let color = ramp.color_at(lightness, space)?;
            let label = ramp.contrast_color_at(lightness, space)?;
            Ok(Swatch {
                name: name.clone(),
                lightness,
                color: color.to_srgb_hex(),
                label: label.to_srgb_hex(),
            })
        })
        .collect()
}

/// A partial project update; unset fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub stops: Option<StopsConfig>,
    pub color_ramps: Option<Vec<ColorRamp>>,
    pub color_space_type: Option<ColorSpaceType>,
    pub is_inverted: Option<bool>,
}

impl ProjectPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn stops(mut self, stops: StopsConfig) -> Self {
        self.stops = Some(stops);
        self
    }

    pub fn color_ramps(mut self, ramps: Vec<ColorRamp>) -> Self {
        self.color_ramps = Some(ramps);
        self
    }

    pub fn color_space_type(mut self, color_space_type: ColorSpaceType) -> Self {
        self.color_space_type = Some(color_space_type);
        self
    }

    pub fn is_inverted(mut self, is_inverted: bool) -> Self {
        self.is_inverted = Some(is_inverted);
        self
    }
}
