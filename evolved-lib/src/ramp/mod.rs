//! Color ramps
//!
//! A [`ColorRamp`] owns the user's key colors and lazily derives everything else
//! from them: the ramp function for a color space, the label reference colors,
//! and gradients. Any key-color mutation or a request in a different space drops
//! the whole derived cache.

mod gradient;
mod range;

pub use gradient::{css_linear_gradient, lightness_gradient, render_gradient, steps};
pub use range::RampRange;

use std::cell::RefCell;

use log::debug;

use crate::color::{Color, ColorModel, Space};
use crate::config::RampConfig;
use crate::error::{Error, ParseError, RangeError};
use crate::project::ColorSpec;

/// Derived state of a ramp, valid for one color space.
#[derive(Debug, Default)]
struct RampCache {
    space: Option<Space>,
    range: Option<RampRange>,
    dark: Option<Color>,
    light: Option<Color>,
}

/// A named set of key colors and the ramp derived from them.
///
/// There is always at least one key color.
#[derive(Debug)]
pub struct ColorRamp {
    name: String,
    key_colors: Vec<ColorModel>,
    config: RampConfig,
    cache: RefCell<RampCache>,
}

// Constructors
impl ColorRamp {
    /// Name used when none is given.
    pub const DEFAULT_NAME: &'static str = "Color";

    /// Creates a ramp from CSS color strings.
    ///
    /// An empty list produces a single random key color.
    pub fn new<S: AsRef<str>>(colors: &[S], name: impl Into<String>) -> Result<Self, ParseError> {
        let key_colors = colors
            .iter()
            .map(|c| ColorModel::parse(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_models(key_colors, name.into()))
    }

    /// Creates a ramp from already parsed colors.
    pub fn from_colors(colors: impl IntoIterator<Item = Color>, name: impl Into<String>) -> Self {
        Self::from_models(colors.into_iter().map(ColorModel::new).collect(), name.into())
    }

    /// Creates a ramp with one random sRGB key color.
    pub fn random(name: impl Into<String>) -> Self {
        Self::from_models(Vec::new(), name.into())
    }

    /// Replaces the ramp configuration.
    pub fn with_config(mut self, config: RampConfig) -> Self {
        self.config = config;
        self.invalidate();
        self
    }

    fn from_models(mut key_colors: Vec<ColorModel>, name: String) -> Self {
        if key_colors.is_empty() {
            key_colors.push(ColorModel::new(random_color()));
        }
        Self {
            name,
            key_colors,
            config: RampConfig::default(),
            cache: RefCell::new(RampCache::default()),
        }
    }
}

// Accessors
impl ColorRamp {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key_colors(&self) -> &[ColorModel] {
        &self.key_colors
    }

    pub fn config(&self) -> &RampConfig {
        &self.config
    }

    /// The persisted shape of this ramp.
    pub fn to_spec(&self) -> ColorSpec {
        ColorSpec {
            name: self.name.clone(),
            colors: self.key_colors.iter().map(ColorModel::serialize).collect(),
        }
    }
}

// Mutation
impl ColorRamp {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Appends a copy of the last key color.
    pub fn add_color(&mut self) {
        if let Some(last) = self.key_colors.last().cloned() {
            self.key_colors.push(last);
        }
        self.invalidate();
    }

    /// Removes the key color at `index`.
    ///
    /// Returns `false` without touching anything when the index is out of range or
    /// the ramp would be left without key colors.
    pub fn remove_color(&mut self, index: usize) -> bool {
        if self.key_colors.len() <= 1 || index >= self.key_colors.len() {
            return false;
        }
        self.key_colors.remove(index);
        self.invalidate();
        true
    }

    /// Replaces the key color at `index` with a parsed CSS color.
    pub fn update_color(&mut self, index: usize, color: &str) -> Result<(), Error> {
        let model = ColorModel::parse(color)?;
        let slot = self
            .key_colors
            .get_mut(index)
            .ok_or(RangeError::KeyIndex(index))?;
        *slot = model;
        self.invalidate();
        Ok(())
    }

    /// Drops every derived value; they are rebuilt on next access.
    pub fn invalidate(&self) {
        debug!("invalidating ramp {:?}", self.name);
        *self.cache.borrow_mut() = RampCache::default();
    }
}

// Queries
impl ColorRamp {
    /// Runs `f` against the ramp function for `space`, building it if needed.
    pub fn with_range<T>(&self, space: Space, f: impl FnOnce(&RampRange) -> T) -> Result<T, RangeError> {
        let mut cache = self.cache.borrow_mut();
        if cache.space != Some(space) {
            if let Some(previous) = cache.space {
                debug!("ramp {:?} switching from {} to {}", self.name, previous, space);
            }
            *cache = RampCache {
                space: Some(space),
                ..RampCache::default()
            };
        }
        if cache.range.is_none() {
            let keys: Vec<Color> = self.key_colors.iter().map(ColorModel::color).collect();
            cache.range = Some(RampRange::build(&keys, space)?);
        }
        let range = cache.range.as_ref().ok_or(RangeError::NoKeyColors)?;
        Ok(f(range))
    }

    /// The ramp color at `lightness`, expressed in `space`.
    pub fn color_at(&self, lightness: f64, space: Space) -> Result<Color, RangeError> {
        self.with_range(space, |range| range.at(lightness))?
    }

    /// The label color for the swatch at `lightness`.
    ///
    /// Picks between the ramp's dark and light reference colors by WCAG 2.1
    /// contrast; the light reference wins ties.
    pub fn contrast_color_at(&self, lightness: f64, space: Space) -> Result<Color, RangeError> {
        let color = self.color_at(lightness, space)?;

        let cached_dark = self.cache.borrow().dark;
        let dark = match cached_dark {
            Some(c) => c,
            None => {
                let c = self.color_at(self.config.dark_reference, space)?;
                self.cache.borrow_mut().dark = Some(c);
                c
            }
        };
        let cached_light = self.cache.borrow().light;
        let light = match cached_light {
            Some(c) => c,
            None => {
                let c = self.color_at(self.config.light_reference, space)?;
                self.cache.borrow_mut().light = Some(c);
                c
            }
        };

        Ok(higher_contrast(
            (dark, color.contrast_wcag21(&dark)),
            (light, color.contrast_wcag21(&light)),
        ))
    }

    /// sRGB hex colors approximating the ramp as a smooth gradient.
    pub fn gradient(&self, space: Space) -> Result<Vec<String>, RangeError> {
        self.with_range(space, |range| render_gradient(range.stops(), &self.config))
    }

    /// The gradient as a CSS `linear-gradient`.
    pub fn css_gradient(&self, space: Space) -> Result<String, RangeError> {
        self.gradient(space).map(|colors| css_linear_gradient(&colors))
    }
}

impl Clone for ColorRamp {
    /// Deep-copies the key colors; the clone starts with an empty cache.
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            key_colors: self.key_colors.clone(),
            config: self.config,
            cache: RefCell::new(RampCache::default()),
        }
    }
}

impl PartialEq for ColorRamp {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.key_colors == other.key_colors
    }
}

/// The reference with the higher contrast. Ties go to the light one.
fn higher_contrast(dark: (Color, f32), light: (Color, f32)) -> Color {
    if dark.1 > light.1 { dark.0 } else { light.0 }
}

fn random_color() -> Color {
    Color::new(
        Space::Srgb,
        [rand::random::<f32>(), rand::random::<f32>(), rand::random::<f32>()],
    )
}
