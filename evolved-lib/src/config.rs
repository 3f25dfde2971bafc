//! Ramp configuration

/// Tunable constants of the ramp pipeline.
///
/// # Example
///
/// ```
/// use evolved_lib::config::RampConfig;
///
/// let config = RampConfig::default()
///     .with_dark_reference(0.25)
///     .with_max_delta_e(2.0);
/// assert_eq!(config.light_reference, 0.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampConfig {
    /// Ramp lightness of the dark label color.
    ///
    /// Default: 0.3
    pub dark_reference: f64,

    /// Ramp lightness of the light label color.
    ///
    /// Default: 0.9
    pub light_reference: f64,

    /// Largest CIE76 difference allowed between adjacent gradient colors.
    ///
    /// Default: 3.0
    pub max_delta_e: f32,

    /// Upper bound on the colors generated for a single gradient segment.
    ///
    /// Default: 1000
    pub max_gradient_steps: usize,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            dark_reference: 0.3,
            light_reference: 0.9,
            max_delta_e: 3.0,
            max_gradient_steps: 1000,
        }
    }
}

impl RampConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dark label reference lightness.
    pub fn with_dark_reference(mut self, lightness: f64) -> Self {
        self.dark_reference = lightness;
        self
    }

    /// Sets the light label reference lightness.
    pub fn with_light_reference(mut self, lightness: f64) -> Self {
        self.light_reference = lightness;
        self
    }

    /// Sets the gradient step bound.
    pub fn with_max_delta_e(mut self, max_delta_e: f32) -> Self {
        self.max_delta_e = max_delta_e;
        self
    }

    /// Sets the gradient step cap.
    pub fn with_max_gradient_steps(mut self, steps: usize) -> Self {
        self.max_gradient_steps = steps;
        self
    }
}
