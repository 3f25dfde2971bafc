//! Color values, color spaces and the metrics the ramp pipeline needs.
//!
//! Coordinates are stored as `f32` triples tagged with a [`Space`]. Conversions and
//! the sRGB transfer functions come from the `color` crate; the revised-lightness
//! Oklab variant is registered with it as [`OklabLr`].

mod gamut;
mod model;
mod space;

pub use model::{Color, ColorModel};
pub use space::{OklabLr, Space, lr_from_oklab_l, oklab_l_from_lr};
