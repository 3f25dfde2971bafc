//! Color values and the memoizing color model.

use std::cell::OnceCell;
use std::fmt;
use std::str::FromStr;

use color::{AlphaColor, ColorSpace, ColorSpaceTag, DynamicColor, Lab, OpaqueColor, Rgba8};

use super::gamut;
use super::Space;
use crate::error::ParseError;

/// An immutable color: a space tag plus three coordinates.
///
/// For [`Space::Oklab`] and [`Space::OklabLr`] the first coordinate is lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    space: Space,
    coords: [f32; 3],
}

// Constructors
impl Color {
    pub const fn new(space: Space, coords: [f32; 3]) -> Self {
        Self { space, coords }
    }

    /// Parses any CSS color.
    ///
    /// sRGB-family inputs (hex, `rgb()`, `hsl()`, `hwb()`, named colors) are kept in
    /// sRGB; everything else is converted to Oklab.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_native(input).map(Self::from_native)
    }

    /// The working form of a parsed color.
    fn from_native(native: DynamicColor) -> Self {
        match native.cs {
            ColorSpaceTag::Srgb | ColorSpaceTag::Hsl | ColorSpaceTag::Hwb => {
                let [r, g, b, _] = native.to_alpha_color::<color::Srgb>().components;
                Self::new(Space::Srgb, [r, g, b])
            }
            _ => {
                let [l, a, b, _] = native.to_alpha_color::<color::Oklab>().components;
                Self::new(Space::Oklab, [l, a, b])
            }
        }
    }
}

// Accessors
impl Color {
    pub const fn space(&self) -> Space {
        self.space
    }

    pub const fn coords(&self) -> [f32; 3] {
        self.coords
    }

    /// The first coordinate, which is lightness in the perceptual spaces.
    pub const fn lightness(&self) -> f32 {
        self.coords[0]
    }
}

// Conversions
impl Color {
    /// Expresses the same color in another space.
    pub fn to(self, space: Space) -> Self {
        Self::new(space, self.space.convert(space, self.coords))
    }

    /// Replaces the lightness coordinate, keeping the other two.
    pub fn with_lightness(self, lightness: f32) -> Self {
        let [_, a, b] = self.coords;
        Self::new(self.space, [lightness, a, b])
    }

    /// Whether the color is displayable in `space`.
    pub fn in_gamut(&self, space: Space) -> bool {
        space.in_gamut(self.space.convert(space, self.coords))
    }

    /// Maps the color into the gamut of `space`, keeping this color's own space.
    pub fn to_gamut(&self, space: Space) -> Self {
        gamut::to_gamut(*self, space)
    }

    /// Linear interpolation in this color's space.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let other = other.to(self.space);
        let mut coords = self.coords;
        for (c, o) in coords.iter_mut().zip(other.coords) {
            *c += t * (o - *c);
        }
        Self::new(self.space, coords)
    }

    /// Gamut-maps into sRGB and formats as `#rrggbb`.
    pub fn to_srgb_hex(&self) -> String {
        srgb_hex(self.to_gamut(Space::Srgb))
    }

    /// Canonical string form in the color's own space, without gamut mapping.
    pub fn serialize(&self) -> String {
        serialize_native(&self.to_native())
    }

    /// The color as a `color` crate value. OklabLr has no CSS form and becomes Oklab.
    fn to_native(self) -> DynamicColor {
        match self.space {
            Space::Srgb => dynamic::<color::Srgb>(self.coords),
            Space::Oklab => dynamic::<color::Oklab>(self.coords),
            Space::OklabLr => dynamic::<color::Oklab>(self.to(Space::Oklab).coords),
        }
    }
}

// Metrics
impl Color {
    /// WCAG 2.1 relative luminance, clamped at zero.
    pub fn relative_luminance(&self) -> f32 {
        let [r, g, b] = self.space.to_linear_srgb(self.coords);
        (0.2126 * r + 0.7152 * g + 0.0722 * b).max(0.0)
    }

    /// WCAG 2.1 contrast ratio, always `>= 1`.
    pub fn contrast_wcag21(&self, other: &Self) -> f32 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        (hi + 0.05) / (lo + 0.05)
    }

    /// CIE76 color difference, measured in CIE Lab.
    pub fn delta_e76(&self, other: &Self) -> f32 {
        let a = Lab::from_linear_srgb(self.space.to_linear_srgb(self.coords));
        let b = Lab::from_linear_srgb(other.space.to_linear_srgb(other.coords));
        let [dl, da, db] = [a[0] - b[0], a[1] - b[1], a[2] - b[2]];
        (dl * dl + da * da + db * db).sqrt()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_native(input: &str) -> Result<DynamicColor, ParseError> {
    color::parse_color(input).map_err(|e| ParseError::new(input, e))
}

fn dynamic<CS: ColorSpace>([x, y, z]: [f32; 3]) -> DynamicColor {
    DynamicColor::from_alpha_color(AlphaColor::<CS>::new([x, y, z, 1.0]))
}

/// `#rrggbb` of a color already inside the sRGB gamut.
fn srgb_hex(color: Color) -> String {
    let coords = color.to(Space::Srgb).coords;
    hex(OpaqueColor::<color::Srgb>::new(coords).to_rgba8())
}

fn hex(rgba: Rgba8) -> String {
    format!("{rgba:x}")
}

/// CSS form in the value's own color space.
///
/// Named colors keep their name and opaque 8-bit sRGB becomes `#rrggbb`.
fn serialize_native(native: &DynamicColor) -> String {
    let [r, g, b, alpha] = native.components;
    if native.flags.color_name().is_none() && native.cs == ColorSpaceTag::Srgb && alpha == 1.0 {
        let channels = as_8bit([r, g, b]);
        if let Some([r, g, b]) = channels {
            return hex(Rgba8 { r, g, b, a: 255 });
        }
    }
    native.to_string()
}

/// Returns the 8-bit channels if the coordinates are exactly representable.
fn as_8bit(coords: [f32; 3]) -> Option<[u8; 3]> {
    let mut out = [0u8; 3];
    for (o, c) in out.iter_mut().zip(coords) {
        let scaled = c * 255.0;
        let rounded = scaled.round();
        if !(0.0..=255.0).contains(&rounded) || (scaled - rounded).abs() > 1e-3 {
            return None;
        }
        *o = rounded as u8;
    }
    Some(out)
}

/// A key color together with its memoized projections.
///
/// The color is kept as authored (`native`, in whatever CSS space it was written)
/// next to its working form. The gamut-mapped copies (one per space) and the hex
/// string are computed on first use and never change afterwards; a different color
/// means a new model.
#[derive(Debug)]
pub struct ColorModel {
    native: DynamicColor,
    color: Color,
    gamut: [OnceCell<Color>; 3],
    hex: OnceCell<String>,
}

impl ColorModel {
    pub fn new(color: Color) -> Self {
        Self::with_native(color.to_native(), color)
    }

    fn with_native(native: DynamicColor, color: Color) -> Self {
        Self {
            native,
            color,
            gamut: Default::default(),
            hex: OnceCell::new(),
        }
    }

    /// Parses a CSS color string into a model.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let native = parse_native(input)?;
        Ok(Self::with_native(native, Color::from_native(native)))
    }

    /// The wrapped color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The color mapped into the gamut of `space`, computed once per space.
    pub fn in_gamut(&self, space: Space) -> Color {
        *self.gamut[space.index()].get_or_init(|| self.color.to_gamut(space))
    }

    /// Lightness of the gamut-mapped color as seen in `space`.
    pub fn output_lightness(&self, space: Space) -> f32 {
        self.in_gamut(space).to(space).lightness()
    }

    /// Canonical string form in the color's native space, not gamut-mapped.
    pub fn serialize(&self) -> String {
        serialize_native(&self.native)
    }

    /// sRGB hex of the gamut-mapped color.
    pub fn to_srgb_hex(&self) -> String {
        self.hex
            .get_or_init(|| srgb_hex(self.in_gamut(Space::Srgb)))
            .clone()
    }
}

impl Clone for ColorModel {
    /// Copies the color; the clone starts with empty caches.
    fn clone(&self) -> Self {
        Self::with_native(self.native, self.color)
    }
}

impl PartialEq for ColorModel {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
    }
}

impl From<Color> for ColorModel {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}
