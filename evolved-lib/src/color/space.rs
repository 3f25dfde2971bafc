//! Color space adapters.

use color::{ColorSpace, Oklab};

/// Tolerance for sRGB gamut membership.
const GAMUT_EPSILON: f32 = 0.000_075;

const K1: f32 = 0.206;
const K2: f32 = 0.03;
const K3: f32 = (1.0 + K1) / (1.0 + K2);

/// Converts Oklab lightness to the revised lightness estimate `Lr`.
///
/// See <https://bottosson.github.io/posts/colorpicker/#intermission---a-new-lightness-estimate-for-oklab>.
pub fn lr_from_oklab_l(l: f32) -> f32 {
    let k3l = K3 * l;
    let d = k3l - K1;
    (d + (d * d + 4.0 * K2 * k3l).max(0.0).sqrt()) / 2.0
}

/// Converts the revised lightness estimate `Lr` back to Oklab lightness.
pub fn oklab_l_from_lr(lr: f32) -> f32 {
    lr * (lr + K1) / (K3 * (lr + K2))
}

/// Oklab with its lightness axis replaced by the revised estimate `Lr`.
///
/// The `a` and `b` axes are untouched, so chroma and hue match Oklab exactly.
#[derive(Clone, Copy, Debug)]
pub struct OklabLr;

impl ColorSpace for OklabLr {
    const WHITE_COMPONENTS: [f32; 3] = [1., 0., 0.];

    fn to_linear_srgb([lr, a, b]: [f32; 3]) -> [f32; 3] {
        Oklab::to_linear_srgb([oklab_l_from_lr(lr), a, b])
    }

    fn from_linear_srgb(src: [f32; 3]) -> [f32; 3] {
        let [l, a, b] = Oklab::from_linear_srgb(src);
        [lr_from_oklab_l(l), a, b]
    }

    fn scale_chroma([l, a, b]: [f32; 3], scale: f32) -> [f32; 3] {
        [l, a * scale, b * scale]
    }

    fn clip([l, a, b]: [f32; 3]) -> [f32; 3] {
        [l.clamp(0., 1.), a, b]
    }
}

/// The color spaces a color can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    /// Gamma-encoded sRGB, channels in `[0, 1]` when displayable.
    Srgb,
    /// Oklab.
    Oklab,
    /// Oklab with revised lightness.
    OklabLr,
}

impl Space {
    pub const ALL: [Space; 3] = [Space::Srgb, Space::Oklab, Space::OklabLr];

    /// Stable identifier.
    pub const fn id(self) -> &'static str {
        match self {
            Space::Srgb => "srgb",
            Space::Oklab => "oklab",
            Space::OklabLr => "oklab_lr",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Space::Srgb => 0,
            Space::Oklab => 1,
            Space::OklabLr => 2,
        }
    }

    /// Whether the space has a lightness axis at coordinate 0.
    pub const fn is_perceptual(self) -> bool {
        !matches!(self, Space::Srgb)
    }

    /// Whether some coordinates fall outside the space's gamut.
    pub const fn is_bounded(self) -> bool {
        matches!(self, Space::Srgb)
    }

    /// Converts coordinates in this space to linear sRGB.
    pub fn to_linear_srgb(self, coords: [f32; 3]) -> [f32; 3] {
        match self {
            Space::Srgb => color::Srgb::to_linear_srgb(coords),
            Space::Oklab => Oklab::to_linear_srgb(coords),
            Space::OklabLr => OklabLr::to_linear_srgb(coords),
        }
    }

    /// Converts linear sRGB coordinates into this space.
    pub fn from_linear_srgb(self, coords: [f32; 3]) -> [f32; 3] {
        match self {
            Space::Srgb => color::Srgb::from_linear_srgb(coords),
            Space::Oklab => Oklab::from_linear_srgb(coords),
            Space::OklabLr => OklabLr::from_linear_srgb(coords),
        }
    }

    /// Converts coordinates from this space into `target`.
    pub fn convert(self, target: Space, coords: [f32; 3]) -> [f32; 3] {
        let [x, y, z] = coords;
        match (self, target) {
            (from, to) if from == to => coords,
            (Space::Oklab, Space::OklabLr) => [lr_from_oklab_l(x), y, z],
            (Space::OklabLr, Space::Oklab) => [oklab_l_from_lr(x), y, z],
            (from, to) => to.from_linear_srgb(from.to_linear_srgb(coords)),
        }
    }

    /// Whether the coordinates lie inside this space's gamut.
    pub fn in_gamut(self, coords: [f32; 3]) -> bool {
        match self {
            Space::Srgb => coords
                .iter()
                .all(|c| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(c)),
            Space::Oklab | Space::OklabLr => true,
        }
    }

    /// Clamps coordinates into the space's gamut without any perceptual correction.
    pub fn clip(self, coords: [f32; 3]) -> [f32; 3] {
        match self {
            Space::Srgb => coords.map(|c| c.clamp(0.0, 1.0)),
            Space::Oklab | Space::OklabLr => coords,
        }
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
