//! Gamut mapping following CSS Color 4.
//!
//! Out-of-gamut colors keep their Oklab lightness and hue while chroma is reduced
//! until clipping the result is no longer perceptibly different.

use super::{Color, Space};

/// Just-noticeable difference in deltaEOK.
const JND: f32 = 0.02;
const EPSILON: f32 = 0.0001;

/// Maps `color` into the gamut of `space`, keeping the color's own space.
pub(crate) fn to_gamut(color: Color, space: Space) -> Color {
    if !space.is_bounded() {
        return color;
    }
    let target = color.space().convert(space, color.coords());
    if space.in_gamut(target) {
        return color;
    }
    let mapped = map_chroma(color, space);
    Color::new(space, mapped).to(color.space())
}

fn delta_eok(a: [f32; 3], b: [f32; 3]) -> f32 {
    let [dl, da, db] = [a[0] - b[0], a[1] - b[1], a[2] - b[2]];
    (dl * dl + da * da + db * db).sqrt()
}

fn map_chroma(color: Color, space: Space) -> [f32; 3] {
    let [l, a, b] = color.space().convert(Space::Oklab, color.coords());
    if l >= 1.0 {
        return Space::Oklab.convert(space, [1.0, 0.0, 0.0]);
    }
    if l <= 0.0 {
        return Space::Oklab.convert(space, [0.0, 0.0, 0.0]);
    }

    let chroma = a.hypot(b);
    let at_chroma = |c: f32| -> [f32; 3] {
        if chroma == 0.0 {
            [l, 0.0, 0.0]
        } else {
            [l, a * c / chroma, b * c / chroma]
        }
    };
    let clip_oklab = |oklab: [f32; 3]| -> [f32; 3] {
        space.clip(Space::Oklab.convert(space, oklab))
    };

    let mut current = [l, a, b];
    let mut clipped = clip_oklab(current);
    if delta_eok(space.convert(Space::Oklab, clipped), current) < JND {
        return clipped;
    }

    let mut min = 0.0_f32;
    let mut max = chroma;
    let mut min_in_gamut = true;
    while max - min > EPSILON {
        let c = (min + max) / 2.0;
        current = at_chroma(c);
        let candidate = Space::Oklab.convert(space, current);
        if min_in_gamut && space.in_gamut(candidate) {
            min = c;
            continue;
        }
        clipped = space.clip(candidate);
        let e = delta_eok(space.convert(Space::Oklab, clipped), current);
        if e < JND {
            if JND - e < EPSILON {
                break;
            }
            min_in_gamut = false;
            min = c;
        } else {
            max = c;
        }
    }
    clipped
}
