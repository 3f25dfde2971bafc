//! Gradient rendering.
//!
//! Adjacent ramp stops are subdivided until neighbouring colors are at most
//! `max_delta_e` apart, then serialized as sRGB hex.

use crate::color::{Color, Space};
use crate::config::RampConfig;

/// Colors approximating the smooth gradient through `stops`.
///
/// Each pair of stops contributes its subdivision minus the last color, so shared
/// boundaries appear once; the final stop closes the list.
pub fn render_gradient(stops: &[Color], config: &RampConfig) -> Vec<String> {
    let Some(last) = stops.last() else {
        return Vec::new();
    };
    let mut colors = Vec::new();
    for pair in stops.windows(2) {
        let segment = steps(pair[0], pair[1], config);
        let keep = segment.len().saturating_sub(1);
        colors.extend(segment[..keep].iter().map(Color::to_srgb_hex));
    }
    colors.push(last.to_srgb_hex());
    colors
}

/// Wraps colors into a left-to-right CSS gradient.
pub fn css_linear_gradient(colors: &[String]) -> String {
    format!("linear-gradient(to right, {})", colors.join(", "))
}

/// Black to white (or white to black) interpolated in `space`.
pub fn lightness_gradient(space: Space, inverted: bool, config: &RampConfig) -> Vec<String> {
    let black = Color::new(Space::Srgb, [0.0; 3]).to(space);
    let white = Color::new(Space::Srgb, [1.0; 3]).to(space);
    let (start, end) = if inverted { (white, black) } else { (black, white) };
    steps(start, end, config)
        .iter()
        .map(Color::to_srgb_hex)
        .collect()
}

/// Interpolates `from` → `to` in `from`'s space with bounded perceptual steps.
///
/// Always returns at least the two endpoints.
pub fn steps(from: Color, to: Color, config: &RampConfig) -> Vec<Color> {
    let bound = config.max_delta_e;
    let count = if bound > 0.0 {
        let total = from.delta_e76(&to);
        ((total / bound).ceil() as usize + 1).max(2)
    } else {
        2
    };
    let count = count.min(config.max_gradient_steps.max(2));

    let mut samples: Vec<(f32, Color)> = (0..count)
        .map(|i| {
            let t = i as f32 / (count - 1) as f32;
            (t, from.lerp(to, t))
        })
        .collect();

    if bound > 0.0 {
        loop {
            let mut max_delta = 0.0_f32;
            let mut i = 1;
            while i < samples.len() {
                let (prev_t, prev) = samples[i - 1];
                let (cur_t, cur) = samples[i];
                let delta = prev.delta_e76(&cur);
                if delta > bound && samples.len() < config.max_gradient_steps {
                    let mid_t = (prev_t + cur_t) / 2.0;
                    let mid = from.lerp(to, mid_t);
                    max_delta = max_delta
                        .max(prev.delta_e76(&mid))
                        .max(mid.delta_e76(&cur));
                    samples.insert(i, (mid_t, mid));
                    i += 2;
                } else {
                    max_delta = max_delta.max(delta);
                    i += 1;
                }
            }
            if max_delta <= bound || samples.len() >= config.max_gradient_steps {
                break;
            }
        }
    }

    samples.into_iter().map(|(_, c)| c).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_colors_give_two_steps() {
        let c = Color::new(Space::Oklab, [0.5, 0.05, 0.05]);
        let s = steps(c, c, &RampConfig::default());
        assert_eq!(s.len(), 2);
        assert_eq!(s[0], s[1]);
    }

    #[test]
    fn test_steps_are_bounded() {
        let config = RampConfig::default();
        let black = Color::new(Space::Oklab, [0.0, 0.0, 0.0]);
        let white = Color::new(Space::Oklab, [1.0, 0.0, 0.0]);
        let s = steps(black, white, &config);
        assert!(s.len() > 30);
        for pair in s.windows(2) {
            assert!(pair[0].delta_e76(&pair[1]) <= config.max_delta_e + 1e-3);
        }
    }

    #[test]
    fn test_step_cap() {
        let config = RampConfig::default().with_max_gradient_steps(5);
        let black = Color::new(Space::Oklab, [0.0, 0.0, 0.0]);
        let white = Color::new(Space::Oklab, [1.0, 0.0, 0.0]);
        assert!(steps(black, white, &config).len() <= 5);
    }

    #[test]
    fn test_css_wrapper() {
        let colors = vec!["#000000".to_string(), "#ffffff".to_string()];
        assert_eq!(
            css_linear_gradient(&colors),
            "linear-gradient(to right, #000000, #ffffff)"
        );
    }
}
