//! The continuous lightness → color function of a ramp.

use log::trace;

use crate::color::{Color, Space};
use crate::error::RangeError;

/// One interpolation interval of a ramp.
#[derive(Debug, Clone, Copy)]
struct Segment {
    start: f32,
    end: f32,
    from: Color,
    to: Color,
}

impl Segment {
    fn eval(&self, lightness: f32) -> Color {
        let t = if self.start != self.end {
            (lightness - self.start) / (self.end - self.start)
        } else {
            0.0
        };
        self.from.lerp(self.to, t)
    }
}

/// A piecewise-linear color function over lightness `[0, 1]`.
///
/// Built from key colors sorted by lightness in the target space, with synthesized
/// floor and ceiling stops at lightness 0 and 1. Every stop and every returned color
/// is expressed in the target space.
#[derive(Debug, Clone)]
pub struct RampRange {
    space: Space,
    stops: Vec<Color>,
    segments: Vec<Segment>,
}

impl RampRange {
    /// Builds the ramp function for `keys` in `space`.
    ///
    /// Key colors are converted, clamped to lightness `[0, 1]` and sorted. A floor stop
    /// borrowing the darkest key's chroma is added unless a key already sits at 0; a
    /// ceiling stop mirrors that at 1.
    pub fn build(keys: &[Color], space: Space) -> Result<Self, RangeError> {
        let mut stops: Vec<Color> = keys
            .iter()
            .map(|key| {
                let c = key.to(space);
                c.with_lightness(c.lightness().clamp(0.0, 1.0))
            })
            .collect();
        stops.sort_by(|a, b| a.lightness().total_cmp(&b.lightness()));

        let (Some(&first), Some(&last)) = (stops.first(), stops.last()) else {
            return Err(RangeError::NoKeyColors);
        };
        if first.lightness() != 0.0 {
            stops.insert(0, first.with_lightness(0.0));
        }
        if last.lightness() != 1.0 {
            stops.push(last.with_lightness(1.0));
        }

        let segments = stops
            .iter()
            .enumerate()
            .map(|(i, &stop)| match stops.get(i + 1) {
                Some(&next) if stop.lightness() != 1.0 => Segment {
                    start: stop.lightness(),
                    end: next.lightness(),
                    from: stop,
                    to: next,
                },
                _ => Segment {
                    start: stop.lightness(),
                    end: stop.lightness(),
                    from: stop,
                    to: stop,
                },
            })
            .collect::<Vec<_>>();

        trace!(
            "built {} ramp with {} stops from {} key colors",
            space,
            stops.len(),
            keys.len()
        );

        Ok(Self {
            space,
            stops,
            segments,
        })
    }

    /// The color at `lightness`.
    ///
    /// The covering segment is the last one whose start is at or below `lightness`.
    pub fn at(&self, lightness: f64) -> Result<Color, RangeError> {
        if !(0.0..=1.0).contains(&lightness) {
            return Err(RangeError::Uncovered(lightness));
        }
        let l = lightness as f32;
        let index = self.segments.partition_point(|s| s.start <= l);
        let segment = index
            .checked_sub(1)
            .and_then(|i| self.segments.get(i))
            .ok_or(RangeError::Uncovered(lightness))?;
        Ok(segment.eval(l))
    }

    /// The sorted stops, floor and ceiling included.
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// The space the ramp interpolates in.
    pub fn space(&self) -> Space {
        self.space
    }
}
