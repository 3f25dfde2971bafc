//! Stop naming.
//!
//! Lightness values get integer names on a 0–1000 scale. Coarse, round names are
//! preferred: every value first tries to land on a multiple of 100, then 50, then
//! 10, each within a tolerance that grows with the multiplier. When two values
//! want the same name, the closer one keeps it and the other retries at the next
//! finer multiplier. Whatever is left is rounded to the nearest integer.

use std::collections::HashMap;

use log::trace;

/// Name multipliers, largest first.
const MULTIPLIERS: [i64; 3] = [100, 50, 10];

/// The name of lightness 1 (0 when inverted).
const MAX_NAME: f64 = 1000.0;

fn threshold(multiplier: i64) -> f64 {
    (multiplier as f64).sqrt() * 3.0
}

/// Rounds half-way cases up.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[derive(Debug, Clone, Copy)]
struct Assignment {
    diff: f64,
    value: f64,
    index: usize,
}

/// Names each lightness value, preserving input order.
///
/// With `inverted`, names count from the light end (`1 - value`).
///
/// This is a best-effort labeling: values pushed all the way to the final rounding
/// pass are not checked against names already taken, so near-identical inputs can
/// share a name.
pub fn name_stops(lightness: &[f64], inverted: bool) -> Vec<String> {
    let map = |v: f64| if inverted { 1.0 - v } else { v };

    // (value, position in the input) pairs still waiting for a name.
    let mut pending: Vec<(f64, usize)> = lightness.iter().copied().zip(0..).collect();
    let mut named: HashMap<i64, Assignment> = HashMap::new();

    for multiplier in MULTIPLIERS {
        let threshold = threshold(multiplier);
        let m = multiplier as f64;

        let mut i = 0;
        while i < pending.len() {
            let (value, index) = pending[i];
            let scaled = map(value) * MAX_NAME;
            let name = round_half_up(scaled / m) as i64 * multiplier;
            let diff = (scaled - name as f64).abs();

            if diff > threshold {
                i += 1;
                continue;
            }

            match named.get_mut(&name) {
                Some(existing) => {
                    if diff < existing.diff {
                        let loser = *existing;
                        *existing = Assignment { diff, value, index };
                        pending[i] = (loser.value, loser.index);
                    }
                    i += 1;
                }
                None => {
                    named.insert(name, Assignment { diff, value, index });
                    pending.remove(i);
                }
            }
        }
        trace!("after multiplier {}: {} values unnamed", multiplier, pending.len());
    }

    let mut assigned: Vec<(i64, usize)> = named
        .into_iter()
        .map(|(name, assignment)| (name, assignment.index))
        .collect();
    for (value, index) in pending {
        assigned.push((round_half_up(map(value) * MAX_NAME) as i64, index));
    }

    assigned.sort_by_key(|&(_, index)| index);
    assigned.into_iter().map(|(name, _)| name.to_string()).collect()
}
