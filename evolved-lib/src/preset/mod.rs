//! Named presets
//!
//! A preset is a named, id-keyed piece of content. Curves ship a built-in set and
//! users can save their own, persisted through a [`PresetStorage`].

mod storage;

pub use storage::{PresetStorage, PresetSubscription};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::stops::{Curve, Point};

/// Storage key of the user curve presets.
pub const CURVES_KEY: &str = "evolved_palettes:curves";

/// Tolerance used when matching a curve against presets.
pub const CURVE_MATCH_TOLERANCE: f64 = 1e-6;

/// A named piece of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset<T> {
    pub id: String,
    pub name: String,
    pub content: T,
}

impl<T> Preset<T> {
    /// Creates a preset with a fresh random id.
    pub fn new(name: impl Into<String>, content: T) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, content)
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>, content: T) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content,
        }
    }
}

/// Presets keyed by id.
pub type Presets<T> = HashMap<String, Preset<T>>;

/// The presets ordered by name, then id.
pub fn preset_list<T>(presets: &Presets<T>) -> Vec<&Preset<T>> {
    let mut list: Vec<_> = presets.values().collect();
    list.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    list
}

/// Curves that ship with the library.
pub fn builtin_curves() -> Presets<Curve> {
    let default = Preset::with_id(
        "default",
        "Default",
        Curve::new([
            Point::new(0.0, 0.0),
            Point::new(0.41225165562913907, 0.16428571428571426),
            Point::new(0.6473509933774835, 0.8928571428571429),
            Point::new(1.0, 1.0),
        ]),
    );
    let linear = Preset::with_id("linear", "Linear", Curve::linear());
    [default, linear]
        .into_iter()
        .map(|preset| (preset.id.clone(), preset))
        .collect()
}

/// The first preset, searching `lists` in order, whose curve matches `curve`.
pub fn find_curve_preset<'a>(
    curve: &Curve,
    lists: &[&'a [&'a Preset<Curve>]],
) -> Option<&'a Preset<Curve>> {
    lists
        .iter()
        .flat_map(|list| list.iter().copied())
        .find(|preset| preset.content.approx_eq(curve, CURVE_MATCH_TOLERANCE))
}
