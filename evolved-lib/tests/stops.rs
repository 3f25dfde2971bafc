use evolved_lib::preset::builtin_curves;
use evolved_lib::stops::{MAX_STOPS, StopType, direction_label};
use evolved_lib::{Curve, StopsConfig, sample_stops};

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
    }
}

// ============================================================================
// Bézier sampling
// ============================================================================

#[test]
fn test_linear_curve_samples_evenly() {
    let stops = StopsConfig::bezier(5, Curve::linear());
    assert_close(&sample_stops(&stops, false), &[0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn test_inverted_reverses_order() {
    let stops = StopsConfig::bezier(5, Curve::linear());
    assert_close(&sample_stops(&stops, true), &[1.0, 0.75, 0.5, 0.25, 0.0]);
}

#[test]
fn test_skip_extremes() {
    let stops = StopsConfig::Bezier {
        num_stops: 3,
        curve: Curve::linear(),
        skip_extremes: Some(true),
    };
    assert_close(&sample_stops(&stops, false), &[0.25, 0.5, 0.75]);
}

#[test]
fn test_degenerate_counts() {
    assert_close(&sample_stops(&StopsConfig::bezier(1, Curve::linear()), false), &[0.5]);
    assert!(sample_stops(&StopsConfig::bezier(0, Curve::linear()), false).is_empty());
}

#[test]
fn test_default_curve_spans_full_range() {
    let curve = builtin_curves()["default"].content;
    let values = sample_stops(&StopsConfig::bezier(13, curve), false);
    assert_eq!(values.len(), 13);
    assert!(values[0].abs() < 1e-12);
    assert!((values[12] - 1.0).abs() < 1e-12);
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
}

// ============================================================================
// Manual stops
// ============================================================================

#[test]
fn test_manual_values_verbatim() {
    let stops = StopsConfig::manual(vec![0.9, 0.1, 0.5]);
    assert_eq!(sample_stops(&stops, false), vec![0.9, 0.1, 0.5]);
    assert_eq!(sample_stops(&stops, true), vec![0.9, 0.1, 0.5]);
}

// ============================================================================
// Curve
// ============================================================================

#[test]
fn test_curve_endpoints() {
    let curve = builtin_curves()["default"].content;
    let start = curve.evaluate(0.0);
    let end = curve.evaluate(1.0);
    assert_eq!((start.x, start.y), (0.0, 0.0));
    assert!((end.x - 1.0).abs() < 1e-12 && (end.y - 1.0).abs() < 1e-12);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_bezier_json_shape() {
    let json = serde_json::to_value(StopsConfig::bezier(3, Curve::linear())).unwrap();
    assert_eq!(json["type"], "bezier");
    assert_eq!(json["numStops"], 3);
    assert_eq!(json["curve"].as_array().map(Vec::len), Some(4));
    assert!(json.get("skipExtremes").is_none());
}

#[test]
fn test_manual_json_parses() {
    let stops: StopsConfig =
        serde_json::from_str(r#"{"type": "manual", "values": [0.1, 0.5, 0.9]}"#).unwrap();
    assert_eq!(stops, StopsConfig::manual(vec![0.1, 0.5, 0.9]));
    assert_eq!(stops.stop_type(), StopType::Manual);
}

#[test]
fn test_bezier_json_parses() {
    let stops: StopsConfig = serde_json::from_str(
        r#"{
            "type": "bezier",
            "numStops": 4,
            "skipExtremes": true,
            "curve": [{"x": 0, "y": 0}, {"x": 0.3, "y": 0.1}, {"x": 0.6, "y": 0.9}, {"x": 1, "y": 1}]
        }"#,
    )
    .unwrap();
    match stops {
        StopsConfig::Bezier {
            num_stops,
            skip_extremes,
            ..
        } => {
            assert_eq!(num_stops, 4);
            assert_eq!(skip_extremes, Some(true));
        }
        other => panic!("expected bezier, got {other:?}"),
    }
}

#[test]
fn test_huge_stop_count_is_capped() {
    let stops: StopsConfig = serde_json::from_str(
        r#"{
            "type": "bezier",
            "numStops": 1000000000000000000,
            "curve": [{"x": 0, "y": 0}, {"x": 0, "y": 0}, {"x": 1, "y": 1}, {"x": 1, "y": 1}]
        }"#,
    )
    .unwrap();
    let values = sample_stops(&stops, false);
    assert_eq!(values.len(), MAX_STOPS);
    assert!((values[0] - 0.0).abs() < 1e-9);
    assert!((values[MAX_STOPS - 1] - 1.0).abs() < 1e-9);
}

// ============================================================================
// Labels
// ============================================================================

#[test]
fn test_display_labels() {
    assert_eq!(StopType::Bezier.label(), "Bézier");
    assert_eq!(StopType::Manual.label(), "Manual");
    assert_eq!(direction_label(false), "dark → light");
    assert_eq!(direction_label(true), "light → dark");
}
