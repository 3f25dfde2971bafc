use evolved_lib::color::{Color, ColorModel, Space, lr_from_oklab_l, oklab_l_from_lr};

// ============================================================================
// Lightness transform
// ============================================================================

#[test]
fn test_lr_fixed_points() {
    assert!(lr_from_oklab_l(0.0).abs() < 1e-6);
    assert!((lr_from_oklab_l(1.0) - 1.0).abs() < 1e-5);
    assert!(oklab_l_from_lr(0.0).abs() < 1e-6);
    assert!((oklab_l_from_lr(1.0) - 1.0).abs() < 1e-5);
}

#[test]
fn test_lr_roundtrip() {
    for i in 0..=100 {
        let x = i as f32 / 100.0;
        assert!((lr_from_oklab_l(oklab_l_from_lr(x)) - x).abs() < 1e-4, "{x}");
        assert!((oklab_l_from_lr(lr_from_oklab_l(x)) - x).abs() < 1e-4, "{x}");
    }
}

#[test]
fn test_lr_darkens_midtones() {
    assert!(lr_from_oklab_l(0.5) < 0.5);
}

#[test]
fn test_oklab_lr_keeps_chroma() {
    let oklab = Color::new(Space::Oklab, [0.6, 0.1, -0.05]);
    let lr = oklab.to(Space::OklabLr);
    assert_eq!(lr.coords()[1], 0.1);
    assert_eq!(lr.coords()[2], -0.05);
    let back = lr.to(Space::Oklab);
    assert!((back.lightness() - 0.6).abs() < 1e-5);
}

// ============================================================================
// Parsing and serialization
// ============================================================================

#[test]
fn test_parse_keeps_srgb_inputs() {
    for input in ["#3366cc", "rgb(51 102 204)", "hsl(220 60% 50%)", "rebeccapurple"] {
        assert_eq!(Color::parse(input).unwrap().space(), Space::Srgb, "{input}");
    }
    assert_eq!(Color::parse("oklch(0.6 0.1 250)").unwrap().space(), Space::Oklab);
}

#[test]
fn test_hex_serializes_lowercase() {
    assert_eq!(Color::parse("#3366CC").unwrap().serialize(), "#3366cc");
    assert_eq!(Color::parse("#3366cc").unwrap().to_string(), "#3366cc");
}

#[test]
fn test_parse_error_keeps_input() {
    let err = Color::parse("definitely-not-a-color").unwrap_err();
    assert_eq!(err.input, "definitely-not-a-color");
}

// ============================================================================
// Gamut
// ============================================================================

#[test]
fn test_srgb_gamut() {
    let vivid = Color::new(Space::Oklab, [0.7, 0.3, 0.0]);
    assert!(!vivid.in_gamut(Space::Srgb));
    assert!(vivid.in_gamut(Space::Oklab));

    let mapped = vivid.to_gamut(Space::Srgb);
    assert_eq!(mapped.space(), Space::Oklab);
    assert!(mapped.in_gamut(Space::Srgb));
    assert!((mapped.lightness() - 0.7).abs() < 0.02);
}

#[test]
fn test_extreme_lightness_maps_to_black_and_white() {
    let over = Color::new(Space::Oklab, [1.2, 0.1, 0.1]);
    let under = Color::new(Space::Oklab, [-0.1, 0.1, 0.1]);
    assert_eq!(over.to_srgb_hex(), "#ffffff");
    assert_eq!(under.to_srgb_hex(), "#000000");
}

#[test]
fn test_model_memoizes_hex() {
    let model = ColorModel::parse("#3366cc").unwrap();
    assert_eq!(model.to_srgb_hex(), "#3366cc");
    assert_eq!(model.to_srgb_hex(), "#3366cc");
    assert!((model.output_lightness(Space::Oklab) - model.color().to(Space::Oklab).lightness()).abs() < 1e-6);
}

// ============================================================================
// Metrics
// ============================================================================

#[test]
fn test_contrast_black_white() {
    let black = Color::parse("#000000").unwrap();
    let white = Color::parse("#ffffff").unwrap();
    assert!((black.contrast_wcag21(&white) - 21.0).abs() < 0.01);
    assert!((white.contrast_wcag21(&black) - 21.0).abs() < 0.01);
    assert!((white.contrast_wcag21(&white) - 1.0).abs() < 1e-6);
}

#[test]
fn test_delta_e_black_white() {
    let black = Color::parse("#000000").unwrap();
    let white = Color::parse("#ffffff").unwrap();
    assert!((black.delta_e76(&white) - 100.0).abs() < 0.1);
    assert_eq!(black.delta_e76(&black), 0.0);
}

#[test]
fn test_oklab_lr_works_with_color_crate() {
    use evolved_lib::color::OklabLr;

    let grey = color::OpaqueColor::<OklabLr>::new([0.5, 0.0, 0.0]);
    let oklab = grey.convert::<color::Oklab>();
    assert!((oklab.components[0] - oklab_l_from_lr(0.5)).abs() < 1e-4);

    let back = oklab.convert::<OklabLr>();
    assert!((back.components[0] - 0.5).abs() < 1e-4);
}
