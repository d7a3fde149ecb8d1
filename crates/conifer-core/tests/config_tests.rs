// Host-side tests for configuration defaults and validation.

use conifer_core::*;
use glam::Vec3;

#[test]
fn defaults_are_valid() {
    let cfg = MorphConfig::default();
    assert_eq!(cfg.validate(), Ok(()));
    assert_eq!(cfg.count, DEFAULT_COUNT);
    assert_eq!(cfg.total_count(), DEFAULT_COUNT + 1);
    assert_eq!(cfg.relaxation, Relaxation::Exponential);
}

#[test]
fn zero_count_is_valid() {
    assert_eq!(MorphConfig::with_count(0).validate(), Ok(()));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Scale range is usable and the apex stands out
    assert!(SCALE_MIN > 0.0 && SCALE_MIN <= SCALE_MAX);
    assert!(APEX_SCALE > SCALE_MAX);

    // Breathing calms down as the tree assembles, apex barely moves
    assert!(FLOAT_AMPLITUDE_STRUCTURED < FLOAT_AMPLITUDE_SCATTERED);
    assert!(APEX_FLOAT_AMPLITUDE < FLOAT_AMPLITUDE_SCATTERED);
    assert!(APEX_FLOAT_FREQUENCY < FLOAT_FREQUENCY);

    // Scattered particles shrink but never vanish
    assert!(SCATTERED_SCALE_FACTOR > 0.0 && SCATTERED_SCALE_FACTOR < 1.0);

    // Spiral step near the golden angle, away from rational multiples of pi
    let golden = std::f32::consts::PI * (3.0 - 5.0f32.sqrt());
    assert!((SPIRAL_INCREMENT - golden).abs() < 0.01);

    // The cloud is wider than the tree it assembles into
    assert!(SCATTER_RADIUS > TREE_RADIUS);
    assert!((0.0..=1.0).contains(&ACCENT_PROBABILITY));
    assert!(ANIM_SPEED > 0.0);

    // Camera sits outside the scattered cloud
    assert!(CAMERA_DISTANCE > SCATTER_RADIUS);
}

#[test]
fn apex_position_sits_above_the_tip() {
    let cfg = MorphConfig::default();
    assert_eq!(
        cfg.apex_position(),
        Vec3::new(0.0, cfg.tree_height / 2.0 + cfg.apex_offset, 0.0)
    );
}

#[test]
fn rejects_non_positive_dimensions() {
    let cases: [(&str, fn(&mut MorphConfig)); 4] = [
        ("scatter_radius", |c| c.scatter_radius = 0.0),
        ("tree_height", |c| c.tree_height = -1.0),
        ("tree_radius", |c| c.tree_radius = f32::NAN),
        ("anim_speed", |c| c.anim_speed = f32::INFINITY),
    ];
    for (name, edit) in cases {
        let mut cfg = MorphConfig::default();
        edit(&mut cfg);
        match cfg.validate() {
            Err(ConfigError::NonPositive { name: n, .. }) => assert_eq!(n, name),
            other => panic!("{name}: unexpected {other:?}"),
        }
    }
}

#[test]
fn rejects_non_finite_offsets() {
    let mut cfg = MorphConfig::default();
    cfg.apex_offset = f32::NAN;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonFinite {
            name: "apex_offset",
            ..
        })
    ));

    let mut cfg = MorphConfig::default();
    cfg.motion.spin_rate = f32::INFINITY;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonFinite {
            name: "spin_rate",
            ..
        })
    ));
}

#[test]
fn rejects_bad_scale_range() {
    for range in [(0.0, 1.0), (1.5, 1.0), (-1.0, 1.0), (0.5, f32::NAN)] {
        let cfg = MorphConfig {
            scale_range: range,
            ..MorphConfig::default()
        };
        assert!(
            matches!(cfg.validate(), Err(ConfigError::ScaleRange { .. })),
            "{range:?}"
        );
    }
}

#[test]
fn rejects_bad_palettes() {
    let mut cfg = MorphConfig::default();
    cfg.colors.base.clear();
    cfg.colors.accent.clear();
    assert_eq!(cfg.validate(), Err(ConfigError::EmptyPalette));

    let mut cfg = MorphConfig::default();
    cfg.colors.accent_probability = 1.5;
    assert_eq!(cfg.validate(), Err(ConfigError::AccentProbability(1.5)));

    let mut cfg = MorphConfig::default();
    cfg.colors.accent.push(Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::ColorOutOfRange([2.0, 0.0, 0.0]))
    );
}

#[test]
fn rejects_bad_apex_params() {
    let mut cfg = MorphConfig::default();
    cfg.apex_params.scale = 0.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonPositive {
            name: "apex_scale",
            ..
        })
    ));

    let mut cfg = MorphConfig::default();
    cfg.apex_params.scatter_jitter = f32::NAN;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonFinite {
            name: "apex_scatter_jitter",
            ..
        })
    ));

    let mut cfg = MorphConfig::default();
    cfg.apex_params.color = Vec3::new(1.0, -0.1, 0.0);
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::ColorOutOfRange([1.0, -0.1, 0.0]))
    );
}

#[test]
fn apex_params_default_to_the_named_constants() {
    let apex = ApexParams::default();
    assert_eq!(apex.scale, APEX_SCALE);
    assert_eq!(apex.color, Vec3::from(APEX_COLOR));
    assert_eq!(apex.scatter_lift, APEX_SCATTER_LIFT);
    assert_eq!(apex.scatter_jitter, APEX_SCATTER_JITTER);
}

#[test]
fn one_empty_sub_palette_is_allowed() {
    let mut cfg = MorphConfig::default();
    cfg.colors.accent.clear();
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn errors_render_readable_messages() {
    let err = ConfigError::NonPositive {
        name: "tree_height",
        value: -1.0,
    };
    assert_eq!(
        err.to_string(),
        "tree_height must be finite and positive, got -1"
    );
    assert_eq!(ConfigError::EmptyPalette.to_string(), "palette has no colors");
}
