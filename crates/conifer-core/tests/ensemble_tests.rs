// Host-side tests for the ensemble, instance packing and frame clock.

use conifer_core::*;
use glam::{Vec3, Vec4};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn ensemble(count: usize) -> Ensemble {
    Ensemble::with_rng(MorphConfig::with_count(count), &mut StdRng::seed_from_u64(5))
        .expect("default config is valid")
}

#[test]
fn new_ensemble_starts_scattered() {
    let e = ensemble(100);
    assert_eq!(e.len(), 101);
    assert_eq!(e.target_mode(), TargetMode::Scattered);
    assert_eq!(e.progress(), 0.0);
    assert_eq!(e.transforms().len(), 101);
    assert_eq!(e.colors().len(), 101);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = MorphConfig {
        tree_height: 0.0,
        ..MorphConfig::default()
    };
    assert!(matches!(
        Ensemble::new(cfg),
        Err(ConfigError::NonPositive {
            name: "tree_height",
            ..
        })
    ));
}

#[test]
fn toggle_flips_the_target_and_drives_progress() {
    let mut e = ensemble(50);
    e.toggle_mode();
    assert_eq!(e.target_mode(), TargetMode::Structured);
    let mut elapsed = 0.0;
    for _ in 0..600 {
        elapsed += 1.0 / 60.0;
        e.update(1.0 / 60.0, elapsed);
    }
    assert_eq!(e.progress(), 1.0);

    e.toggle_mode();
    assert_eq!(e.target_mode(), TargetMode::Scattered);
    elapsed += 1.0 / 60.0;
    e.update(1.0 / 60.0, elapsed);
    assert!(e.progress() < 1.0);
}

#[test]
fn setting_the_same_mode_twice_is_harmless() {
    let mut e = ensemble(10);
    e.set_target_mode(TargetMode::Structured);
    e.set_target_mode(TargetMode::Structured);
    assert_eq!(e.target_mode(), TargetMode::Structured);
    assert_eq!(e.progress(), 0.0);
}

#[test]
fn regenerate_keeps_progress_and_count() {
    let mut e = ensemble(200);
    e.set_target_mode(TargetMode::Structured);
    for i in 1..=30 {
        e.update(1.0 / 60.0, i as f32 / 60.0);
    }
    let progress = e.progress();
    let structured = e.attributes().structured().to_vec();
    let scattered = e.attributes().scattered().to_vec();

    e.regenerate_with_rng(&mut StdRng::seed_from_u64(6));
    assert_eq!(e.progress(), progress);
    assert_eq!(e.len(), 201);
    assert_eq!(e.transforms().len(), 201);
    assert_eq!(e.attributes().structured(), structured.as_slice());
    assert_ne!(e.attributes().scattered(), scattered.as_slice());
}

#[test]
fn instance_record_layout_matches_the_shader() {
    assert_eq!(InstanceRaw::SIZE, 80);
    assert_eq!(std::mem::align_of::<InstanceRaw>(), 4);
}

#[test]
fn packed_instances_mirror_transforms_and_colors() {
    let mut e = ensemble(40);
    e.update(1.0 / 60.0, 0.25);
    let mut buf = InstanceBuffer::with_capacity(e.len());
    let packed = buf.pack(e.transforms(), e.colors()).to_vec();
    assert_eq!(packed.len(), e.len());
    for ((raw, t), c) in packed.iter().zip(e.transforms()).zip(e.colors()) {
        assert_eq!(raw.model, t.matrix().to_cols_array_2d());
        assert_eq!(Vec4::from(raw.color), c.extend(1.0));
    }
    assert_eq!(buf.as_bytes().len(), e.len() * InstanceRaw::SIZE);
}

#[test]
fn instance_buffer_is_reused_between_frames() {
    let mut e = ensemble(300);
    let mut buf = InstanceBuffer::with_capacity(e.len());
    e.update(1.0 / 60.0, 0.0);
    let ptr = buf.pack(e.transforms(), e.colors()).as_ptr();
    for frame in 1..60 {
        e.update(1.0 / 60.0, frame as f32 / 60.0);
        let packed = buf.pack(e.transforms(), e.colors());
        assert_eq!(packed.as_ptr(), ptr);
    }
}

#[test]
fn instance_buffer_follows_the_shorter_input() {
    let transforms = vec![Transform::default(); 5];
    let colors = vec![Vec3::ONE; 3];
    let mut buf = InstanceBuffer::default();
    assert_eq!(buf.pack(&transforms, &colors).len(), 3);
    assert_eq!(buf.pack(&transforms, &[]).len(), 0);
    assert!(buf.is_empty());
}

#[test]
fn clock_clamps_long_frames() {
    let mut clock = FrameClock::with_max_delta(0.1);
    let (dt, elapsed) = clock.step(Duration::from_millis(16));
    assert!((dt - 0.016).abs() < 1e-6);
    assert!((elapsed - 0.016).abs() < 1e-6);

    let (dt, elapsed) = clock.step(Duration::from_secs(3));
    assert_eq!(dt, 0.1);
    assert!((elapsed - 0.116).abs() < 1e-5);
    assert_eq!(clock.frame(), 2);
}

#[test]
fn clock_elapsed_is_monotonic() {
    let mut clock = FrameClock::new();
    let mut prev = clock.elapsed();
    for _ in 0..10 {
        let (dt, elapsed) = clock.tick();
        assert!(dt >= 0.0 && dt <= MAX_FRAME_DELTA_SEC);
        assert!(elapsed >= prev);
        prev = elapsed;
    }
}

#[test]
fn orbiting_camera_looks_at_the_origin() {
    let cam = Camera::orbiting(0.0, CAMERA_DISTANCE, CAMERA_HEIGHT, 16.0 / 9.0);
    assert_eq!(cam.eye, Vec3::new(0.0, CAMERA_HEIGHT, CAMERA_DISTANCE));
    let clip = cam.view_proj() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    // the look-at target projects to the center of the screen
    assert!(ndc.x.abs() < 1e-5);
    assert!(ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn target_mode_values_and_toggle() {
    assert_eq!(TargetMode::Scattered.target_value(), 0.0);
    assert_eq!(TargetMode::Structured.target_value(), 1.0);
    assert_eq!(TargetMode::Scattered.toggled(), TargetMode::Structured);
    assert_eq!(TargetMode::Structured.toggled(), TargetMode::Scattered);
    let state = AnimationState::new(TargetMode::Structured);
    assert_eq!(state.progress, 1.0);
    assert!(state.is_settled());
}
