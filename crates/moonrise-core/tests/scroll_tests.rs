use moonrise_core::{
    scroll_phase, ModelPose, MODEL_SCALE, MODEL_Z_MAX, SCROLL_DIVISOR,
};
use std::f32::consts::FRAC_PI_2;

const EPS: f32 = 1e-4;

#[test]
fn phase_is_linear_remap_of_scroll_offset() {
    for s in [0.0, 125.0, 250.0, 1000.0, 9999.0] {
        let expected = s / SCROLL_DIVISOR - FRAC_PI_2;
        assert!((scroll_phase(s) - expected).abs() < EPS, "offset {}", s);
    }
}

#[test]
fn phase_at_page_top_is_minus_half_pi() {
    assert!((scroll_phase(0.0) + FRAC_PI_2).abs() < EPS);
}

#[test]
fn model_spin_tracks_raw_scroll_offset() {
    let pose = ModelPose::from_scroll(630.0);
    assert!((pose.spin_y - 1.0).abs() < EPS);

    let pose = ModelPose::from_scroll(0.0);
    assert!(pose.spin_y.abs() < EPS);
}

#[test]
fn model_position_follows_phase() {
    let s = 500.0;
    let p = scroll_phase(s);
    let pose = ModelPose::from_scroll(s);
    assert!(pose.position.x.abs() < EPS);
    assert!((pose.position.y - (-p / 10.0 - 6.0)).abs() < EPS);
    assert!((pose.position.z - (p / 3.0 + 1.0)).abs() < EPS);
}

#[test]
fn model_depth_stops_at_far_limit() {
    // Far enough that the unclamped depth would exceed the limit
    let pose = ModelPose::from_scroll(50_000.0);
    assert!((pose.position.z - MODEL_Z_MAX).abs() < EPS);

    // And it never exceeds the limit for any larger offset
    let mut prev_z = f32::MIN;
    for s in (0..200).map(|i| i as f32 * 500.0) {
        let z = ModelPose::from_scroll(s).position.z;
        assert!(z <= MODEL_Z_MAX + EPS, "offset {} escaped the clamp", s);
        assert!(z >= prev_z - EPS, "depth went backwards at offset {}", s);
        prev_z = z;
    }
}

#[test]
fn model_matrix_applies_uniform_scale_about_position() {
    let pose = ModelPose::from_scroll(0.0);
    let m = pose.matrix();
    let origin = m.transform_point3(glam::Vec3::ZERO);
    assert!((origin - pose.position).length() < EPS);

    // A unit offset shrinks by the model scale (spin is 0 here)
    let unit_x = m.transform_point3(glam::Vec3::X);
    assert!((unit_x - pose.position - glam::Vec3::X * MODEL_SCALE).length() < EPS);
}
