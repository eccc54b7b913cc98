use glam::Vec3;
use moonrise_core::{
    ring_transforms, scroll_phase, ThumbnailTransform, RING_ANGLE_STEP, RING_RADIUS, RING_ROLL_GAIN,
    RING_Y_STEP, THUMBNAIL_COUNT,
};
use std::f32::consts::FRAC_PI_2;

const EPS: f32 = 1e-4;

#[test]
fn positions_match_the_closed_form() {
    for &phase in &[-FRAC_PI_2, 0.0, 1.3, 4.0] {
        for &dpr in &[1.0, 1.5, 2.0] {
            for i in 0..THUMBNAIL_COUNT {
                let tf = ThumbnailTransform::at(i, phase, dpr);
                let angle = i as f32 * RING_ANGLE_STEP - phase;
                let expected = Vec3::new(
                    RING_RADIUS * angle.sin() * dpr,
                    RING_Y_STEP * (-(i as f32) * RING_ANGLE_STEP + phase) * dpr,
                    RING_RADIUS * angle.cos(),
                );
                assert!(
                    (tf.position - expected).length() < EPS,
                    "i={} phase={} dpr={}",
                    i,
                    phase,
                    dpr
                );
            }
        }
    }
}

#[test]
fn first_thumbnail_at_page_top() {
    // scrollY = 0 puts thumbnail 0 at roughly (9, -7.85*dpr, 0)
    let phase = scroll_phase(0.0);
    let dpr = 1.0;
    let tf = ThumbnailTransform::at(0, phase, dpr);
    assert!((tf.position.x - 9.0).abs() < 1e-3);
    assert!((tf.position.y - (-7.85)).abs() < 1e-2);
    assert!(tf.position.z.abs() < 1e-3);
}

#[test]
fn planes_face_the_ring_axis() {
    for i in 0..THUMBNAIL_COUNT {
        let tf = ThumbnailTransform::at(i, 0.7, 1.0);
        // Roll happens about the local depth axis, so the transformed +Z
        // still points from the plane toward the axis at its own height.
        let facing = tf.matrix().transform_vector3(Vec3::Z);
        let to_axis = Vec3::new(-tf.position.x, 0.0, -tf.position.z).normalize();
        assert!(
            (facing - to_axis).length() < 1e-3,
            "thumbnail {} looks away from the axis",
            i
        );
    }
}

#[test]
fn roll_is_squared_sine_of_the_angular_offset() {
    for i in 0..THUMBNAIL_COUNT {
        let phase = 2.1;
        let tf = ThumbnailTransform::at(i, phase, 1.0);
        let angle = i as f32 * RING_ANGLE_STEP - phase;
        let expected = RING_ROLL_GAIN * angle.sin().abs().powi(2);
        assert!((tf.roll - expected).abs() < EPS);
    }
}

#[test]
fn ring_has_one_transform_per_thumbnail() {
    let ring = ring_transforms(0.0, 2.0);
    assert_eq!(ring.len(), THUMBNAIL_COUNT);
    assert_eq!(ring[3], ThumbnailTransform::at(3, 0.0, 2.0));
}
