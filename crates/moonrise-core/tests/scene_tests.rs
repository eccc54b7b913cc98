use glam::{Vec3, Vec4};
use moonrise_core::{
    Camera, SceneState, THUMBNAIL_COUNT, THUMBNAIL_HOVER_OPACITY, THUMBNAIL_IDLE_OPACITY,
};

const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;

fn scene() -> SceneState {
    SceneState::new(WIDTH, HEIGHT, 1.0, 0.0)
}

/// Project a world point into drawable pixel coordinates.
fn project(camera: &Camera, world: Vec3) -> (f32, f32) {
    let clip = camera.view_proj() * Vec4::from((world, 1.0));
    let ndc = clip.truncate() / clip.w;
    (
        (ndc.x + 1.0) * 0.5 * WIDTH,
        (1.0 - ndc.y) * 0.5 * HEIGHT,
    )
}

#[test]
fn camera_aspect_follows_the_viewport() {
    let mut s = scene();
    assert!((s.camera().aspect - WIDTH / HEIGHT).abs() < 1e-5);
    s.set_viewport(1024.0, 512.0);
    assert!((s.camera().aspect - 2.0).abs() < 1e-5);
}

#[test]
fn center_ray_looks_down_negative_z() {
    let s = scene();
    let (ro, rd) = s
        .camera()
        .screen_to_world_ray(WIDTH * 0.5, HEIGHT * 0.5, WIDTH, HEIGHT);
    assert!((ro - Vec3::new(0.0, 0.0, 14.0)).length() < 1e-4);
    assert!((rd - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-3);
}

#[test]
fn scrolling_moves_ring_and_model_together() {
    let mut s = scene();
    let before = s.thumbnails()[0];
    s.set_scroll(800.0);
    let after = s.thumbnails()[0];
    assert!((before.position - after.position).length() > 0.1);
    assert!(s.model_pose().spin_y > 0.0);
    assert_eq!(s.thumbnails().len(), THUMBNAIL_COUNT);
}

#[test]
fn pointer_over_a_thumbnail_highlights_exactly_that_one() {
    let mut s = scene();
    let center = s.thumbnails()[0].position;
    let (sx, sy) = project(s.camera(), center);

    s.pointer_moved(sx, sy);
    assert_eq!(s.hovered(), Some(0));
    assert_eq!(s.thumbnail_opacity(0), THUMBNAIL_HOVER_OPACITY);
    for i in 1..THUMBNAIL_COUNT {
        assert_eq!(s.thumbnail_opacity(i), THUMBNAIL_IDLE_OPACITY);
    }
}

#[test]
fn pointer_miss_restores_the_previous_highlight() {
    let mut s = scene();
    let center = s.thumbnails()[0].position;
    let (sx, sy) = project(s.camera(), center);
    s.pointer_moved(sx, sy);
    assert_eq!(s.hovered(), Some(0));

    // Top-left corner: nothing there, so the highlight must drop back
    s.pointer_moved(1.0, 1.0);
    assert_eq!(s.hovered(), None);
    for i in 0..THUMBNAIL_COUNT {
        assert_eq!(s.thumbnail_opacity(i), THUMBNAIL_IDLE_OPACITY);
    }
}

#[test]
fn pixel_ratio_is_clamped_into_the_ring_math() {
    // dpr 3 clamps to 2; the x coordinate of thumbnail 0 at the top of
    // the page scales accordingly
    let s = SceneState::new(WIDTH, HEIGHT, 3.0, 0.0);
    assert_eq!(s.pixel_ratio(), 2.0);
    assert!((s.thumbnails()[0].position.x - 18.0).abs() < 1e-2);
}
