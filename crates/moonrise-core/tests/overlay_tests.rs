use moonrise_core::{OverlayFade, OVERLAY_FADE_DELAY_SEC, OVERLAY_FADE_SECONDS};

#[test]
fn overlay_stays_opaque_until_armed() {
    let mut fade = OverlayFade::new();
    assert_eq!(fade.alpha(), 1.0);
    fade.step(10.0);
    assert_eq!(fade.alpha(), 1.0);
    assert!(!fade.is_done());
}

#[test]
fn overlay_waits_out_the_delay() {
    let mut fade = OverlayFade::new();
    fade.begin();
    fade.step(OVERLAY_FADE_DELAY_SEC * 0.5);
    assert_eq!(fade.alpha(), 1.0);
}

#[test]
fn overlay_eases_out_quadratically() {
    let mut fade = OverlayFade::new();
    fade.begin();
    fade.step(OVERLAY_FADE_DELAY_SEC);
    // halfway through the fade: alpha = (1 - t)^2 = 0.25
    fade.step(OVERLAY_FADE_SECONDS * 0.5);
    assert!((fade.alpha() - 0.25).abs() < 1e-3);
}

#[test]
fn overlay_alpha_never_increases() {
    let mut fade = OverlayFade::new();
    fade.begin();
    let mut prev = fade.alpha();
    for _ in 0..100 {
        fade.step(0.05);
        let a = fade.alpha();
        assert!(a <= prev + 1e-6);
        prev = a;
    }
}

#[test]
fn overlay_reaches_zero_and_finishes() {
    let mut fade = OverlayFade::new();
    fade.begin();
    fade.step(OVERLAY_FADE_DELAY_SEC + OVERLAY_FADE_SECONDS + 0.01);
    assert_eq!(fade.alpha(), 0.0);
    assert!(fade.is_done());
}

#[test]
fn overlay_begin_is_idempotent() {
    let mut fade = OverlayFade::new();
    fade.begin();
    fade.step(OVERLAY_FADE_DELAY_SEC + 1.0);
    let mid = fade.alpha();
    // A second begin must not restart the delay or the fade
    fade.begin();
    fade.step(0.0);
    assert!((fade.alpha() - mid).abs() < 1e-6);
}
