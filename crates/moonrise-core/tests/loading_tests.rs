use moonrise_core::{AssetError, LoadProgress};

#[test]
fn progress_counts_up_to_the_total() {
    let mut p = LoadProgress::new(3);
    assert!(!p.is_complete());
    assert_eq!(p.asset_loaded(), (1, 3));
    assert_eq!(p.asset_loaded(), (2, 3));
    assert_eq!(p.asset_loaded(), (3, 3));
    assert!(p.is_complete());
    // extra resolutions never overflow the total
    assert_eq!(p.asset_loaded(), (3, 3));
}

#[test]
fn stroke_offset_runs_from_100_to_0() {
    let mut p = LoadProgress::new(4);
    assert_eq!(p.stroke_offset(), 100.0);
    let _ = p.asset_loaded();
    assert_eq!(p.stroke_offset(), 75.0);
    let _ = p.asset_loaded();
    let _ = p.asset_loaded();
    let _ = p.asset_loaded();
    assert_eq!(p.stroke_offset(), 0.0);
}

#[test]
fn failure_blocks_completion() {
    let mut p = LoadProgress::new(2);
    let _ = p.asset_loaded();
    p.mark_failed();
    let _ = p.asset_loaded();
    assert!(p.failed());
    assert!(!p.is_complete());
}

#[test]
fn empty_manifest_is_already_complete() {
    let p = LoadProgress::new(0);
    assert!(p.is_complete());
    assert_eq!(p.fraction(), 1.0);
    assert_eq!(p.stroke_offset(), 0.0);
}

#[test]
fn asset_errors_carry_the_url() {
    let e = AssetError::Fetch {
        url: "/textures/moon.jpeg".into(),
        detail: "HTTP 404".into(),
    };
    let msg = e.to_string();
    assert!(msg.contains("/textures/moon.jpeg"));
    assert!(msg.contains("404"));

    let e = AssetError::EmptyModel {
        url: "/models/astronaut.glb".into(),
    };
    assert!(e.to_string().contains("no renderable mesh"));
}
