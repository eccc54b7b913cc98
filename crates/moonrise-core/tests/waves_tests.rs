use moonrise_core::{
    wave_z, PlaneGrid, WAVE_AMPLITUDE, WAVE_SPATIAL_FREQ, WAVE_X_TIME_FREQ_FAST,
    WAVE_X_TIME_FREQ_SLOW, WAVE_Y_TIME_FREQ,
};

const EPS: f32 = 1e-5;

#[test]
fn wave_is_a_sum_of_three_sines() {
    for &(x, y, t) in &[(0.0, 0.0, 0.0), (0.4, -0.2, 1.7), (-1.5, 0.75, 12.0)] {
        let expected = WAVE_AMPLITUDE * (WAVE_SPATIAL_FREQ * x + t * WAVE_X_TIME_FREQ_SLOW).sin()
            + WAVE_AMPLITUDE * (WAVE_SPATIAL_FREQ * x + t * WAVE_X_TIME_FREQ_FAST).sin()
            + WAVE_AMPLITUDE * (WAVE_SPATIAL_FREQ * y + t * WAVE_Y_TIME_FREQ).sin();
        assert!((wave_z(x, y, t) - expected).abs() < EPS);
    }
}

#[test]
fn wave_is_flat_at_the_origin_at_time_zero() {
    assert!(wave_z(0.0, 0.0, 0.0).abs() < EPS);
}

#[test]
fn grid_has_expected_resolution() {
    let grid = PlaneGrid::new(3.0, 1.5, 20, 32);
    assert_eq!(grid.vertices.len(), 21 * 33);
    assert_eq!(grid.indices.len(), 20 * 32 * 6);
    assert_eq!(grid.half_extents(), (1.5, 0.75));
}

#[test]
fn grid_vertices_span_the_rectangle() {
    let grid = PlaneGrid::new(3.0, 1.5, 4, 2);
    let first = grid.vertices.first().unwrap();
    let last = grid.vertices.last().unwrap();
    // first vertex: top-left corner, uv origin
    assert!((first.position[0] + 1.5).abs() < EPS);
    assert!((first.position[1] - 0.75).abs() < EPS);
    assert_eq!(first.uv, [0.0, 0.0]);
    // last vertex: bottom-right corner
    assert!((last.position[0] - 1.5).abs() < EPS);
    assert!((last.position[1] + 0.75).abs() < EPS);
    assert_eq!(last.uv, [1.0, 1.0]);
    // undeformed grid is flat
    assert!(grid.vertices.iter().all(|v| v.position[2] == 0.0));
}

#[test]
fn grid_indices_stay_in_bounds() {
    let grid = PlaneGrid::new(3.0, 1.5, 20, 32);
    let max = grid.vertices.len() as u32;
    assert!(grid.indices.iter().all(|&i| i < max));
}

#[test]
fn displacement_reads_base_vertices_and_never_accumulates() {
    let grid = PlaneGrid::new(3.0, 1.5, 8, 8);
    let mut out_a = Vec::new();
    let mut out_b = Vec::new();
    grid.displaced(2.5, &mut out_a);
    grid.displaced(2.5, &mut out_b);
    assert_eq!(out_a, out_b);

    for (base, moved) in grid.vertices.iter().zip(out_a.iter()) {
        assert_eq!(base.position[0], moved.position[0]);
        assert_eq!(base.position[1], moved.position[1]);
        assert_eq!(base.uv, moved.uv);
        assert_eq!(base.normal, moved.normal);
        let expected = wave_z(base.position[0], base.position[1], 2.5);
        assert!((moved.position[2] - expected).abs() < EPS);
    }
}
