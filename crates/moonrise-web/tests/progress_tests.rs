// Host-side tests for the pure DOM style helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod progress {
    include!("../src/progress.rs");
}

use progress::*;

#[test]
fn stroke_offset_style_formats_the_dashoffset() {
    assert_eq!(stroke_offset_style(100.0), "stroke-dashoffset:100.00");
    assert_eq!(stroke_offset_style(0.0), "stroke-dashoffset:0.00");
    assert_eq!(stroke_offset_style(37.5), "stroke-dashoffset:37.50");
}

#[test]
fn opacity_style_formats_the_opacity() {
    assert_eq!(opacity_style(0.0), "opacity:0");
    assert_eq!(opacity_style(1.0), "opacity:1");
}

#[test]
fn overflow_release_restores_vertical_scrolling() {
    assert_eq!(overflow_release_style(), "overflow-y:visible");
}
