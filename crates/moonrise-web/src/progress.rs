// Pure style strings applied to the splash/progress DOM nodes; kept free
// of web-sys types so they test host-side.

/// Inline style advancing the circular progress stroke.
pub fn stroke_offset_style(offset: f32) -> String {
    format!("stroke-dashoffset:{:.2}", offset)
}

/// Inline style fading a loading element.
pub fn opacity_style(opacity: f32) -> String {
    format!("opacity:{}", opacity)
}

/// Inline style restoring vertical scrolling on the body once loading
/// finishes.
pub fn overflow_release_style() -> &'static str {
    "overflow-y:visible"
}
