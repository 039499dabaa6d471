//! Pass-through vertex shader constant for screen-aligned quads.
//!
//! Drawing a full-canvas effect only needs a vertex stage that forwards a
//! 2D clip-space position attribute; the fragment stage does all the work.
//! This constant is that vertex stage, ready to hand to
//! [`build_program`](crate::build_program) alongside any fragment source.

/// GLSL ES 3.0 vertex shader that forwards a `vec2` position attribute.
///
/// Expects clip-space positions in the `pos` attribute, e.g. the four
/// corners of a screen-filling quad drawn as a triangle fan. Depth is fixed
/// at 0 and `w` at 1, so positions pass through perspective division
/// unchanged.
pub const PASSTHROUGH_VERTEX_SHADER: &str = r#"#version 300 es
in vec2 pos;
void main() {
    gl_Position = vec4(pos, 0.0, 1.0);
}
"#;
