//! GPU context wrapper with stage capability detection.
//!
//! `GpuContext` wraps a `glow::Context` and records, once at construction,
//! which stage kinds the context can compile. The context is always passed
//! explicitly -- never held in a global -- so the builder stays testable in
//! isolation and usable against multiple contexts in one process.

use crate::stage::StageKind;

/// Wraps a `glow::Context` together with the stage kinds it can compile.
///
/// Vertex and fragment stages are part of every GL / GL ES profile this
/// crate targets. Compute stages need an ES 3.1+ or GL 4.3+ context, which
/// is detected here so callers can fail fast instead of getting an opaque
/// driver error from shader creation.
pub struct GpuContext {
    gl: glow::Context,
    supports_compute: bool,
}

impl GpuContext {
    /// Wraps `gl`, querying its version once to detect compute support.
    pub fn new(gl: glow::Context) -> Self {
        use glow::HasContext;

        let version = gl.version();
        let supports_compute = if version.is_embedded {
            (version.major, version.minor) >= (3, 1)
        } else {
            (version.major, version.minor) >= (4, 3)
        };

        Self {
            gl,
            supports_compute,
        }
    }

    /// Returns a reference to the underlying `glow::Context`.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Consumes this wrapper and returns the underlying `glow::Context`.
    pub fn into_gl(self) -> glow::Context {
        self.gl
    }

    /// Returns whether the context can compile shaders of `kind`.
    pub fn supports_stage(&self, kind: StageKind) -> bool {
        match kind {
            StageKind::Vertex | StageKind::Fragment => true,
            StageKind::Compute => self.supports_compute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // GpuContext requires a live GL context, so integration tests are ignored.

    #[test]
    fn gpu_context_struct_compiles_with_expected_api() {
        // Compile-time check that the public API exists.
        // This test passes if the module compiles.
        fn _assert_api(ctx: &GpuContext) {
            let _gl: &glow::Context = ctx.gl();
            let _vertex: bool = ctx.supports_stage(StageKind::Vertex);
            let _compute: bool = ctx.supports_stage(StageKind::Compute);
        }
    }

    #[test]
    #[ignore = "requires GL context"]
    fn vertex_and_fragment_are_always_supported() {
        // Would test: supports_stage returns true for Vertex and Fragment
        // on any context GpuContext::new accepts.
    }

    #[test]
    #[ignore = "requires GL context"]
    fn compute_support_follows_context_version() {
        // Would test: supports_stage(Compute) is true on ES 3.1+ / GL 4.3+
        // and false on a WebGL2 (ES 3.0) context.
    }
}
