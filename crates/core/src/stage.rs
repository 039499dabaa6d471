//! Shader stage kinds.
//!
//! A stage is one unit of a GPU program (vertex, fragment, compute) that is
//! compiled independently before linking. `StageKind` is the typed stand-in
//! for the raw GL shader-type constants, so a wrong or mistyped stage
//! constant cannot reach the driver.

use serde::{Deserialize, Serialize};

/// The kind of a single shader stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    /// Per-vertex processing stage.
    Vertex,
    /// Per-fragment (pixel) processing stage.
    Fragment,
    /// Compute stage. Requires an ES 3.1+ or GL 4.3+ context; see
    /// [`GpuContext::supports_stage`](crate::GpuContext::supports_stage).
    Compute,
}

impl StageKind {
    /// Returns the matching `glow` shader-type constant.
    pub fn to_gl(self) -> u32 {
        match self {
            StageKind::Vertex => glow::VERTEX_SHADER,
            StageKind::Fragment => glow::FRAGMENT_SHADER,
            StageKind::Compute => glow::COMPUTE_SHADER,
        }
    }

    /// Returns the lowercase stage name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            StageKind::Vertex => "vertex",
            StageKind::Fragment => "fragment",
            StageKind::Compute => "compute",
        }
    }
}

impl std::fmt::Display for StageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
