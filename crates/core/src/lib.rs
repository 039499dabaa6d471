#![deny(unsafe_code)]
//! Shader compilation and program linking for WebGL2 / OpenGL via `glow`.
//!
//! Turns raw GLSL source for a vertex and a fragment stage into a
//! validated, linked [`LinkedProgram`], or a structured [`ShaderError`]
//! carrying the failing stage, the driver log, and the original source.
//! Intermediate shader objects are released on every path, success or
//! failure, so the context's object table is never left with strays.
//!
//! The graphics context is always an explicit parameter; acquiring it (from
//! a canvas, a window, or a headless surface) and fetching source text are
//! the caller's concern.

pub mod builder;
pub mod context;
pub mod error;
pub mod passthrough;
pub mod source;
pub mod stage;

pub use builder::{build_program, compile_stage, link_stages, CompiledStage, LinkedProgram};
pub use context::GpuContext;
pub use error::{format_diagnostic, ShaderError};
pub use passthrough::PASSTHROUGH_VERTEX_SHADER;
pub use source::ShaderSource;
pub use stage::StageKind;
