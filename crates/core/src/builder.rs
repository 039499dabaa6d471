//! Compiling shader stages and linking them into programs.
//!
//! The entry point is [`build_program`]: two stage sources in, one linked
//! program out, or a [`ShaderError`]. Intermediate shader objects are
//! released on every exit path, so the context's object table holds no
//! stray objects whether the build succeeds or fails.
//!
//! Everything here is a synchronous, blocking call into the driver. Nothing
//! suspends or spawns work, and no state is shared between calls; the
//! caller must ensure exclusive, non-reentrant access to the context for
//! the duration of each call.

use crate::error::ShaderError;
use crate::source::ShaderSource;
use crate::stage::StageKind;

/// A compiled shader stage, not yet linked into a program.
///
/// Transient by design: during [`build_program`] it is created, attached,
/// and released before the call returns. Holders on the standalone
/// [`compile_stage`] path must eventually call [`release`](Self::release);
/// the handle has no destructor of its own.
pub struct CompiledStage {
    kind: StageKind,
    shader: glow::Shader,
}

impl CompiledStage {
    /// The stage this shader was compiled as.
    pub fn kind(&self) -> StageKind {
        self.kind
    }

    /// The underlying shader object handle.
    pub fn raw(&self) -> glow::Shader {
        self.shader
    }

    /// Deletes the underlying shader object.
    #[allow(unsafe_code)]
    pub fn release(self, gl: &glow::Context) {
        use glow::HasContext;

        // SAFETY: self.shader is a valid handle from compile_stage, and
        // consuming self rules out a double delete.
        unsafe { gl.delete_shader(self.shader) };
    }
}

/// A validated, linked, ready-to-use program object.
///
/// Only constructed after both stages compiled and the link status query
/// reported success; a partially-linked program never escapes this module.
/// Ownership lies with the caller, which is responsible for eventual
/// [`destroy`](Self::destroy).
pub struct LinkedProgram {
    program: glow::Program,
}

impl LinkedProgram {
    /// The underlying program object handle, e.g. for `gl.use_program`.
    pub fn raw(&self) -> glow::Program {
        self.program
    }

    /// Deletes the underlying program object.
    #[allow(unsafe_code)]
    pub fn destroy(self, gl: &glow::Context) {
        use glow::HasContext;

        // SAFETY: self.program is a valid handle from link_stages.
        unsafe { gl.delete_program(self.program) };
    }
}

/// Compiles a single shader stage.
///
/// Allocates a shader object of the source's stage kind, uploads the text,
/// requests synchronous compilation, and queries the compile status. The
/// shader object is deleted before an error is returned, so no handle leaks
/// from a failed call.
///
/// # Errors
///
/// Returns `ShaderError::Compile` carrying the stage, the driver's info
/// log, and the original source text if allocation or compilation fails.
#[allow(unsafe_code)]
pub fn compile_stage(
    gl: &glow::Context,
    source: &ShaderSource<'_>,
) -> Result<CompiledStage, ShaderError> {
    use glow::HasContext;

    let kind = source.kind();

    // SAFETY: glow wraps raw GL calls as unsafe. The shader type comes from
    // StageKind::to_gl, so it is always a valid stage constant; the handle
    // is deleted on the failure path below.
    let shader = unsafe {
        gl.create_shader(kind.to_gl())
            .map_err(|log| ShaderError::Compile {
                stage: kind,
                log,
                source: source.text().to_string(),
            })?
    };

    unsafe {
        gl.shader_source(shader, source.text());
        gl.compile_shader(shader);
    }

    if unsafe { gl.get_shader_compile_status(shader) } {
        Ok(CompiledStage { kind, shader })
    } else {
        let log = unsafe { gl.get_shader_info_log(shader) };
        unsafe { gl.delete_shader(shader) };
        Err(ShaderError::Compile {
            stage: kind,
            log,
            source: source.text().to_string(),
        })
    }
}

/// Links a compiled vertex and fragment stage into a program.
///
/// Attaches both stages, links, and detaches them again -- the program
/// keeps its own copies, so the stage handles stay valid and reusable
/// afterwards. A failed program object is deleted before the error returns.
///
/// # Errors
///
/// Returns `ShaderError::Link` with the linker's info log if allocation or
/// linking fails.
#[allow(unsafe_code)]
pub fn link_stages(
    gl: &glow::Context,
    vertex: &CompiledStage,
    fragment: &CompiledStage,
) -> Result<LinkedProgram, ShaderError> {
    use glow::HasContext;

    // SAFETY: glow wraps raw GL calls as unsafe. Both stage handles come
    // from compile_stage; the program handle is deleted on link failure.
    let program = unsafe { gl.create_program().map_err(|log| ShaderError::Link { log })? };

    unsafe {
        gl.attach_shader(program, vertex.raw());
        gl.attach_shader(program, fragment.raw());
        gl.link_program(program);

        // Detach regardless of link outcome; the program owns copies.
        gl.detach_shader(program, vertex.raw());
        gl.detach_shader(program, fragment.raw());
    }

    if unsafe { gl.get_program_link_status(program) } {
        Ok(LinkedProgram { program })
    } else {
        let log = unsafe { gl.get_program_info_log(program) };
        unsafe { gl.delete_program(program) };
        Err(ShaderError::Link { log })
    }
}

/// Compiles a vertex and a fragment source and links them into a program.
///
/// A single linear pipeline: two compile exits and one link step. Stage
/// handles are released on every path -- when the fragment compile fails
/// after the vertex succeeded, and after the link step succeeds or fails
/// alike. Once linked, the program holds its own copies of the stages, so
/// the per-stage handles are redundant and freed immediately.
///
/// # Errors
///
/// Returns `ShaderError::Compile` if either stage fails to compile
/// (identifying which), or `ShaderError::Link` if linking fails.
pub fn build_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<LinkedProgram, ShaderError> {
    let vertex = compile_stage(gl, &ShaderSource::new(StageKind::Vertex, vertex_src)?)?;

    let fragment = match ShaderSource::new(StageKind::Fragment, fragment_src)
        .and_then(|src| compile_stage(gl, &src))
    {
        Ok(stage) => stage,
        Err(err) => {
            vertex.release(gl);
            return Err(err);
        }
    };

    let result = link_stages(gl, &vertex, &fragment);

    vertex.release(gl);
    fragment.release(gl);

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    // compile_stage / link_stages / build_program need a live GL context,
    // so those tests are ignored. Run with
    // `cargo test -- --ignored` under an EGL/osmesa headless setup.

    const VERTEX_SRC: &str =
        "#version 300 es\nin vec2 pos;\nvoid main() { gl_Position = vec4(pos, 0.0, 1.0); }";
    const FRAGMENT_SRC: &str = "#version 300 es\nprecision mediump float;\nout vec4 color;\nvoid main() { color = vec4(1.0); }";

    #[test]
    fn builder_api_has_expected_shape() {
        // Compile-time check that the public API exists with the intended
        // signatures. This test passes if the module compiles.
        fn _assert_api(gl: &glow::Context, src: &ShaderSource<'_>) {
            let stage: Result<CompiledStage, ShaderError> = compile_stage(gl, src);
            if let Ok(stage) = stage {
                let _kind: StageKind = stage.kind();
                let _raw: glow::Shader = stage.raw();
                stage.release(gl);
            }
            let program: Result<LinkedProgram, ShaderError> =
                build_program(gl, VERTEX_SRC, FRAGMENT_SRC);
            if let Ok(program) = program {
                let _raw: glow::Program = program.raw();
                program.destroy(gl);
            }
        }
    }

    #[test]
    #[ignore = "requires GL context"]
    fn build_program_links_valid_sources() {
        // Would test: build_program(gl, VERTEX_SRC, FRAGMENT_SRC) returns a
        // LinkedProgram, and the context's object table holds only the
        // program (both stage shaders deleted).
    }

    #[test]
    #[ignore = "requires GL context"]
    fn vertex_compile_failure_identifies_vertex_stage() {
        // Would test: invalid vertex source fails with Compile { stage:
        // Vertex, .. } before any fragment shader or program is created.
    }

    #[test]
    #[ignore = "requires GL context"]
    fn fragment_compile_failure_releases_vertex_handle() {
        // Would test: VERTEX_SRC plus a fragment source with a missing
        // semicolon fails with Compile { stage: Fragment, .. } with a
        // non-empty log, and the already-compiled vertex shader is deleted.
    }

    #[test]
    #[ignore = "requires GL context"]
    fn link_failure_releases_both_stage_handles() {
        // Would test: two individually valid sources with mismatched
        // varyings fail with Link and a non-empty log, and both stage
        // shaders plus the failed program object are deleted.
    }

    #[test]
    #[ignore = "requires GL context"]
    fn repeated_failure_yields_identical_errors() {
        // Would test: calling build_program twice with the same invalid
        // inputs produces the same error kind and equivalent log text.
    }
}
