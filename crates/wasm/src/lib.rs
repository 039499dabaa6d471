//! WASM bindings: build a shader program against a canvas's WebGL2 context.
//!
//! The whole module is gated on `wasm32` so the workspace builds on native
//! hosts; there the crate is intentionally empty.

#[cfg(target_arch = "wasm32")]
mod web {
    use shaderlink_core::{build_program, GpuContext, LinkedProgram, StageKind};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

    /// A linked shader program bound to the WebGL2 context it was built
    /// against.
    ///
    /// The context is acquired from the canvas in the constructor and kept
    /// alive for the lifetime of the handle; call [`destroy`](Self::destroy)
    /// to release the program object.
    #[wasm_bindgen]
    pub struct ProgramHandle {
        ctx: GpuContext,
        program: LinkedProgram,
    }

    #[wasm_bindgen]
    impl ProgramHandle {
        /// Acquires the canvas's WebGL2 context and builds a program from
        /// the given vertex and fragment sources.
        ///
        /// Compile and link failures surface as string `JsValue`s carrying
        /// the full diagnostic, including a numbered listing of the failing
        /// source.
        #[wasm_bindgen(constructor)]
        pub fn new(
            canvas: &HtmlCanvasElement,
            vertex_src: &str,
            fragment_src: &str,
        ) -> Result<ProgramHandle, JsValue> {
            let webgl2 = canvas
                .get_context("webgl2")?
                .ok_or_else(|| JsValue::from_str("webgl2 context is not available"))?
                .dyn_into::<WebGl2RenderingContext>()?;
            let ctx = GpuContext::new(glow::Context::from_webgl2_context(webgl2));

            let program = build_program(ctx.gl(), vertex_src, fragment_src)
                .map_err(|err| JsValue::from_str(&err.diagnostic()))?;

            Ok(ProgramHandle { ctx, program })
        }

        /// Returns whether the underlying context can compile compute
        /// stages (always false for WebGL2, which is ES 3.0).
        pub fn supports_compute(&self) -> bool {
            self.ctx.supports_stage(StageKind::Compute)
        }

        /// Releases the program object.
        pub fn destroy(self) {
            self.program.destroy(self.ctx.gl());
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::ProgramHandle;
