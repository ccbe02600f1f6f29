/// WebGL side of the scene: buffer upload, static state and per-frame submit
use spincube_core::{
    Animator, DepthFunc, DrawCall, FrameUpdate, IndexType, Primitive, Scene, SceneConfig,
};
use wasm_bindgen::prelude::*;
use web_sys::{WebGlBuffer, WebGlRenderingContext as GL};

use crate::canvas::Surface;
use crate::error::RenderError;
use crate::program::CubeProgram;

fn static_buffer(
    gl: &GL,
    target: u32,
    bytes: &[u8],
    what: &'static str,
) -> Result<WebGlBuffer, RenderError> {
    let buffer = gl.create_buffer().ok_or(RenderError::ResourceCreation(what))?;
    gl.bind_buffer(target, Some(&buffer));
    gl.buffer_data_with_u8_array(target, bytes, GL::STATIC_DRAW);
    Ok(buffer)
}

fn bind_vec3_attribute(gl: &GL, buffer: &WebGlBuffer, location: u32) {
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
    gl.vertex_attrib_pointer_with_i32(location, 3, GL::FLOAT, false, 0, 0);
    gl.enable_vertex_attrib_array(location);
}

fn gl_depth_func(func: DepthFunc) -> u32 {
    match func {
        DepthFunc::LessOrEqual => GL::LEQUAL,
    }
}

fn gl_primitive(primitive: Primitive) -> u32 {
    match primitive {
        Primitive::Triangles => GL::TRIANGLES,
    }
}

fn gl_index_type(index_type: IndexType) -> u32 {
    match index_type {
        IndexType::UnsignedShort => GL::UNSIGNED_SHORT,
    }
}

fn clear_mask(draw: &DrawCall) -> u32 {
    let mut mask = 0;
    if draw.clear_color {
        mask |= GL::COLOR_BUFFER_BIT;
    }
    if draw.clear_depth {
        mask |= GL::DEPTH_BUFFER_BIT;
    }
    mask
}

/// GPU resources for the cube, ready to draw
pub struct GpuScene {
    gl: GL,
    program: CubeProgram,
    // Kept so the buffers live as long as the scene
    _vertex_buffer: WebGlBuffer,
    _color_buffer: WebGlBuffer,
    _index_buffer: WebGlBuffer,
}

impl GpuScene {
    /// Upload geometry, build the program and set all static state.
    pub fn init(gl: GL, scene: &Scene) -> Result<Self, RenderError> {
        let mesh = scene.mesh();
        let vertex_buffer = static_buffer(
            &gl,
            GL::ARRAY_BUFFER,
            bytemuck::cast_slice(mesh.positions),
            "vertex buffer",
        )?;
        let color_buffer = static_buffer(
            &gl,
            GL::ARRAY_BUFFER,
            bytemuck::cast_slice(mesh.colors),
            "color buffer",
        )?;
        let index_buffer = static_buffer(
            &gl,
            GL::ELEMENT_ARRAY_BUFFER,
            bytemuck::cast_slice(mesh.indices),
            "index buffer",
        )?;

        let program = CubeProgram::build(&gl)?;
        bind_vec3_attribute(&gl, &vertex_buffer, program.position);
        bind_vec3_attribute(&gl, &color_buffer, program.color);
        gl.use_program(Some(&program.program));

        let [r, g, b, a] = scene.clear_color();
        gl.clear_color(r, g, b, a);
        gl.clear_depth(scene.clear_depth());
        let viewport = scene.viewport();
        gl.viewport(viewport.x, viewport.y, viewport.width, viewport.height);
        gl.depth_func(gl_depth_func(scene.depth_func()));

        gl.uniform_matrix4fv_with_f32_array(
            Some(&program.projection),
            false,
            scene.projection().as_slice(),
        );
        gl.uniform_matrix4fv_with_f32_array(
            Some(&program.view),
            false,
            scene.view().as_slice(),
        );
        gl.uniform_matrix4fv_with_f32_array(
            Some(&program.model),
            false,
            scene.model().as_slice(),
        );

        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&index_buffer));
        log::info!(
            "uploaded {} vertices, {} indices; viewport {}x{}",
            mesh.vertex_count(),
            mesh.index_count(),
            viewport.width,
            viewport.height
        );

        Ok(Self {
            gl,
            program,
            _vertex_buffer: vertex_buffer,
            _color_buffer: color_buffer,
            _index_buffer: index_buffer,
        })
    }

    /// Upload the frame's model matrix and draw.
    pub fn submit(&self, update: &FrameUpdate) {
        let gl = &self.gl;
        gl.uniform_matrix4fv_with_f32_array(
            Some(&self.program.model),
            false,
            update.model.as_slice(),
        );

        let draw = &update.draw;
        if draw.depth_test {
            gl.enable(GL::DEPTH_TEST);
        }
        gl.clear(clear_mask(draw));
        gl.draw_elements_with_i32(
            gl_primitive(draw.primitive),
            draw.count,
            gl_index_type(draw.index_type),
            draw.offset,
        );
    }
}

/// A cube bound to a canvas, advanced one frame at a time by the caller
#[wasm_bindgen]
pub struct WebRenderer {
    scene: Scene,
    gpu: GpuScene,
    animator: Animator,
}

impl WebRenderer {
    pub fn with_config(config: &SceneConfig) -> Result<WebRenderer, RenderError> {
        let window = web_sys::window().ok_or(RenderError::NoWindow)?;
        let surface = Surface::acquire(&window, &config.canvas_id, &config.context_names)?;
        let scene = Scene::new(config, surface.width, surface.height)?;
        let gpu = GpuScene::init(surface.gl, &scene)?;

        Ok(WebRenderer {
            scene,
            gpu,
            animator: Animator::new(config),
        })
    }
}

#[wasm_bindgen]
impl WebRenderer {
    /// Initialize the renderer on the canvas with the given id
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WebRenderer, JsValue> {
        let config = SceneConfig::default().with_canvas_id(canvas_id);
        Ok(Self::with_config(&config)?)
    }

    /// Like `new`, but the first frame only seeds the clock
    #[wasm_bindgen(js_name = withSeededClock)]
    pub fn with_seeded_clock(canvas_id: &str) -> Result<WebRenderer, JsValue> {
        let config = SceneConfig::default()
            .with_canvas_id(canvas_id)
            .with_first_frame(spincube_core::FirstFrame::SeedBaseline);
        Ok(Self::with_config(&config)?)
    }

    /// Render a frame at a `requestAnimationFrame` timestamp (milliseconds)
    #[wasm_bindgen(js_name = renderFrame)]
    pub fn render_frame(&mut self, timestamp: f64) {
        let update = self.animator.tick(timestamp);
        self.scene.apply(&update);
        self.gpu.submit(&update);
    }

    /// Accumulated rotation angle
    pub fn angle(&self) -> f64 {
        self.animator.angle()
    }
}
