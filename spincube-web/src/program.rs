/// Shader compilation, program linking and location lookup
use web_sys::{WebGlProgram, WebGlRenderingContext as GL, WebGlShader, WebGlUniformLocation};

use crate::error::{RenderError, ShaderStage};

pub const VERTEX_SHADER: &str = include_str!("shaders/cube.vert");
pub const FRAGMENT_SHADER: &str = include_str!("shaders/cube.frag");

pub const PROJECTION_UNIFORM: &str = "Pmatrix";
pub const VIEW_UNIFORM: &str = "Vmatrix";
pub const MODEL_UNIFORM: &str = "Mmatrix";
pub const POSITION_ATTRIBUTE: &str = "position";
pub const COLOR_ATTRIBUTE: &str = "color";

impl ShaderStage {
    fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        }
    }
}

pub fn compile_shader(
    gl: &GL,
    stage: ShaderStage,
    source: &str,
) -> Result<WebGlShader, RenderError> {
    let shader = gl
        .create_shader(stage.gl_type())
        .ok_or(RenderError::ResourceCreation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(RenderError::ShaderCompile { stage, log })
    }
}

pub fn link_program(
    gl: &GL,
    vertex: &WebGlShader,
    fragment: &WebGlShader,
) -> Result<WebGlProgram, RenderError> {
    let program = gl
        .create_program()
        .ok_or(RenderError::ResourceCreation("program"))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(RenderError::ProgramLink(log))
    }
}

/// Shader object calls needed to build a program
pub(crate) trait ShaderDevice {
    type Shader;
    type Program;

    fn compile(&self, stage: ShaderStage, source: &str) -> Result<Self::Shader, RenderError>;
    fn link(
        &self,
        vertex: &Self::Shader,
        fragment: &Self::Shader,
    ) -> Result<Self::Program, RenderError>;
    /// Detach from `program` if there is one, then delete the shader
    fn release(&self, program: Option<&Self::Program>, shader: &Self::Shader);
}

impl ShaderDevice for GL {
    type Shader = WebGlShader;
    type Program = WebGlProgram;

    fn compile(&self, stage: ShaderStage, source: &str) -> Result<WebGlShader, RenderError> {
        compile_shader(self, stage, source)
    }

    fn link(
        &self,
        vertex: &WebGlShader,
        fragment: &WebGlShader,
    ) -> Result<WebGlProgram, RenderError> {
        link_program(self, vertex, fragment)
    }

    fn release(&self, program: Option<&WebGlProgram>, shader: &WebGlShader) {
        if let Some(program) = program {
            self.detach_shader(program, shader);
        }
        self.delete_shader(Some(shader));
    }
}

/// Compile both stages and link them.
///
/// Shader objects never outlive this call: they are deleted on every error
/// path and detached and deleted once the program is linked.
pub(crate) fn build_program<D: ShaderDevice>(
    device: &D,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<D::Program, RenderError> {
    let vertex = device.compile(ShaderStage::Vertex, vertex_source)?;
    let fragment = match device.compile(ShaderStage::Fragment, fragment_source) {
        Ok(fragment) => fragment,
        Err(err) => {
            device.release(None, &vertex);
            return Err(err);
        }
    };

    let linked = device.link(&vertex, &fragment);
    device.release(linked.as_ref().ok(), &vertex);
    device.release(linked.as_ref().ok(), &fragment);
    linked
}

/// The linked cube program with all of its locations resolved
pub struct CubeProgram {
    pub program: WebGlProgram,
    pub projection: WebGlUniformLocation,
    pub view: WebGlUniformLocation,
    pub model: WebGlUniformLocation,
    pub position: u32,
    pub color: u32,
}

impl CubeProgram {
    pub fn build(gl: &GL) -> Result<Self, RenderError> {
        let program = build_program(gl, VERTEX_SHADER, FRAGMENT_SHADER)?;

        let uniform = |name: &'static str| {
            gl.get_uniform_location(&program, name)
                .ok_or(RenderError::UniformNotFound(name))
        };
        let attribute = |name: &'static str| {
            u32::try_from(gl.get_attrib_location(&program, name))
                .map_err(|_| RenderError::AttributeNotFound(name))
        };

        let projection = uniform(PROJECTION_UNIFORM)?;
        let view = uniform(VIEW_UNIFORM)?;
        let model = uniform(MODEL_UNIFORM)?;
        let position = attribute(POSITION_ATTRIBUTE)?;
        let color = attribute(COLOR_ATTRIBUTE)?;

        Ok(Self {
            program,
            projection,
            view,
            model,
            position,
            color,
        })
    }
}
