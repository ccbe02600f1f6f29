use spincube_core::SceneError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Shader pipeline stage, for compile diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Everything that can stop the renderer from starting.
///
/// None of these are retried; the page shows nothing if startup fails.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no global `window`")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("no element with id `{0}`")]
    CanvasNotFound(String),

    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),

    #[error("browser might not support webgl (tried {tried})")]
    ContextUnavailable { tried: String },

    #[error("could not create {0}")]
    ResourceCreation(&'static str),

    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("program failed to link: {0}")]
    ProgramLink(String),

    #[error("uniform `{0}` not found in program")]
    UniformNotFound(&'static str),

    #[error("attribute `{0}` not found in program")]
    AttributeNotFound(&'static str),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for RenderError {
    fn from(value: JsValue) -> Self {
        RenderError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<RenderError> for JsValue {
    fn from(err: RenderError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
