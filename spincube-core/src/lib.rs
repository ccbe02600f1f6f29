/// Spincube Core Library - Host-independent scene and animation logic
///
/// Static cube data, the fixed camera, the tumble transform and the
/// per-frame animation state. Nothing here touches a graphics context.

pub mod animation;
pub mod config;
pub mod geometry;
pub mod projection;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use animation::{Animator, DrawCall, FirstFrame, FrameUpdate, IndexType, Primitive};
pub use config::SceneConfig;
pub use geometry::{ColoredMesh, MeshError};
pub use projection::Camera;
pub use scene::{DepthFunc, Scene, SceneError, Viewport};
pub use transform::{Axis, AxisRates, Transform};
