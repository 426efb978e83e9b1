#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod errors;
pub mod renderer;
pub mod scene;

pub use errors::VesperError;
pub use renderer::core::{
    BlendFactor, BlendMode, ChannelMask, FboConfig, FboId, FrameBuffer, FrameBufferManager,
    GpuCommand, GraphicsContext, MaterialProgram, MaterialRegistry, PipelineState, RenderTarget,
    TextureHandle, Viewport,
};
pub use renderer::graph::nodes::deferred_lights::{
    DeferredLightsNode, LIGHT_BUFFER_PROGRAM, LIGHT_GEOMETRY_PROGRAM, REFRACTIVE_REFLECTIVE_FBO,
    SUN_DISTANCE,
};
pub use renderer::graph::{Backdrop, LightRenderer, RenderContext, RenderGraph, RenderNode, ViewCamera};
pub use scene::{LightDescriptor, LightKind};
