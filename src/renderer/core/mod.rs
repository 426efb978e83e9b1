//! 渲染核心抽象
//!
//! 提供：
//! - GraphicsContext: 显式管线状态 + 命令流记录
//! - FrameBufferManager: 双缓冲 G-buffer 与命名 FBO 管理
//! - MaterialProgram / MaterialRegistry: 命名 Uniform 的程序抽象
//! - 管线状态值类型（通道掩码、混合模式、视口）

pub mod context;
pub mod fbo;
pub mod material;
pub mod state;

pub use context::{GpuCommand, GraphicsContext, PipelineState, RenderTarget, StateScope};
pub use fbo::{FboConfig, FboId, FrameBuffer, FrameBufferManager, TextureHandle};
pub use material::{MaterialProgram, MaterialRegistry};
pub use state::{BlendFactor, BlendMode, ChannelMask, Viewport};
