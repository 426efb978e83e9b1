//! 渲染系统
//!
//! - core: 管线状态、FBO、材质程序等核心抽象
//! - graph: 渲染图与节点

pub mod core;
pub mod graph;

pub use self::core::{FrameBufferManager, GraphicsContext, MaterialRegistry};
pub use self::graph::{RenderGraph, RenderNode};
