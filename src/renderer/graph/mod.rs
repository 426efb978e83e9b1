//! 渲染管线组织
//!
//! 提供：
//! - RenderGraph: 渲染图执行器
//! - RenderNode: 渲染节点 Trait
//! - RenderContext: 渲染上下文（每帧借用的协作者集合）
//! - nodes: 节点实现（延迟光照等）

pub mod context;
pub mod graph;
pub mod node;
pub mod nodes;

pub use context::{Backdrop, LightRenderer, RenderContext, ViewCamera};
pub use graph::RenderGraph;
pub use node::RenderNode;
pub use nodes::DeferredLightsNode;
