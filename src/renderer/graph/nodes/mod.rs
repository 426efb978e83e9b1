//! 渲染图节点实现

pub mod deferred_lights;

pub use deferred_lights::DeferredLightsNode;
