//! 渲染节点 Trait
//!
//! 定义渲染图中节点的抽象接口。
//! 每个节点代表一个渲染 Pass 或计算任务。

use crate::errors::Result;

use super::context::RenderContext;

/// 渲染节点 Trait
///
/// 所有渲染 Pass 必须实现此接口。
///
/// # 设计原则
/// - `initialise` 在图启动时调用一次，用于解析材质、声明所需 FBO；
///   失败视为致命配置错误，终止启动
/// - `process` 每帧调用一次，录制该节点的全部状态迁移与绘制；
///   失败只放弃当前帧（见 `RenderGraph::execute`）
/// - 节点不拥有 FBO 或材质，只在 `process` 期间借用上下文中的引用
pub trait RenderNode {
    /// 返回节点名称，用于调试和错误报告
    fn name(&self) -> &str;

    /// 一次性初始化：解析材质、声明 FBO 依赖
    fn initialise(&mut self, _ctx: &mut RenderContext) -> Result<()> {
        Ok(())
    }

    /// 每帧执行：通过 `GraphicsContext` 按严格顺序录制命令
    fn process(&mut self, ctx: &mut RenderContext) -> Result<()>;
}
