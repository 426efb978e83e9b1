//! 渲染图执行器
//!
//! `RenderGraph` 管理渲染节点的执行顺序。
//! 当前采用简单的线性执行模型，节点按添加顺序严格串行执行。

use super::context::RenderContext;
use super::node::RenderNode;
use crate::errors::Result;

/// 渲染图
///
/// 管理和执行渲染节点列表。
///
/// # 错误策略
/// - `initialise` 中任一节点失败即向上传播（启动期致命错误）
/// - `execute` 中节点失败只记录日志并放弃本帧剩余节点，
///   下一帧重新尝试；进程不因单帧渲染失败而退出
pub struct RenderGraph {
    nodes: Vec<Box<dyn RenderNode>>,
}

impl Default for RenderGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderGraph {
    /// 创建空的渲染图
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// 添加渲染节点
    ///
    /// 节点按添加顺序执行。
    #[inline]
    pub fn add_node(&mut self, node: Box<dyn RenderNode>) {
        self.nodes.push(node);
    }

    /// 添加渲染节点（链式调用）
    #[inline]
    #[must_use]
    pub fn with_node(mut self, node: Box<dyn RenderNode>) -> Self {
        self.nodes.push(node);
        self
    }

    /// 初始化所有节点（启动时调用一次）
    pub fn initialise(&mut self, ctx: &mut RenderContext) -> Result<()> {
        for node in &mut self.nodes {
            node.initialise(ctx)?;
        }
        Ok(())
    }

    /// 执行一帧
    ///
    /// 按顺序处理所有节点；某个节点失败时放弃本帧剩余节点，
    /// 避免在撕裂的 G-buffer 状态上继续渲染。
    pub fn execute(&mut self, ctx: &mut RenderContext) {
        for node in &mut self.nodes {
            if let Err(e) = node.process(ctx) {
                log::error!("node '{}' failed, abandoning frame: {e}", node.name());
                break;
            }
        }
    }

    /// 获取节点数量
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// 清空所有节点
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
