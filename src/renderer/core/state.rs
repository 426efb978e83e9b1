//! 管线状态值
//!
//! 把全局 GPU 管线状态（写通道掩码、混合模式、深度测试、视口）
//! 建模为显式的值类型，由 [`GraphicsContext`] 统一持有和迁移，
//! 而不是依赖环境全局状态。
//!
//! [`GraphicsContext`]: super::context::GraphicsContext

use bitflags::bitflags;

bitflags! {
    /// 当前绑定 FBO 的写通道掩码
    ///
    /// 光照累积阶段只开放 LIGHT 通道，颜色和深度通道被屏蔽，
    /// 避免破坏后续 Pass 需要的 G-buffer 数据。
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct ChannelMask: u8 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
        const LIGHT = 1 << 2;
        const ALL   = Self::COLOR.bits() | Self::DEPTH.bits() | Self::LIGHT.bits();
    }
}

/// Blend factor, mirroring the fixed-function blend equation operands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BlendFactor {
    One,
    SrcAlpha,
    OneMinusSrcAlpha,
    OneMinusSrcColor,
}

/// A (source, destination) blend factor pair.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlendMode {
    pub src: BlendFactor,
    pub dst: BlendFactor,
}

impl BlendMode {
    /// Standard alpha compositing, the steady-state blend mode between passes.
    pub const ALPHA: Self = Self {
        src: BlendFactor::SrcAlpha,
        dst: BlendFactor::OneMinusSrcAlpha,
    };

    /// Additive accumulation for light passes.
    ///
    /// The ONE / ONE_MINUS_SRC_COLOR pair keeps repeated light contributions
    /// from over-brightening the light buffer. Fixed contract, not a tunable.
    pub const LIGHT_ACCUMULATION: Self = Self {
        src: BlendFactor::One,
        dst: BlendFactor::OneMinusSrcColor,
    };
}

/// 视口矩形（整数像素）
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn with_size(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }
}
