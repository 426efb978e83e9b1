//! Graphics Context
//!
//! The [`GraphicsContext`] is the explicit stand-in for global GPU pipeline
//! state. Every pass mutates pipeline state *through* this value instead of
//! touching ambient device state, which gives us two things:
//!
//! - **Redundant-transition elision**: like a tracked render pass, state
//!   setters compare against the current value and skip no-op transitions.
//! - **Submission-order command stream**: every effective call is recorded as
//!   a [`GpuCommand`] in program order. The design relies only on submission
//!   order, never on GPU completion, so the stream is the whole story of a
//!   frame.
//!
//! # Scoped acquisition
//!
//! [`GraphicsContext::scoped`] returns a [`StateScope`] guard that snapshots
//! the pipeline state and restores it on drop. Passes that flip blend/depth/
//! mask state run inside a scope so the paired restoration executes on every
//! exit path, including an early `?` out of a failed draw.

use crate::renderer::core::fbo::{FboId, TextureHandle};
use crate::renderer::core::state::{BlendMode, ChannelMask, Viewport};
use crate::scene::LightKind;

/// Number of texture units the context tracks.
pub const TEXTURE_UNITS: usize = 8;

/// 当前绑定的渲染目标
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RenderTarget {
    /// 默认显示目标（窗口后备缓冲）
    #[default]
    Display,
    /// 离屏 FBO
    Fbo(FboId),
}

/// Snapshot of the process-wide pipeline state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PipelineState {
    pub target: RenderTarget,
    pub channel_mask: ChannelMask,
    pub depth_test: bool,
    pub blend: BlendMode,
    pub viewport: Viewport,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self {
            target: RenderTarget::Display,
            channel_mask: ChannelMask::ALL,
            depth_test: true,
            blend: BlendMode::ALPHA,
            viewport: Viewport::default(),
        }
    }
}

/// One recorded state transition or draw, in submission order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GpuCommand {
    BindFramebuffer(FboId),
    BindDisplay,
    SetChannelMask(ChannelMask),
    SetDepthTest(bool),
    SetBlend(BlendMode),
    SetViewport(Viewport),
    BindTexture { unit: u32, texture: TextureHandle },
    Clear { color: bool, depth: bool },
    DrawFullscreenQuad,
    DrawLightGeometry { kind: LightKind },
    AttachDepth { texture: TextureHandle, target: FboId },
}

/// Explicit pipeline-state owner and command recorder.
///
/// All rendering happens on one thread; the context is borrowed mutably for
/// the duration of each node's `process` call, so ordering discipline is
/// enforced by the borrow checker rather than by locks.
#[derive(Default)]
pub struct GraphicsContext {
    state: PipelineState,
    texture_bindings: [Option<TextureHandle>; TEXTURE_UNITS],
    commands: Vec<GpuCommand>,
}

impl GraphicsContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pipeline state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Commands recorded since the last [`Self::finish_frame`].
    #[inline]
    #[must_use]
    pub fn commands(&self) -> &[GpuCommand] {
        &self.commands
    }

    /// Drains the frame's command stream for submission.
    pub fn finish_frame(&mut self) -> Vec<GpuCommand> {
        std::mem::take(&mut self.commands)
    }

    // ─── State Transitions ────────────────────────────────────────────────────

    pub fn bind_framebuffer(&mut self, fbo: FboId) {
        if self.state.target != RenderTarget::Fbo(fbo) {
            self.state.target = RenderTarget::Fbo(fbo);
            self.commands.push(GpuCommand::BindFramebuffer(fbo));
        }
    }

    pub fn bind_display(&mut self) {
        if self.state.target != RenderTarget::Display {
            self.state.target = RenderTarget::Display;
            self.commands.push(GpuCommand::BindDisplay);
        }
    }

    pub fn set_channel_mask(&mut self, mask: ChannelMask) {
        if self.state.channel_mask != mask {
            self.state.channel_mask = mask;
            self.commands.push(GpuCommand::SetChannelMask(mask));
        }
    }

    pub fn set_depth_test(&mut self, enabled: bool) {
        if self.state.depth_test != enabled {
            self.state.depth_test = enabled;
            self.commands.push(GpuCommand::SetDepthTest(enabled));
        }
    }

    pub fn set_blend(&mut self, mode: BlendMode) {
        if self.state.blend != mode {
            self.state.blend = mode;
            self.commands.push(GpuCommand::SetBlend(mode));
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.state.viewport != viewport {
            self.state.viewport = viewport;
            self.commands.push(GpuCommand::SetViewport(viewport));
        }
    }

    /// Binds `texture` to the given texture unit.
    ///
    /// # Panics
    /// If `unit` exceeds [`TEXTURE_UNITS`].
    pub fn bind_texture(&mut self, unit: u32, texture: TextureHandle) {
        let slot = unit as usize;
        assert!(slot < TEXTURE_UNITS, "texture unit {unit} out of range");
        if self.texture_bindings[slot] != Some(texture) {
            self.texture_bindings[slot] = Some(texture);
            self.commands.push(GpuCommand::BindTexture { unit, texture });
        }
    }

    #[inline]
    #[must_use]
    pub fn texture_binding(&self, unit: u32) -> Option<TextureHandle> {
        self.texture_bindings.get(unit as usize).copied().flatten()
    }

    // ─── Draws & Frame Operations ─────────────────────────────────────────────

    /// Clears the selected channels of the bound target. Always recorded;
    /// a clear is never redundant.
    pub fn clear(&mut self, color: bool, depth: bool) {
        self.commands.push(GpuCommand::Clear { color, depth });
    }

    /// Issues the single full-screen quad draw of a screen-space pass.
    pub fn draw_fullscreen_quad(&mut self) {
        self.commands.push(GpuCommand::DrawFullscreenQuad);
    }

    /// Records a light-geometry draw. Called by `LightRenderer`
    /// implementations, not by nodes directly.
    pub fn draw_light_geometry(&mut self, kind: LightKind) {
        self.commands.push(GpuCommand::DrawLightGeometry { kind });
    }

    /// Re-attaches a depth texture onto `target`. Called by the framebuffer
    /// manager, which also updates its CPU-side attachment record.
    pub(crate) fn record_depth_attach(&mut self, texture: TextureHandle, target: FboId) {
        self.commands.push(GpuCommand::AttachDepth { texture, target });
    }

    // ─── Scoped Acquisition ───────────────────────────────────────────────────

    /// Opens a scope that restores the current pipeline state when dropped.
    ///
    /// The restore transitions go through the normal setters, so a scope that
    /// was manually restored before the guard drops records nothing extra.
    pub fn scoped(&mut self) -> StateScope<'_> {
        let saved = self.state;
        StateScope { ctx: self, saved }
    }
}

/// Drop guard pairing every state change inside it with a restoration.
pub struct StateScope<'a> {
    ctx: &'a mut GraphicsContext,
    saved: PipelineState,
}

impl Drop for StateScope<'_> {
    fn drop(&mut self) {
        self.ctx.set_blend(self.saved.blend);
        self.ctx.set_depth_test(self.saved.depth_test);
        self.ctx.set_channel_mask(self.saved.channel_mask);
        self.ctx.set_viewport(self.saved.viewport);
        match self.saved.target {
            RenderTarget::Display => self.ctx.bind_display(),
            RenderTarget::Fbo(id) => self.ctx.bind_framebuffer(id),
        }
    }
}

impl std::ops::Deref for StateScope<'_> {
    type Target = GraphicsContext;

    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl std::ops::DerefMut for StateScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redundant_transitions_are_elided() {
        let mut ctx = GraphicsContext::new();
        ctx.set_depth_test(true); // already on
        ctx.set_blend(BlendMode::ALPHA); // already alpha
        assert!(ctx.commands().is_empty());

        ctx.set_depth_test(false);
        ctx.set_depth_test(false);
        assert_eq!(ctx.commands(), &[GpuCommand::SetDepthTest(false)]);
    }

    #[test]
    fn scope_restores_on_drop() {
        let mut ctx = GraphicsContext::new();
        {
            let mut scope = ctx.scoped();
            scope.set_depth_test(false);
            scope.set_blend(BlendMode::LIGHT_ACCUMULATION);
            scope.set_channel_mask(ChannelMask::LIGHT);
        }
        assert!(ctx.state().depth_test);
        assert_eq!(ctx.state().blend, BlendMode::ALPHA);
        assert_eq!(ctx.state().channel_mask, ChannelMask::ALL);
    }

    #[test]
    fn manually_restored_scope_records_nothing_on_drop() {
        let mut ctx = GraphicsContext::new();
        {
            let mut scope = ctx.scoped();
            scope.set_depth_test(false);
            scope.set_depth_test(true);
        }
        let frame = ctx.finish_frame();
        assert_eq!(
            frame,
            vec![GpuCommand::SetDepthTest(false), GpuCommand::SetDepthTest(true)]
        );
    }
}
