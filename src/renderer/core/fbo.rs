//! Framebuffer Objects
//!
//! Off-screen render targets and the resolution-dependent manager that owns
//! them. The manager holds the double-buffered G-buffer pair used by the
//! deferred pipeline plus any auxiliary FBOs requested by nodes at setup
//! time, looked up by name each frame.
//!
//! Allocation here only fabricates opaque texture handles; the actual GPU
//! storage policy (formats, resizing) lives outside this crate.

use rustc_hash::FxHashMap;

use crate::errors::{Result, VesperError};
use crate::renderer::core::context::GraphicsContext;
use crate::renderer::core::state::Viewport;

/// Opaque handle to a GPU texture attachment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TextureHandle(u32);

/// Stable identifier of a framebuffer owned by [`FrameBufferManager`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FboId(u32);

/// Configuration for a named auxiliary FBO.
///
/// Mirrors what a node declares in `initialise()` before first use
/// ("requires FBO"): full display scale, optionally HDR, optionally with a
/// normals attachment.
#[derive(Debug, Clone)]
pub struct FboConfig {
    name: String,
    hdr: bool,
    use_normal_buffer: bool,
}

impl FboConfig {
    #[must_use]
    pub fn full_scale(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            hdr: false,
            use_normal_buffer: false,
        }
    }

    #[must_use]
    pub fn hdr(mut self) -> Self {
        self.hdr = true;
        self
    }

    #[must_use]
    pub fn with_normal_buffer(mut self) -> Self {
        self.use_normal_buffer = true;
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// 一个离屏渲染目标及其附件
///
/// G-buffer 持有全部四种附件；辅助 FBO 按配置持有其中一部分。
/// 深度附件可以被管理器换绑到来自其它 FBO 的纹理上（跨 Pass 共享深度）。
#[derive(Debug)]
pub struct FrameBuffer {
    name: String,
    width: u32,
    height: u32,
    hdr: bool,
    color: TextureHandle,
    depth: TextureHandle,
    normals: Option<TextureHandle>,
    light: Option<TextureHandle>,
}

impl FrameBuffer {
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Viewport covering this framebuffer.
    #[inline]
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::with_size(self.width, self.height)
    }

    #[inline]
    #[must_use]
    pub fn is_hdr(&self) -> bool {
        self.hdr
    }

    #[inline]
    #[must_use]
    pub fn color_texture(&self) -> TextureHandle {
        self.color
    }

    #[inline]
    #[must_use]
    pub fn depth_texture(&self) -> TextureHandle {
        self.depth
    }

    #[inline]
    #[must_use]
    pub fn normals_texture(&self) -> Option<TextureHandle> {
        self.normals
    }

    #[inline]
    #[must_use]
    pub fn light_texture(&self) -> Option<TextureHandle> {
        self.light
    }
}

/// Resolution-dependent FBO manager.
///
/// Owns the read/write G-buffer pair and all named auxiliary targets.
/// Invariant: exactly one G-buffer is "read" and one is "write" at any
/// instant; [`Self::swap_read_write`] exchanges the roles after the light
/// composite each frame.
pub struct FrameBufferManager {
    fbos: Vec<FrameBuffer>,
    by_name: FxHashMap<String, FboId>,
    gbuffers: [FboId; 2],
    read_index: usize,
    next_texture: u32,
    width: u32,
    height: u32,
}

impl FrameBufferManager {
    /// Creates the manager and allocates the G-buffer pair at the given
    /// display resolution.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let mut manager = Self {
            fbos: Vec::new(),
            by_name: FxHashMap::default(),
            gbuffers: [FboId(0), FboId(0)],
            read_index: 0,
            next_texture: 0,
            width,
            height,
        };
        manager.gbuffers = [
            manager.allocate("engine:sceneOpaqueA", true, true, true),
            manager.allocate("engine:sceneOpaqueB", true, true, true),
        ];
        manager
    }

    fn alloc_texture(&mut self) -> TextureHandle {
        let handle = TextureHandle(self.next_texture);
        self.next_texture += 1;
        handle
    }

    fn allocate(&mut self, name: &str, hdr: bool, normals: bool, light: bool) -> FboId {
        let fbo = FrameBuffer {
            name: name.to_owned(),
            width: self.width,
            height: self.height,
            hdr,
            color: self.alloc_texture(),
            depth: self.alloc_texture(),
            normals: normals.then(|| self.alloc_texture()),
            light: light.then(|| self.alloc_texture()),
        };
        let id = FboId(self.fbos.len() as u32);
        self.fbos.push(fbo);
        self.by_name.insert(name.to_owned(), id);
        id
    }

    /// Ensures a named auxiliary FBO exists, allocating it on first request.
    ///
    /// Called from node `initialise()`; subsequent per-frame lookups go
    /// through [`Self::get`].
    pub fn ensure(&mut self, config: &FboConfig) -> FboId {
        if let Some(&id) = self.by_name.get(config.name()) {
            return id;
        }
        log::debug!("allocating FBO '{}'", config.name());
        self.allocate(config.name(), config.hdr, config.use_normal_buffer, false)
    }

    /// Looks up a named FBO.
    pub fn get(&self, name: &str) -> Result<FboId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| VesperError::FboNotFound(name.to_owned()))
    }

    #[inline]
    #[must_use]
    pub fn buffer(&self, id: FboId) -> &FrameBuffer {
        &self.fbos[id.0 as usize]
    }

    /// The G-buffer currently in the "read" role.
    #[inline]
    #[must_use]
    pub fn read_gbuffer(&self) -> FboId {
        self.gbuffers[self.read_index]
    }

    /// The G-buffer currently in the "write" role.
    #[inline]
    #[must_use]
    pub fn write_gbuffer(&self) -> FboId {
        self.gbuffers[1 - self.read_index]
    }

    /// Exchanges the read/write roles of the G-buffer pair.
    ///
    /// This is the hand-off point between the lighting composite and every
    /// downstream pass. Swapping twice restores the original assignment.
    pub fn swap_read_write(&mut self) {
        self.read_index = 1 - self.read_index;
    }

    /// Re-attaches `src`'s depth texture as the depth attachment of `dst`
    /// and records the transition on the command stream.
    ///
    /// Later transparency passes depth-test against the opaque scene through
    /// the target's borrowed depth; this is a cross-pass ownership link, not
    /// a copy of pixel data.
    pub fn attach_depth_to(&mut self, src: FboId, dst: FboId, gfx: &mut GraphicsContext) {
        let depth = self.buffer(src).depth_texture();
        self.fbos[dst.0 as usize].depth = depth;
        gfx.record_depth_attach(depth, dst);
    }
}
