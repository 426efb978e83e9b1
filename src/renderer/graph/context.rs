//! Render Graph Context System
//!
//! [`RenderContext`] bundles the references a node borrows for the duration
//! of a single `initialise` or `process` call. Nothing in it is owned by the
//! node; the graph's caller owns the subsystems and lends them out per frame.
//!
//! # Design Principles
//!
//! 1. **Field-Level Borrow Splitting**: the context stores individual
//!    references to disjoint subsystems, so the borrow checker lets a pass
//!    hold e.g. `ctx.gfx` mutably while reading `ctx.materials` in the same
//!    expression.
//! 2. **Collaborator seams are traits**: the sun/backdrop, the active camera
//!    and the renderer-level light routine are external collaborators; nodes
//!    depend on their contracts only.

use glam::Vec3;

use crate::errors::Result;
use crate::renderer::core::{FrameBufferManager, GraphicsContext, MaterialProgram, MaterialRegistry};
use crate::scene::LightDescriptor;

/// Supplies the current sun/moon direction.
pub trait Backdrop {
    /// Direction from the scene towards the sun. When `normalized` is true
    /// the returned vector is unit length.
    fn sun_direction(&self, normalized: bool) -> Vec3;
}

/// State of the active viewer.
pub trait ViewCamera {
    /// World-space position of the camera.
    fn position(&self) -> Vec3;
}

/// Renderer-level light drawing routine.
///
/// Renders one light's contribution with the given geometry program. For a
/// directional light `is_local` is false, selecting the point-light-shaped
/// geometry path placed at a far-away world position.
pub trait LightRenderer {
    fn render_light(
        &mut self,
        gfx: &mut GraphicsContext,
        light: &LightDescriptor,
        world_position: Vec3,
        program: &mut MaterialProgram,
        is_local: bool,
    ) -> Result<()>;
}

/// Per-call bundle of borrowed collaborators.
pub struct RenderContext<'a> {
    /// Explicit pipeline state and command recorder.
    pub gfx: &'a mut GraphicsContext,
    /// Resolution-dependent FBO manager (G-buffer pair + named targets).
    pub fbos: &'a mut FrameBufferManager,
    /// Compiled program registry.
    pub materials: &'a mut MaterialRegistry,
    /// Renderer-level light routine.
    pub lights: &'a mut dyn LightRenderer,
    /// Sun/moon direction provider.
    pub backdrop: &'a dyn Backdrop,
    /// Active viewer state.
    pub camera: &'a dyn ViewCamera,
}
