//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`VesperError`] covers all failure modes including:
//! - Missing GPU programs or framebuffer resources at node setup
//! - Incomplete framebuffer attachments discovered mid-frame
//! - Failures surfaced by the renderer-level light routine
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for `std::result::Result<T, VesperError>`.
//!
//! ```rust,ignore
//! use vesper::errors::{Result, VesperError};
//!
//! fn initialise() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the Vesper engine.
///
/// Each variant provides specific context about what went wrong.
/// Setup-time variants are fatal; per-frame variants abandon the
/// current frame only (see `RenderGraph::execute`).
#[derive(Error, Debug)]
pub enum VesperError {
    // ========================================================================
    // Node Setup Errors (fatal at startup)
    // ========================================================================
    /// A GPU program required by a node was not registered.
    #[error("Material program not found: {0}")]
    MaterialNotFound(String),

    /// A named framebuffer required by a node does not exist.
    #[error("Framebuffer not found: {0}")]
    FboNotFound(String),

    /// A render node could not complete its one-time setup.
    #[error("Node setup failed for '{node}': {reason}")]
    NodeSetupFailed {
        /// Name of the failing node
        node: String,
        /// Description of the missing prerequisite
        reason: String,
    },

    // ========================================================================
    // Per-Frame Rendering Errors
    // ========================================================================
    /// A framebuffer is missing an attachment a pass depends on.
    #[error("Framebuffer '{fbo}' is missing its {attachment} attachment")]
    MissingAttachment {
        /// Name of the incomplete framebuffer
        fbo: String,
        /// The absent attachment ("normals", "light buffer", ...)
        attachment: &'static str,
    },

    /// The renderer-level light routine failed mid-frame.
    #[error("Light rendering failed: {0}")]
    RenderFailed(String),
}

/// Alias for `Result<T, VesperError>`.
pub type Result<T> = std::result::Result<T, VesperError>;
