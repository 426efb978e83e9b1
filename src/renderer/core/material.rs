//! Material Programs
//!
//! A [`MaterialProgram`] is a bound GPU program abstraction exposing
//! named-uniform setters. Shader compilation and uniform reflection live
//! outside this crate; a program here carries the declared uniform names of
//! its compiled counterpart so that mismatched names are caught in
//! development builds instead of silently dropped by the driver.

use rustc_hash::FxHashMap;

use crate::errors::{Result, VesperError};

/// Bound GPU program with integer (texture unit) uniforms.
#[derive(Debug)]
pub struct MaterialProgram {
    name: String,
    uniforms: FxHashMap<String, i32>,
    active: bool,
}

impl MaterialProgram {
    /// Creates a program that declares the given uniform names.
    #[must_use]
    pub fn new(name: &str, declared_uniforms: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            uniforms: declared_uniforms
                .iter()
                .map(|&uniform| (uniform.to_owned(), 0))
                .collect(),
            active: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the program has been activated by a `set_*` call this frame.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Assigns a texture unit to the named sampler uniform, optionally
    /// activating the program.
    ///
    /// An unknown uniform name is a programming error, caught here in debug
    /// builds; release builds ignore it the way a GL driver would.
    pub fn set_texture_unit(&mut self, uniform: &str, unit: u32, activate: bool) {
        debug_assert!(
            self.uniforms.contains_key(uniform),
            "program '{}' declares no uniform '{uniform}'",
            self.name
        );
        if let Some(value) = self.uniforms.get_mut(uniform) {
            *value = unit as i32;
        }
        if activate {
            self.active = true;
        }
    }

    /// Current value of a named uniform, if declared.
    #[must_use]
    pub fn uniform(&self, name: &str) -> Option<i32> {
        self.uniforms.get(name).copied()
    }
}

/// Name-keyed registry of compiled programs, the renderer-side source nodes
/// fetch their materials from.
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    programs: FxHashMap<String, MaterialProgram>,
}

impl MaterialRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, program: MaterialProgram) {
        self.programs.insert(program.name().to_owned(), program);
    }

    pub fn get(&self, name: &str) -> Result<&MaterialProgram> {
        self.programs
            .get(name)
            .ok_or_else(|| VesperError::MaterialNotFound(name.to_owned()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut MaterialProgram> {
        self.programs
            .get_mut(name)
            .ok_or_else(|| VesperError::MaterialNotFound(name.to_owned()))
    }
}
