// Light descriptors consumed by the deferred lighting path.
//
// The renderer-level light routine dispatches on `LightKind`; only the
// directional variant is produced by the engine itself today.

/// 光源类型标签
///
/// 方向光（太阳/月亮）通过点光源的几何路径近似渲染，
/// 因此两种变体共享同一个描述结构。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    /// Infinitely distant light (sun/moon), approximated through the
    /// point-light geometry path.
    Directional,
    /// Local point light.
    Point,
}

/// Parameters handed to the renderer-level light routine.
///
/// A single static directional instance lives for the lifetime of the
/// deferred lighting node. It is not attached to any scene entity.
#[derive(Debug, Clone, PartialEq)]
pub struct LightDescriptor {
    pub kind: LightKind,
    pub ambient_intensity: f32,
    pub diffuse_intensity: f32,
    pub specular_power: f32,
}

impl LightDescriptor {
    #[must_use]
    pub fn directional(ambient_intensity: f32, diffuse_intensity: f32, specular_power: f32) -> Self {
        Self {
            kind: LightKind::Directional,
            ambient_intensity,
            diffuse_intensity,
            specular_power,
        }
    }

    /// The main sun/moon light with its long-standing default intensities.
    #[must_use]
    pub fn main_directional() -> Self {
        Self::directional(0.75, 0.75, 100.0)
    }
}
