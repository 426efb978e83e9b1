//! Deferred Lights Node
//!
//! 延迟光照节点：先把主方向光（太阳/月亮）的贡献累积到读侧
//! G-buffer 的光照缓冲通道，再通过一次全屏 Pass 把光照缓冲
//! 合成到不透明场景上，写入写侧 G-buffer，最后交换读写角色。
//!
//! # 数据流
//! ```text
//! Read G-buffer (color/depth/normals/light) ──┐
//!                                             ├─► 全屏合成 ─► Write G-buffer
//! 方向光累积 ─► light buffer ─────────────────┘         │
//!                                            swap ◄─────┘
//! ```
//!
//! # 执行时机
//! - 在不透明几何 Pass 之后
//! - 在透明/折射 Pass 之前（折射目标的深度附件在本节点末尾换绑）
//!
//! # 注意
//! - 两个阶段共享进程级管线状态（通道掩码、混合模式、深度测试），
//!   必须在一次 `process` 内连续执行，中间不得插入其它渲染调用

use glam::Vec3;

use crate::errors::{Result, VesperError};
use crate::renderer::core::{BlendMode, ChannelMask, FboConfig};
use crate::renderer::graph::context::RenderContext;
use crate::renderer::graph::node::RenderNode;
use crate::scene::LightDescriptor;

/// 用点光源路径近似无穷远方向光时使用的放置半径
///
/// 行为兼容常量，不可调。
pub const SUN_DISTANCE: f32 = 50_000.0;

/// 折射/反射场景目标的固定资源名
pub const REFRACTIVE_REFLECTIVE_FBO: &str = "engine:sceneReflectiveRefractive";

/// 光源几何着色程序（点光源形状路径）
pub const LIGHT_GEOMETRY_PROGRAM: &str = "engine:prog.lightGeometryPass";

/// 光照缓冲合成着色程序
pub const LIGHT_BUFFER_PROGRAM: &str = "engine:prog.lightBufferPass";

/// 合成阶段按纹理单元顺序上报给着色器的采样器名
const COMPOSITE_SAMPLERS: [&str; 4] = [
    "texSceneOpaque",
    "texSceneOpaqueDepth",
    "texSceneOpaqueNormals",
    "texSceneOpaqueLightBuffer",
];

/// 延迟方向光节点
///
/// 持有一个静态的方向光描述；它不属于任何场景实体。
// TODO: iterate over scene lights once the renderer exposes more than the
// main directional light.
pub struct DeferredLightsNode {
    sunlight: LightDescriptor,
}

impl Default for DeferredLightsNode {
    fn default() -> Self {
        Self::new()
    }
}

impl DeferredLightsNode {
    /// 使用默认主方向光参数创建节点
    #[must_use]
    pub fn new() -> Self {
        Self {
            sunlight: LightDescriptor::main_directional(),
        }
    }

    /// 使用调用方提供的光源描述创建节点
    #[must_use]
    pub fn with_light(sunlight: LightDescriptor) -> Self {
        Self { sunlight }
    }

    #[inline]
    #[must_use]
    pub fn sunlight(&self) -> &LightDescriptor {
        &self.sunlight
    }

    /// 阶段一：方向光累积
    ///
    /// 只开放光照缓冲通道，关闭深度测试，用 ONE/ONE_MINUS_SRC_COLOR
    /// 混合把光照贡献画进读侧 G-buffer。`StateScope` 保证即使
    /// `render_light` 失败，混合/深度/掩码也会在错误传播前恢复。
    fn accumulate_directional_light(&self, ctx: &mut RenderContext) -> Result<()> {
        let read = ctx.fbos.read_gbuffer();

        // 把方向光放到足够远处，走点光源的几何路径
        let sunlight_world_position: Vec3 =
            ctx.camera.position() + ctx.backdrop.sun_direction(true) * SUN_DISTANCE;

        let program = ctx.materials.get_mut(LIGHT_GEOMETRY_PROGRAM)?;

        let mut scope = ctx.gfx.scoped();
        scope.bind_framebuffer(read);
        scope.set_channel_mask(ChannelMask::LIGHT);
        scope.set_depth_test(false);
        scope.set_blend(BlendMode::LIGHT_ACCUMULATION);

        ctx.lights.render_light(
            &mut scope,
            &self.sunlight,
            sunlight_world_position,
            program,
            false,
        )?;

        // 显式恢复到标准 Alpha 合成并重新打开深度测试，
        // 后续 Pass 依赖这组状态
        scope.set_blend(BlendMode::ALPHA);
        scope.set_depth_test(true);
        scope.set_channel_mask(ChannelMask::ALL);
        scope.bind_display();
        Ok(())
    }

    /// 阶段二：光照缓冲合成
    ///
    /// 读侧 G-buffer 的四张纹理按固定顺序绑到 0..3 号纹理单元，
    /// 一次全屏绘制写入写侧 G-buffer，然后交换读写角色，
    /// 并把新读侧的深度附件换绑到折射/反射目标上。
    fn apply_light_buffer(&self, ctx: &mut RenderContext) -> Result<()> {
        let read_id = ctx.fbos.read_gbuffer();
        let write_id = ctx.fbos.write_gbuffer();
        let write_viewport = ctx.fbos.buffer(write_id).viewport();

        let read = ctx.fbos.buffer(read_id);
        let read_viewport = read.viewport();
        let normals = read
            .normals_texture()
            .ok_or_else(|| VesperError::MissingAttachment {
                fbo: read.name().to_owned(),
                attachment: "normals",
            })?;
        let light = read
            .light_texture()
            .ok_or_else(|| VesperError::MissingAttachment {
                fbo: read.name().to_owned(),
                attachment: "light buffer",
            })?;
        let inputs = [
            read.color_texture(),
            read.depth_texture(),
            normals,
            light,
        ];

        let program = ctx.materials.get_mut(LIGHT_BUFFER_PROGRAM)?;
        for (unit, (uniform, texture)) in COMPOSITE_SAMPLERS.into_iter().zip(inputs).enumerate() {
            let unit = unit as u32;
            ctx.gfx.bind_texture(unit, texture);
            program.set_texture_unit(uniform, unit, true);
        }

        ctx.gfx.bind_framebuffer(write_id);
        ctx.gfx.set_channel_mask(ChannelMask::ALL);
        ctx.gfx.set_viewport(write_viewport);
        // 上一帧的内容不得透到未写入的像素
        ctx.gfx.clear(true, true);
        ctx.gfx.draw_fullscreen_quad();

        ctx.gfx.bind_display();
        ctx.gfx.set_viewport(read_viewport);

        let reflective_refractive = ctx.fbos.get(REFRACTIVE_REFLECTIVE_FBO)?;

        // 交换之后，新的读侧就是刚合成完的缓冲；
        // 透明 Pass 要用它的深度对不透明几何做深度测试
        ctx.fbos.swap_read_write();
        let new_read = ctx.fbos.read_gbuffer();
        ctx.fbos.attach_depth_to(new_read, reflective_refractive, ctx.gfx);
        Ok(())
    }
}

impl RenderNode for DeferredLightsNode {
    fn name(&self) -> &str {
        "Deferred Lights"
    }

    fn initialise(&mut self, ctx: &mut RenderContext) -> Result<()> {
        for program in [LIGHT_GEOMETRY_PROGRAM, LIGHT_BUFFER_PROGRAM] {
            ctx.materials
                .get(program)
                .map_err(|e| VesperError::NodeSetupFailed {
                    node: self.name().to_owned(),
                    reason: e.to_string(),
                })?;
        }

        ctx.fbos.ensure(
            &FboConfig::full_scale(REFRACTIVE_REFLECTIVE_FBO)
                .hdr()
                .with_normal_buffer(),
        );
        Ok(())
    }

    fn process(&mut self, ctx: &mut RenderContext) -> Result<()> {
        self.accumulate_directional_light(ctx)?;
        self.apply_light_buffer(ctx)
    }
}
