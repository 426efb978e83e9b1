//! 场景侧数据
//!
//! 渲染图节点消费的场景描述：
//! - LightDescriptor: 光源参数（方向光/点光源）

pub mod light;

// 重新导出常用类型
pub use light::{LightDescriptor, LightKind};
