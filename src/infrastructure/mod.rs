//! 基础设施层（Infrastructure）
//!
//! 热点题与宿主之间的边界：展示层、设备通知、组件注册表

pub mod device;
pub mod presentation;
pub mod registry;

pub use device::{DeviceMonitor, DeviceSubscription};
pub use presentation::{ItemClass, PresentationSurface, RecordingSurface, TracingSurface};
pub use registry::{AlternateComponentFactory, ComponentRegistry, QuestionComponent};
