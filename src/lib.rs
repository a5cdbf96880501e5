//! # Hot Spot
//!
//! 热点题（在背景图上选择区域）的选择与评分引擎
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 与宿主之间的边界，只暴露能力
//! - `PresentationSurface` - 展示层，负责视觉标记
//! - `DeviceMonitor` - 视口变化通知，订阅随组件销毁而释放
//! - `ComponentRegistry` - 显式注入的备用组件
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 纯计算，不持有状态
//! - `SelectionController` - 单选/多选切换
//! - `grade` / `score` - 评分与得分
//! - `item_displays` - 批改与答案展示
//! - `prepare_alternate_config` - 备用组件配置
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 一次作答的完整状态机
//! - `HotSpot` - 热点题引擎，实现 `QuestionLifecycle`
//! - `SubmitFlow` - 提交流程编排
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{HotSpotError, Result};
pub use infrastructure::{
    AlternateComponentFactory, ComponentRegistry, DeviceMonitor, ItemClass, PresentationSurface,
    QuestionComponent, RecordingSurface, TracingSurface,
};
pub use models::{AttemptPhase, AttemptState, HotSpotItem, QuestionConfig, ScreenSize};
pub use workflow::{
    Alternate, Correctness, Feedback, HotSpot, Mounted, QuestionLifecycle, SubmitFlow,
    SubmitOutcome,
};
