//! 组件注册表 - 基础设施层
//!
//! 宿主显式构建注册表，再把备用组件工厂注入热点题

use std::collections::HashMap;
use std::rc::Rc;

use crate::infrastructure::presentation::PresentationSurface;
use crate::models::question::QuestionConfig;

/// 宿主中的题目组件
pub trait QuestionComponent {
    /// 组件类型标识
    fn component_name(&self) -> &str;

    fn config(&self) -> &QuestionConfig;

    /// 按当前视口重新渲染
    fn re_render(&mut self);
}

/// 备用组件工厂
///
/// 接管配置和渲染位置，返回新组件
pub trait AlternateComponentFactory {
    fn create(
        &self,
        config: QuestionConfig,
        surface: Box<dyn PresentationSurface>,
    ) -> Box<dyn QuestionComponent>;
}

/// 组件注册表
#[derive(Default)]
pub struct ComponentRegistry {
    factories: HashMap<String, Rc<dyn AlternateComponentFactory>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: Rc<dyn AlternateComponentFactory>,
    ) {
        self.factories.insert(name.into(), factory);
    }

    pub fn get(&self, name: &str) -> Option<Rc<dyn AlternateComponentFactory>> {
        self.factories.get(name).cloned()
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.factories.keys().collect();
        names.sort();
        f.debug_struct("ComponentRegistry")
            .field("components", &names)
            .finish()
    }
}
