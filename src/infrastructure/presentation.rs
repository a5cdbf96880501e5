//! 展示层接口 - 基础设施层
//!
//! 引擎只通过 `PresentationSurface` 反映状态变化，不认识 DOM

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use tracing::debug;

/// 区域上的视觉标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemClass {
    Selected,
    NotSelected,
    Correct,
    Incorrect,
}

impl ItemClass {
    pub const ALL: [ItemClass; 4] = [
        ItemClass::Selected,
        ItemClass::NotSelected,
        ItemClass::Correct,
        ItemClass::Incorrect,
    ];

    /// 对应的样式类名
    pub fn as_str(self) -> &'static str {
        match self {
            ItemClass::Selected => "selected",
            ItemClass::NotSelected => "not-selected",
            ItemClass::Correct => "correct",
            ItemClass::Incorrect => "incorrect",
        }
    }
}

/// 展示层
///
/// 职责：
/// - 按显示顺序枚举已渲染的区域
/// - 为区域添加/移除视觉标记
/// - 切换"提交前"显示模式
pub trait PresentationSurface {
    /// 已渲染的区域数量
    fn item_count(&self) -> usize;

    fn add_item_class(&mut self, index: usize, class: ItemClass);

    fn remove_item_class(&mut self, index: usize, class: ItemClass);

    fn set_before_submit(&mut self, before_submit: bool);

    /// 移除所有区域上的全部标记
    fn clear_item_classes(&mut self) {
        for index in 0..self.item_count() {
            for class in ItemClass::ALL {
                self.remove_item_class(index, class);
            }
        }
    }
}

#[derive(Debug, Default)]
struct SurfaceState {
    classes: Vec<BTreeSet<ItemClass>>,
    before_submit: bool,
}

/// 内存中的展示层，记录每个区域当前的标记
///
/// 克隆后共享同一份状态，交给引擎后仍可检查
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    state: Rc<RefCell<SurfaceState>>,
}

impl RecordingSurface {
    pub fn new(item_count: usize) -> Self {
        Self {
            state: Rc::new(RefCell::new(SurfaceState {
                classes: vec![BTreeSet::new(); item_count],
                before_submit: true,
            })),
        }
    }

    pub fn has_class(&self, index: usize, class: ItemClass) -> bool {
        self.state
            .borrow()
            .classes
            .get(index)
            .is_some_and(|set| set.contains(&class))
    }

    /// 某区域当前的全部标记，按固定顺序
    pub fn classes(&self, index: usize) -> Vec<ItemClass> {
        self.state
            .borrow()
            .classes
            .get(index)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn is_before_submit(&self) -> bool {
        self.state.borrow().before_submit
    }
}

impl PresentationSurface for RecordingSurface {
    fn item_count(&self) -> usize {
        self.state.borrow().classes.len()
    }

    fn add_item_class(&mut self, index: usize, class: ItemClass) {
        if let Some(set) = self.state.borrow_mut().classes.get_mut(index) {
            set.insert(class);
        }
    }

    fn remove_item_class(&mut self, index: usize, class: ItemClass) {
        if let Some(set) = self.state.borrow_mut().classes.get_mut(index) {
            set.remove(&class);
        }
    }

    fn set_before_submit(&mut self, before_submit: bool) {
        self.state.borrow_mut().before_submit = before_submit;
    }
}

/// 只输出日志的展示层
#[derive(Debug, Clone)]
pub struct TracingSurface {
    item_count: usize,
}

impl TracingSurface {
    pub fn new(item_count: usize) -> Self {
        Self { item_count }
    }
}

impl PresentationSurface for TracingSurface {
    fn item_count(&self) -> usize {
        self.item_count
    }

    fn add_item_class(&mut self, index: usize, class: ItemClass) {
        debug!("区域 #{} +{}", index + 1, class.as_str());
    }

    fn remove_item_class(&mut self, index: usize, class: ItemClass) {
        debug!("区域 #{} -{}", index + 1, class.as_str());
    }

    fn set_before_submit(&mut self, before_submit: bool) {
        debug!("before-submit: {}", before_submit);
    }
}
