//! 批改与答案展示 - 业务能力层
//!
//! 三种展示都只由配置和作答状态推导，可重复调用

use crate::models::attempt::ItemState;
use crate::models::item::HotSpotItem;

/// 展示模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disclosure {
    /// 提交后的批改
    Marking,
    /// 显示正确答案
    CorrectAnswer,
    /// 隐藏正确答案，显示用户答案
    UserAnswer,
}

/// 单个区域的展示结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDisplay {
    /// 标记为正确（否则为错误）
    pub correct: bool,
    /// 额外标记"未选中"
    pub not_selected: bool,
}

/// 计算每个区域在指定模式下的展示
pub fn item_displays(
    disclosure: Disclosure,
    items: &[HotSpotItem],
    states: &[ItemState],
) -> Vec<ItemDisplay> {
    match disclosure {
        Disclosure::CorrectAnswer => items
            .iter()
            .map(|item| ItemDisplay {
                correct: item.should_be_selected,
                not_selected: false,
            })
            .collect(),
        Disclosure::Marking | Disclosure::UserAnswer => states
            .iter()
            .map(|state| ItemDisplay {
                correct: state.is_correct,
                not_selected: !state.is_selected,
            })
            .collect(),
    }
}
