use serde::{Deserialize, Serialize};

/// 单个区域的作答状态
///
/// `is_correct` 只在评分后有意义，重置时必须清空
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemState {
    pub is_selected: bool,
    pub is_correct: bool,
}

/// 作答阶段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptPhase {
    /// 未提交
    #[default]
    Unanswered,
    /// 已提交并显示批改结果
    Submitted,
    /// 显示正确答案
    ShowingCorrectAnswer,
    /// 显示用户答案
    ShowingUserAnswer,
}

/// 一次作答的状态
///
/// 由引擎独占，每次修改都生成新值后整体替换
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptState {
    pub items: Vec<ItemState>,
    pub number_of_required_answers: usize,
    pub number_of_correct_answers: usize,
    pub is_at_least_one_correct_selection: bool,
    /// 最近一次评分结果
    pub is_correct: bool,
    pub score: f64,
    pub phase: AttemptPhase,
}

impl AttemptState {
    /// 为 `item_count` 个区域创建空白作答
    pub fn new(item_count: usize) -> Self {
        Self {
            items: vec![ItemState::default(); item_count],
            number_of_required_answers: 0,
            number_of_correct_answers: 0,
            is_at_least_one_correct_selection: false,
            is_correct: false,
            score: 0.0,
            phase: AttemptPhase::Unanswered,
        }
    }

    /// 当前选中的区域数量
    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_selected).count()
    }

    /// 选中标记的快照，按显示顺序
    pub fn selection(&self) -> Vec<bool> {
        self.items.iter().map(|item| item.is_selected).collect()
    }
}
