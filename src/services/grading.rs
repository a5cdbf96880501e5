//! 评分 - 业务能力层
//!
//! 按答案顺序遍历所有区域，统计应选、选对、多选的数量

use crate::models::item::HotSpotItem;

/// 一次评分的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeReport {
    pub number_of_required_answers: usize,
    pub number_of_correct_answers: usize,
    /// 只在本次评分中使用，不保存到作答状态
    pub number_of_incorrect_answers: usize,
    pub is_at_least_one_correct_selection: bool,
    /// 每个区域是否"应选且已选"
    pub item_correct: Vec<bool>,
}

impl GradeReport {
    /// 全部选对且没有多选
    pub fn is_correct(&self) -> bool {
        self.number_of_correct_answers == self.number_of_required_answers
            && self.number_of_incorrect_answers == 0
    }
}

/// 对照答案评分
///
/// `selection` 缺失的项视为未选中
pub fn grade(items: &[HotSpotItem], selection: &[bool]) -> GradeReport {
    let mut report = GradeReport {
        number_of_required_answers: 0,
        number_of_correct_answers: 0,
        number_of_incorrect_answers: 0,
        is_at_least_one_correct_selection: false,
        item_correct: vec![false; items.len()],
    };

    for (index, item) in items.iter().enumerate() {
        let item_selected = selection.get(index).copied().unwrap_or(false);

        if item.should_be_selected {
            report.number_of_required_answers += 1;
            if item_selected {
                report.number_of_correct_answers += 1;
                report.item_correct[index] = true;
                report.is_at_least_one_correct_selection = true;
            }
        } else if item_selected {
            report.number_of_incorrect_answers += 1;
        }
    }

    report
}

/// 计算得分：全对得 `question_weight`，否则为 0，没有部分分
pub fn score(is_correct: bool, question_weight: f64) -> f64 {
    if is_correct {
        question_weight
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(key: &[bool]) -> Vec<HotSpotItem> {
        key.iter()
            .enumerate()
            .map(|(i, &should)| HotSpotItem::new(format!("区域{}", i + 1), should))
            .collect()
    }

    #[test]
    fn test_extra_selection_makes_answer_wrong() {
        let report = grade(&items(&[true, false]), &[true, true]);
        assert_eq!(report.number_of_correct_answers, 1);
        assert_eq!(report.number_of_incorrect_answers, 1);
        assert!(!report.is_correct());
        assert!(report.is_at_least_one_correct_selection);
    }

    #[test]
    fn test_item_correct_flags() {
        let report = grade(&items(&[true, true, false]), &[false, true, false]);
        assert_eq!(report.item_correct, vec![false, true, false]);
        assert_eq!(report.number_of_required_answers, 2);
    }

    #[test]
    fn test_score_is_binary() {
        assert_eq!(score(true, 5.0), 5.0);
        assert_eq!(score(false, 5.0), 0.0);
    }
}
