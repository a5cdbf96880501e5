//! 题目生命周期接口
//!
//! 宿主通过这组钩子驱动题目完成提交、批改、重置和答案展示

/// 题目生命周期参与者
pub trait QuestionLifecycle {
    /// 再次访问题目时重置为未作答状态
    fn reset_question_on_revisit(&mut self);

    /// 是否允许提交（至少选中一个区域）
    fn can_submit(&mut self) -> bool;

    /// 不允许提交时的通知
    fn on_cannot_submit(&mut self) {}

    /// 对照答案评分，同时更新作答统计
    fn is_correct(&mut self) -> bool;

    /// 根据最近一次评分写入得分
    fn set_score(&mut self);

    fn score(&self) -> f64;

    /// 提交后显示批改结果
    fn show_marking(&mut self);

    fn show_correct_answer(&mut self);

    fn hide_correct_answer(&mut self);

    /// 是否至少选对一个区域（用于反馈文案）
    fn is_partly_correct(&self) -> bool;

    fn set_submitted(&mut self, submitted: bool);

    fn disable_question(&mut self) {}

    fn enable_question(&mut self) {}
}
