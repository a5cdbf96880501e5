//! 提交流程
//!
//! 流程顺序：
//! 1. can_submit → 不满足时 on_cannot_submit
//! 2. 标记已提交 → 评分 → 写入得分 → 显示批改
//! 3. 根据是否全对 / 部分正确生成反馈

use tracing::info;

use crate::workflow::lifecycle::QuestionLifecycle;

/// 作答正确程度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correctness {
    Correct,
    PartlyCorrect,
    Incorrect,
}

/// 提交后的反馈
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feedback {
    pub correctness: Correctness,
    pub score: f64,
}

/// 提交结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmitOutcome {
    /// 未满足提交条件，题目状态不变
    CannotSubmit,
    Submitted(Feedback),
}

/// 提交流程
///
/// 不持有题目，只按顺序调用生命周期钩子
#[derive(Debug, Default, Clone, Copy)]
pub struct SubmitFlow;

impl SubmitFlow {
    pub fn submit<Q: QuestionLifecycle + ?Sized>(question: &mut Q) -> SubmitOutcome {
        if !question.can_submit() {
            question.on_cannot_submit();
            return SubmitOutcome::CannotSubmit;
        }

        question.set_submitted(true);
        let is_correct = question.is_correct();
        question.set_score();
        question.show_marking();

        let correctness = if is_correct {
            Correctness::Correct
        } else if question.is_partly_correct() {
            Correctness::PartlyCorrect
        } else {
            Correctness::Incorrect
        };

        let feedback = Feedback {
            correctness,
            score: question.score(),
        };
        info!("📤 提交完成: {:?}, 得分 {}", feedback.correctness, feedback.score);

        SubmitOutcome::Submitted(feedback)
    }

    /// 再次访问题目：重置作答并重新启用
    pub fn revisit<Q: QuestionLifecycle + ?Sized>(question: &mut Q) {
        question.reset_question_on_revisit();
        question.enable_question();
    }
}
