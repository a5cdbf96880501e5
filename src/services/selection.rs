//! 选择控制 - 业务能力层
//!
//! 只负责根据单选/多选规则计算新的选择，不修改任何共享状态

/// 一次切换的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    /// 切换后的完整选择
    pub selection: Vec<bool>,
    /// 选中状态发生变化的区域 `(索引, 现在是否选中)`，按处理顺序
    pub changed: Vec<(usize, bool)>,
}

/// 选择控制器
#[derive(Debug, Clone, Copy)]
pub struct SelectionController {
    single_select: bool,
}

impl SelectionController {
    /// `selectable == 1` 时为单选
    pub fn new(selectable: usize) -> Self {
        Self {
            single_select: selectable == 1,
        }
    }

    pub fn is_single_select(&self) -> bool {
        self.single_select
    }

    /// 把渲染列表中的位置换算为答案索引
    ///
    /// 渲染列表第一个元素是背景图，区域从位置 1 开始
    pub fn index_from_position(position: usize) -> Option<usize> {
        position.checked_sub(1)
    }

    /// 切换 `index` 处区域的选中状态
    ///
    /// 已选中则取消；否则单选模式下先取消其它所有选中再选中目标。
    /// 索引越界返回 `None`
    pub fn toggle(&self, current: &[bool], index: usize) -> Option<SelectionChange> {
        let was_selected = *current.get(index)?;
        let mut selection = current.to_vec();
        let mut changed = Vec::new();

        if was_selected {
            selection[index] = false;
            changed.push((index, false));
        } else {
            if self.single_select {
                for (other, selected) in selection.iter_mut().enumerate() {
                    if *selected {
                        *selected = false;
                        changed.push((other, false));
                    }
                }
            }
            selection[index] = true;
            changed.push((index, true));
        }

        Some(SelectionChange { selection, changed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_select_replaces_previous() {
        let controller = SelectionController::new(1);
        let change = controller.toggle(&[true, false, false], 2).unwrap();
        assert_eq!(change.selection, vec![false, false, true]);
        assert_eq!(change.changed, vec![(0, false), (2, true)]);
    }

    #[test]
    fn test_multi_select_is_independent() {
        let controller = SelectionController::new(3);
        let change = controller.toggle(&[true, false, false], 1).unwrap();
        assert_eq!(change.selection, vec![true, true, false]);
        assert_eq!(change.changed, vec![(1, true)]);
    }

    #[test]
    fn test_toggle_selected_item_deselects_it() {
        let controller = SelectionController::new(1);
        let change = controller.toggle(&[false, true], 1).unwrap();
        assert_eq!(change.selection, vec![false, false]);
    }

    #[test]
    fn test_out_of_range() {
        let controller = SelectionController::new(2);
        assert!(controller.toggle(&[false, false], 2).is_none());
        assert_eq!(SelectionController::index_from_position(0), None);
        assert_eq!(SelectionController::index_from_position(1), Some(0));
    }
}
