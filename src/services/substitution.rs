//! 响应式替换 - 业务能力层
//!
//! 判断是否需要替换，并为备用组件构建配置

use crate::models::attempt::AttemptState;
use crate::models::question::QuestionConfig;
use crate::models::screen::ScreenSize;

/// 小于大屏幕时需要替换
pub fn needs_substitution(screen_size: ScreenSize) -> bool {
    !screen_size.is_large()
}

/// 构建备用组件的配置
///
/// 复制题干、说明和区域，带上用户当前的选择，并打上 `_wasHotSpot` 标记
pub fn prepare_alternate_config(
    config: &QuestionConfig,
    attempt: &AttemptState,
    component: &str,
) -> QuestionConfig {
    let mut alternate = config.clone();
    alternate.component = component.to_string();
    alternate.was_hot_spot = true;

    for (item, state) in alternate.items.iter_mut().zip(&attempt.items) {
        item.is_selected = state.is_selected;
    }

    alternate
}
