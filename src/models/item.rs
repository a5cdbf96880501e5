use serde::{Deserialize, Serialize};

/// 热点题中的一个可选区域
///
/// `_shouldBeSelected` 属于答案，加载后不再修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotSpotItem {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub body: String,

    #[serde(rename = "_shouldBeSelected", default)]
    pub should_be_selected: bool,

    /// 区域在背景图上的位置（百分比）
    #[serde(rename = "_left", skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(rename = "_top", skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,

    /// 仅在替换为备用组件时写入，携带用户当前的选择
    #[serde(rename = "_isSelected", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_selected: bool,
}

impl HotSpotItem {
    pub fn new(title: impl Into<String>, should_be_selected: bool) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
            should_be_selected,
            left: None,
            top: None,
            is_selected: false,
        }
    }
}
