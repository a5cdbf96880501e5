use serde::{Deserialize, Serialize};

use crate::error::{HotSpotError, Result};
use crate::models::item::HotSpotItem;

/// 背景图
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graphic {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// 热点题配置
///
/// 每个题目实例加载一次，作答过程中只读（洗牌除外）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionConfig {
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(rename = "_component", default = "default_component")]
    pub component: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub body: String,

    #[serde(default)]
    pub instruction: String,

    #[serde(rename = "_graphic", skip_serializing_if = "Option::is_none")]
    pub graphic: Option<Graphic>,

    #[serde(rename = "_items")]
    pub items: Vec<HotSpotItem>,

    /// 最多可同时选中的数量，1 表示单选
    #[serde(rename = "_selectable", default = "default_selectable")]
    pub selectable: usize,

    #[serde(rename = "_isRandom", default)]
    pub is_random: bool,

    #[serde(rename = "_isEnabled", default = "default_true")]
    pub is_enabled: bool,

    #[serde(rename = "_isSubmitted", default)]
    pub is_submitted: bool,

    #[serde(rename = "_questionWeight", default = "default_question_weight")]
    pub question_weight: f64,

    /// 由热点题替换而来的备用组件配置会带上此标记
    #[serde(rename = "_wasHotSpot", default, skip_serializing_if = "std::ops::Not::not")]
    pub was_hot_spot: bool,
}

fn default_component() -> String {
    "hotSpot".to_string()
}

fn default_selectable() -> usize {
    1
}

fn default_true() -> bool {
    true
}

fn default_question_weight() -> f64 {
    1.0
}

impl QuestionConfig {
    /// 使用默认设置创建题目配置
    pub fn new(items: Vec<HotSpotItem>) -> Self {
        Self {
            id: String::new(),
            component: default_component(),
            title: String::new(),
            body: String::new(),
            instruction: String::new(),
            graphic: None,
            items,
            selectable: default_selectable(),
            is_random: false,
            is_enabled: true,
            is_submitted: false,
            question_weight: default_question_weight(),
            was_hot_spot: false,
        }
    }

    pub fn with_selectable(mut self, selectable: usize) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn with_question_weight(mut self, question_weight: f64) -> Self {
        self.question_weight = question_weight;
        self
    }

    /// 是否接受用户切换选择
    pub fn accepts_toggle(&self) -> bool {
        self.is_enabled && !self.is_submitted
    }

    /// 答案中需要选中的区域数量
    pub fn required_count(&self) -> usize {
        self.items.iter().filter(|item| item.should_be_selected).count()
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(HotSpotError::invalid_config("_items 不能为空"));
        }
        if self.selectable == 0 {
            return Err(HotSpotError::invalid_config("_selectable 必须大于 0"));
        }
        if !self.question_weight.is_finite() || self.question_weight < 0.0 {
            return Err(HotSpotError::invalid_config(format!(
                "_questionWeight 不合法: {}",
                self.question_weight
            )));
        }
        Ok(())
    }
}
