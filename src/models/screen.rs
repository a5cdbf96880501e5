use serde::{Deserialize, Serialize};

/// 视口尺寸分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenSize {
    Small,
    Medium,
    Large,
}

/// 屏幕尺寸断点（像素）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub small: u32,
    pub medium: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            small: 520,
            medium: 760,
        }
    }
}

impl ScreenSize {
    /// 根据视口宽度分类
    pub fn from_width(width: u32, breakpoints: &Breakpoints) -> Self {
        if width > breakpoints.medium {
            ScreenSize::Large
        } else if width > breakpoints.small {
            ScreenSize::Medium
        } else {
            ScreenSize::Small
        }
    }

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            ScreenSize::Small => "small",
            ScreenSize::Medium => "medium",
            ScreenSize::Large => "large",
        }
    }

    /// 热点题只在大屏幕上原生显示
    pub fn is_large(self) -> bool {
        self == ScreenSize::Large
    }
}

impl std::fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
