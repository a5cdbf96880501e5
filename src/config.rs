use crate::models::screen::Breakpoints;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 小屏幕下替换热点题的备用组件名称
    pub alternate_component: String,
    /// 屏幕尺寸断点
    pub breakpoints: Breakpoints,
    /// 当前视口宽度（像素）
    pub screen_width: u32,
    /// 题目配置文件路径
    pub question_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose_logging: false,
            alternate_component: "gmcq".to_string(),
            breakpoints: Breakpoints::default(),
            screen_width: 1024,
            question_file: "questions/hot_spot.json".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            alternate_component: std::env::var("ALTERNATE_COMPONENT").unwrap_or(default.alternate_component),
            breakpoints: Breakpoints {
                small: std::env::var("SMALL_BREAKPOINT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.breakpoints.small),
                medium: std::env::var("MEDIUM_BREAKPOINT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.breakpoints.medium),
            },
            screen_width: std::env::var("SCREEN_WIDTH").ok().and_then(|v| v.parse().ok()).unwrap_or(default.screen_width),
            question_file: std::env::var("QUESTION_FILE").unwrap_or(default.question_file),
        }
    }
}
