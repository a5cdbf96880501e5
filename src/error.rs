use thiserror::Error;

/// 热点题错误类型
#[derive(Debug, Error)]
pub enum HotSpotError {
    /// 响应式替换所需的备用组件未注册（致命配置错误）
    #[error("备用组件 {component} 未包含在构建中，无法替换热点题")]
    AlternateComponentMissing { component: String },

    /// 题目配置不合法
    #[error("题目配置不合法: {reason}")]
    InvalidConfig { reason: String },

    /// 不支持的题目文件格式
    #[error("不支持的题目文件格式: {path}")]
    UnsupportedFormat { path: String },

    /// 文件读取失败
    #[error("读取文件失败: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 解析失败
    #[error("JSON解析失败: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML 解析失败
    #[error("TOML解析失败: {0}")]
    Toml(#[from] toml::de::Error),
}

// ========== 便捷构造函数 ==========

impl HotSpotError {
    /// 创建备用组件缺失错误
    pub fn alternate_missing(component: impl Into<String>) -> Self {
        HotSpotError::AlternateComponentMissing {
            component: component.into(),
        }
    }

    /// 创建配置不合法错误
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        HotSpotError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

/// 热点题结果类型
pub type Result<T> = std::result::Result<T, HotSpotError>;
