use crate::error::{HotSpotError, Result};
use crate::models::question::QuestionConfig;
use std::path::Path;
use tokio::fs;

/// 题目文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// 根据扩展名判断格式
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Some(ConfigFormat::Json),
            Some("toml") => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// 从字符串解析题目配置并校验
pub fn parse_question_config(content: &str, format: ConfigFormat) -> Result<QuestionConfig> {
    let config: QuestionConfig = match format {
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    config.validate()?;
    Ok(config)
}

/// 从 JSON 或 TOML 文件加载题目配置
pub async fn load_question_config(path: &Path) -> Result<QuestionConfig> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| HotSpotError::UnsupportedFormat {
        path: path.display().to_string(),
    })?;

    let content = fs::read_to_string(path).await?;
    let config = parse_question_config(&content, format)?;

    tracing::info!(
        "成功加载题目 {}: {} 个区域，需选中 {} 个",
        path.file_name().unwrap_or_default().to_string_lossy(),
        config.items.len(),
        config.required_count()
    );

    Ok(config)
}
