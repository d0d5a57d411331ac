use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 面板配置错误
///
/// 处理侧栏面板配置加载与保存过程中的失败场景。
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum PanelConfigError {
    /// 无效的服务地址
    ///
    /// 顾问服务地址必须是 http(s) URL
    #[error("无效的服务地址: {0}")]
    InvalidBaseUrl(String),

    /// I/O错误
    ///
    /// 读取或写入配置文件时的文件系统错误
    #[error("I/O错误: {0}")]
    IoError(String),
}

/// 侧栏面板配置
///
/// 封装面板客户端所需的全部外部参数:
/// - 本地顾问服务的基地址 (金价、储蓄方案、文档分析、投资建议)
/// - 公开行情趋势API的密钥 (可选,缺失时趋势面板保持禁用)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// 顾问服务基地址
    ///
    /// 示例: "http://127.0.0.1:5000"
    pub base_url: String,

    /// 行情趋势API密钥 (可选)
    ///
    /// 绝不写入日志明文,摘要输出只报告是否已配置
    pub rapidapi_key: Option<String>,
}

impl PanelConfig {
    /// 创建新的面板配置
    ///
    /// # 参数
    /// - `base_url`: 顾问服务基地址,尾部斜杠会被修剪
    ///
    /// # 示例
    /// ```
    /// use communityx::models::PanelConfig;
    ///
    /// let config = PanelConfig::new("http://127.0.0.1:5000/".to_string());
    /// assert_eq!(config.base_url, "http://127.0.0.1:5000");
    /// ```
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            rapidapi_key: None,
        }
    }

    /// 设置行情趋势API密钥 (构建器模式)
    ///
    /// # 示例
    /// ```
    /// use communityx::models::PanelConfig;
    ///
    /// let config = PanelConfig::default()
    ///     .with_rapidapi_key("abc123".to_string());
    /// assert!(config.rapidapi_key.is_some());
    /// ```
    pub fn with_rapidapi_key(mut self, key: String) -> Self {
        self.rapidapi_key = Some(key);
        self
    }

    /// 校验配置
    ///
    /// # 错误处理
    /// - 基地址不是 http(s) URL 时返回 InvalidBaseUrl
    pub fn validate(&self) -> Result<(), PanelConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(PanelConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        Ok(())
    }

    /// 拼接顾问服务端点URL
    ///
    /// # 示例
    /// ```
    /// use communityx::models::PanelConfig;
    ///
    /// let config = PanelConfig::default();
    /// assert_eq!(
    ///     config.endpoint("get_gold_rates"),
    ///     "http://127.0.0.1:5000/get_gold_rates"
    /// );
    /// ```
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// 获取配置摘要 (用于日志,不记录密钥)
    ///
    /// 遵循安全日志原则: 不泄露敏感信息。
    ///
    /// # 示例
    /// ```
    /// use communityx::models::PanelConfig;
    ///
    /// let config = PanelConfig::default()
    ///     .with_rapidapi_key("supersecret".to_string());
    ///
    /// let summary = config.summary_for_logging();
    /// assert!(!summary.contains("supersecret"));
    /// ```
    pub fn summary_for_logging(&self) -> String {
        let key_hint = if self.rapidapi_key.is_some() {
            " (trends key configured)"
        } else {
            " (trends key missing)"
        };
        format!("{}{}", self.base_url, key_hint)
    }
}

impl Default for PanelConfig {
    /// 默认配置: 本机5000端口的顾问服务,无趋势密钥
    fn default() -> Self {
        Self::new("http://127.0.0.1:5000".to_string())
    }
}

impl From<std::io::Error> for PanelConfigError {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match err.kind() {
            ErrorKind::PermissionDenied => PanelConfigError::IoError(format!("权限不足: {}", err)),
            _ => PanelConfigError::IoError(err.to_string()),
        }
    }
}
