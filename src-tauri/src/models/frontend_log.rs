//! 前端日志模型
//!
//! webview侧的日志通过命令层推送到后端,与Rust侧日志汇入同一
//! 订阅器统一落盘。字段与TypeScript端logger的约定一一对应,
//! 线格式为camelCase。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 单条前端日志
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendLog {
    /// 日志级别
    pub level: LogLevel,
    /// 日志消息
    pub message: String,
    /// 结构化上下文,前端传什么记什么
    #[serde(default)]
    pub context: serde_json::Value,
    /// 前端产生日志的时刻
    pub timestamp: DateTime<Utc>,
    /// 发出日志的UI区域 (feed / composer / sidebar / profile / panel)
    #[serde(default)]
    pub region: Option<String>,
    /// 触发日志时的页面路由
    #[serde(default)]
    pub route: Option<String>,
}

impl FrontendLog {
    /// tracing输出的来源标签: `webview:<region>`,无区域时退化为 `webview`
    pub fn source(&self) -> String {
        match self.region.as_deref() {
            Some(region) if !region.trim().is_empty() => format!("webview:{}", region),
            _ => "webview".to_string(),
        }
    }
}

/// 日志级别,与前端logger的级别字符串对齐
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}
