//! 前端日志命令
//!
//! webview日志的传输通道: 前端logger单条或按批推送,后端用
//! 统一的tracing框架落盘,与Rust侧日志共用格式与存储。

use crate::models::frontend_log::{FrontendLog, LogLevel};

/// 记录单条前端日志事件
#[tauri::command]
pub async fn log_frontend_event(log: FrontendLog) -> Result<(), String> {
    dispatch(&log);
    Ok(())
}

/// 批量记录前端日志
///
/// 前端按批发送以减少IPC往返,每条独立落盘。
#[tauri::command]
pub async fn log_frontend_batch(logs: Vec<FrontendLog>) -> Result<(), String> {
    tracing::debug!(count = logs.len(), "接收前端日志批次");
    for log in &logs {
        dispatch(log);
    }
    Ok(())
}

/// 按级别映射到tracing事件,来源与区域作为结构化字段
fn dispatch(log: &FrontendLog) {
    let source = log.source();
    match log.level {
        LogLevel::Error => {
            tracing::error!(
                来源 = %source,
                消息 = %log.message,
                上下文 = ?log.context,
                路由 = ?log.route,
                时间 = %log.timestamp,
                "前端错误"
            );
        }
        LogLevel::Warn => {
            tracing::warn!(
                来源 = %source,
                消息 = %log.message,
                上下文 = ?log.context,
                路由 = ?log.route,
                "前端警告"
            );
        }
        LogLevel::Info => {
            tracing::info!(
                来源 = %source,
                消息 = %log.message,
                "前端信息"
            );
        }
        LogLevel::Debug => {
            tracing::debug!(
                来源 = %source,
                消息 = %log.message,
                上下文 = ?log.context,
                "前端调试"
            );
        }
    }
}
