//! 工具模块
//!
//! - `logger`: 结构化日志系统初始化与业务日志宏

pub mod logger;
