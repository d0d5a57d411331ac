//! 数据模型模块
//!
//! 包含所有核心数据结构:
//! - errors: 错误类型定义 (校验、存储、面板API、信息流、应用级错误)
//! - user_profile: 用户公开资料 (帖子作者身份)
//! - post: 信息流帖子 (持久化计数与线格式)
//! - interaction: 会话内互动状态 (点赞/转发切换,绝不持久化)
//! - feed_events: 信息流刷新事件 (推送到webview)
//! - market: 市场侧栏数据 (热门话题与指数行情)
//! - panel_config: 侧栏面板配置 (顾问服务地址与行情密钥)
//! - frontend_log: 前端日志桥接
//!
//! # 设计原则
//!
//! 遵循 `.specify/memory/constitution.md` 的所有原则:
//! 1. **存在即合理**: 每个字段都有明确目的,无冗余
//! 2. **优雅即简约**: 类型名自文档化,代码自我阐述
//! 3. **性能即艺术**: 使用引用而非克隆,高效数据结构
//! 4. **错误处理**: 所有验证返回 Result,提供完整上下文
//! 5. **日志安全**: 敏感数据不记录到日志 (如 API 密钥)

pub mod errors;
pub mod feed_events;
pub mod frontend_log;
pub mod interaction;
pub mod market;
pub mod panel_config;
pub mod post;
pub mod user_profile;

// 重导出常用类型,简化外部引用
pub use errors::{ApiError, AppError, FeedError, StorageError, ValidationError};
pub use feed_events::FeedUpdatedEvent;
pub use frontend_log::{FrontendLog, LogLevel};
pub use interaction::ViewerInteraction;
pub use market::{MarketIndex, TrendingTopic};
pub use panel_config::{PanelConfig, PanelConfigError};
pub use post::{Poll, PollOption, Post, Sentiment, COMPOSED_TIMESTAMP};
pub use user_profile::{InvestorType, UserProfile};
