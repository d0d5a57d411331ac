//! 服务层模块
//!
//! 包含所有业务逻辑服务:
//! - `post_store`: 帖子持久化,管理用户帖子的磁盘存储
//! - `notification_bus`: 进程内通知总线,UI区域间的无载荷事件
//! - `composer_service`: 发布器服务,校验、持久化并广播新帖子
//! - `feed_service`: 信息流聚合服务,合并用户帖子与基线数据
//! - `interaction_service`: 会话级互动状态,点赞/转发的乐观计数
//! - `config_service`: .env配置文件的读写
//! - `panel_api`: 侧栏面板API客户端,行情与顾问数据
//!
//! # 设计原则
//!
//! 遵循 `.specify/memory/constitution.md` 的所有原则:
//! 1. **存在即合理**: 每个服务都有单一职责,互不重叠
//! 2. **优雅即简约**: 方法签名清晰,易于理解和使用
//! 3. **性能即艺术**: 复用HTTP连接池,锁外调用订阅回调
//! 4. **错误处理**: 所有外部调用都有完整错误处理和日志
//! 5. **日志安全**: 记录关键操作,不记录敏感数据(如API密钥)
//!
//! # 服务架构
//!
//! ```text
//! ┌─────────────────┐
//! │  Tauri Commands │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌──────────────────────────────────────┐
//! │         Services Layer               │
//! │  ┌──────────────┐  ┌──────────────┐  │
//! │  │ComposerService│  │ FeedService  │  │
//! │  └──────┬───────┘  └──────┬───────┘  │
//! │         │                 │          │
//! │  ┌──────▼─────┐  ┌────────▼───────┐  │
//! │  │ PostStore  │  │NotificationBus │  │
//! │  └────────────┘  └────────────────┘  │
//! └──────────────────────────────────────┘
//!          │                 │
//!          ▼                 ▼
//!    磁盘JSON存储        订阅区域回调
//! ```
//!
//! # 使用示例
//!
//! ```no_run
//! use std::sync::Arc;
//! use communityx::services::{ComposerService, FeedService, NotificationBus, PostStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // 初始化服务
//! let store = Arc::new(PostStore::new()?);
//! let bus = Arc::new(NotificationBus::new());
//!
//! let composer = ComposerService::new(Arc::clone(&store), Arc::clone(&bus));
//! let feed = Arc::new(FeedService::new(Arc::clone(&store), Arc::clone(&bus)));
//! feed.activate();
//!
//! // 发布帖子: 持久化 + 广播到所有订阅区域
//! let post = composer.submit("Adding to my $NVDA position")?;
//!
//! // 聚合视图: 用户帖子在前,基线数据在后
//! let merged = feed.merged_feed();
//! assert_eq!(merged.first().map(|p| p.id.clone()), Some(post.id));
//! # Ok(())
//! # }
//! ```

pub mod composer_service;
pub mod config_service;
pub mod feed_service;
pub mod interaction_service;
pub mod notification_bus;
pub mod panel_api;
pub mod post_store;

// 重导出常用类型,简化外部引用
pub use composer_service::ComposerService;
pub use config_service::ConfigService;
pub use feed_service::{FeedService, CATEGORY_ALL, FEED_UPDATED_EVENT};
pub use interaction_service::InteractionService;
pub use notification_bus::{NotificationBus, Subscription, TOPIC_POSTS_CHANGED};
pub use panel_api::{
    DocumentAnalysis, GoldRate, InvestmentAdviceRequest, PanelApiClient, SavingsScheme,
    SocialTrend, StructuredAnalysis,
};
pub use post_store::PostStore;
