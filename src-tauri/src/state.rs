use crate::services::{
    ComposerService, ConfigService, FeedService, InteractionService, NotificationBus,
    PanelApiClient, PostStore,
};
use std::sync::Arc;

/// 应用全局状态
///
/// 存在即合理: 每个字段代表应用核心能力的单一来源
/// - store: 用户帖子持久化
/// - bus: 跨区域更新通知
/// - composer: 发布流程编排
/// - feed: 信息流聚合视图
/// - interactions: 会话级互动状态
/// - panel_api: 侧栏面板数据源
pub struct AppState {
    /// 帖子存储: 唯一的磁盘写入入口
    pub store: Arc<PostStore>,

    /// 通知总线: 唯一的跨区域事件通道
    pub bus: Arc<NotificationBus>,

    /// 发布器服务: 唯一的帖子创建入口
    pub composer: Arc<ComposerService>,

    /// 信息流服务: 聚合视图与事件转发的看守者
    pub feed: Arc<FeedService>,

    /// 互动服务: 点赞/转发的会话级账本
    pub interactions: Arc<InteractionService>,

    /// 面板API客户端: 唯一的外部数据通信渠道
    pub panel_api: Arc<PanelApiClient>,
}

impl AppState {
    /// 初始化应用状态
    ///
    /// 装配顺序即依赖顺序: 存储与总线先行,
    /// 发布器和信息流在其上组合,最后激活信息流订阅。
    ///
    /// # 参数
    /// - `app_handle`: Tauri应用句柄,信息流服务用它向webview转发事件
    ///
    /// # 错误处理
    /// 任何服务初始化失败都将导致整个应用无法启动 - 这是必然,因为不完整的状态等同于无用
    pub fn new(app_handle: tauri::AppHandle) -> Result<Self, Box<dyn std::error::Error>> {
        let panel_config = ConfigService::load_panel_config()?;

        let store = Arc::new(PostStore::new()?);
        let bus = Arc::new(NotificationBus::new());
        let composer = Arc::new(ComposerService::new(Arc::clone(&store), Arc::clone(&bus)));
        let feed = Arc::new(
            FeedService::new(Arc::clone(&store), Arc::clone(&bus)).with_app_handle(app_handle),
        );
        let interactions = Arc::new(InteractionService::new());
        let panel_api = Arc::new(PanelApiClient::new(panel_config)?);

        // 订阅总线并完成首次聚合,此后发布帖子即触发全区域更新
        feed.activate();

        tracing::info!(
            storage = %store.storage_path().display(),
            "AppState initialized with feed aggregation active"
        );

        Ok(Self {
            store,
            bus,
            composer,
            feed,
            interactions,
            panel_api,
        })
    }
}
