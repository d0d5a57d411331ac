//! 信息流聚合服务
//!
//! 核心职责:
//! - 把持久化帖子与基线数据集确定性合并为一份信息流
//! - 订阅通知总线,数据集变化时重新合并并推送刷新事件到webview
//! - 提供分类筛选与单帖查找的读取入口
//!
//! 合并规则: 持久化帖子在前(新帖置顶),基线帖子按内置顺序紧随其后。
//! 不去重、不重排: 两个数据源的ID空间天然不相交,
//! 顺序本身就是展示顺序。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tauri::Emitter;

use crate::data::baseline::{BASELINE_POSTS, INVESTMENT_CATEGORIES};
use crate::models::feed_events::FeedUpdatedEvent;
use crate::models::post::Post;
use crate::services::notification_bus::{NotificationBus, Subscription, TOPIC_POSTS_CHANGED};
use crate::services::post_store::PostStore;

/// 推送到webview的信息流刷新事件名
pub const FEED_UPDATED_EVENT: &str = "feed-updated";

/// 不做筛选的分类标签
pub const CATEGORY_ALL: &str = "All";

/// 信息流聚合器
///
/// 每个应用实例一个聚合器。`activate` 之后开始响应总线通知,
/// 聚合器被释放时订阅守卫随之释放,自动退订。
pub struct FeedService {
    store: Arc<PostStore>,
    bus: Arc<NotificationBus>,

    /// 最近一次合并结果的快照
    current_feed: Mutex<Vec<Post>>,

    /// 对总线的订阅守卫,`activate` 时建立
    subscription: Mutex<Option<Subscription>>,

    /// 重新合并的累计次数
    recompute_count: AtomicU64,

    /// Tauri应用句柄(用于推送事件)
    app_handle: Option<tauri::AppHandle>,
}

impl FeedService {
    /// 创建新的聚合器
    pub fn new(store: Arc<PostStore>, bus: Arc<NotificationBus>) -> Self {
        Self {
            store,
            bus,
            current_feed: Mutex::new(Vec::new()),
            subscription: Mutex::new(None),
            recompute_count: AtomicU64::new(0),
            app_handle: None,
        }
    }

    /// 设置Tauri应用句柄
    pub fn with_app_handle(mut self, app_handle: tauri::AppHandle) -> Self {
        self.app_handle = Some(app_handle);
        self
    }

    /// 激活聚合器
    ///
    /// 订阅 `posts-changed` 主题并立即做一次初始合并(对应前端挂载时的首次加载)。
    /// 订阅处理器持弱引用,聚合器释放后在途通知静默失效。
    pub fn activate(self: &Arc<Self>) {
        let weak = Arc::downgrade(self);
        let sub = self.bus.subscribe(TOPIC_POSTS_CHANGED, move || {
            if let Some(service) = weak.upgrade() {
                service.republish(TOPIC_POSTS_CHANGED);
            }
        });

        {
            let mut slot = self
                .subscription
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *slot = Some(sub);
        }

        self.republish("activate");

        tracing::info!("信息流聚合器已激活");
    }

    /// 停用聚合器,释放总线订阅
    pub fn deactivate(&self) {
        let mut slot = self
            .subscription
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = None;

        tracing::info!("信息流聚合器已停用");
    }

    /// 合并后的完整信息流
    ///
    /// 每次调用都从存储重新读取: `持久化帖子 ++ 基线帖子`,
    /// 两段各自保序。存储读取是容错的,最坏情况等于纯基线数据集。
    pub fn merged_feed(&self) -> Vec<Post> {
        let mut feed = self.store.load();
        feed.extend(BASELINE_POSTS.iter().cloned());
        feed
    }

    /// 按分类筛选的信息流
    ///
    /// 筛选只影响返回值,是纯展示行为: 不触碰存储,不发通知。
    /// `None` 或 `"All"` 返回未筛选的完整合并结果。
    pub fn filtered_feed(&self, category: Option<&str>) -> Vec<Post> {
        let feed = self.merged_feed();

        match category {
            None => feed,
            Some(tag) if tag.trim().is_empty() || tag.eq_ignore_ascii_case(CATEGORY_ALL) => feed,
            Some(tag) => feed
                .into_iter()
                .filter(|post| post.matches_category(tag))
                .collect(),
        }
    }

    /// 在合并后的信息流中查找帖子
    pub fn find_post(&self, post_id: &str) -> Option<Post> {
        self.merged_feed()
            .into_iter()
            .find(|post| post.id == post_id)
    }

    /// 指定作者在合并信息流中的全部帖子
    ///
    /// 个人主页数据源,保持合并顺序。会话用户的主页因此
    /// 包含本次会话新发布的帖子。
    pub fn posts_by(&self, user_id: &str) -> Vec<Post> {
        self.merged_feed()
            .into_iter()
            .filter(|post| post.user.id == user_id)
            .collect()
    }

    /// 固定分类词表
    pub fn categories(&self) -> &'static [&'static str] {
        &INVESTMENT_CATEGORIES
    }

    /// 最近一次合并结果的快照
    pub fn current_feed(&self) -> Vec<Post> {
        self.current_feed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// 重新合并的累计次数
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count.load(Ordering::SeqCst)
    }

    /// 重新合并并广播刷新事件
    ///
    /// 每收到一次通知恰好执行一次: 重读存储、更新快照、
    /// 推送 `feed-updated` 事件让所有UI区域重新渲染。
    fn republish(&self, source_topic: &str) {
        let feed = self.merged_feed();
        let count = feed.len();

        {
            let mut snapshot = self
                .current_feed
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *snapshot = feed;
        }
        self.recompute_count.fetch_add(1, Ordering::SeqCst);

        tracing::debug!(
            total = count,
            source = %source_topic,
            "信息流已重新合并"
        );

        if let Some(ref app_handle) = self.app_handle {
            let event = FeedUpdatedEvent::new(count, source_topic);
            let _ = app_handle.emit(FEED_UPDATED_EVENT, event);
        }
    }
}
