//! 通知总线服务
//!
//! 进程内的 主题 -> 订阅者 注册表,用于跨UI区域广播"有新内容"信号。
//! 通知不携带载荷: 订阅方收到信号后自行从数据源重读,
//! 保证各区域渲染同一份数据集,也避免载荷版本漂移。
//!
//! 总线是按应用实例构造的普通服务,不做全局单例,
//! 测试可以各自注入独立实例互不干扰。
//!
//! # 设计原则
//!
//! - 订阅返回RAII守卫,守卫释放即自动退订(对应前端卸载时移除监听器)
//! - 发布是同步的: 函数返回时所有存活订阅者都已被调用
//! - 处理器在锁外调用,处理器内可以再订阅/退订/发布而不死锁

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

/// 信息流数据集发生变化
///
/// 提交管线成功落盘新帖后发布;聚合器订阅该主题触发重新合并。
pub const TOPIC_POSTS_CHANGED: &str = "posts-changed";

type Handler = Arc<dyn Fn() + Send + Sync + 'static>;

/// 注册表内部状态
struct BusInner {
    /// 主题 -> (订阅ID -> 处理器)
    topics: HashMap<String, HashMap<u64, Handler>>,
    /// 单调递增的订阅ID分配器
    next_id: u64,
}

/// 通知总线
pub struct NotificationBus {
    inner: Arc<Mutex<BusInner>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(BusInner {
                topics: HashMap::new(),
                next_id: 0,
            })),
        }
    }

    /// 订阅主题
    ///
    /// # 参数
    /// - `topic`: 主题名
    /// - `handler`: 收到通知时的处理器,无参数无返回值
    ///
    /// # 返回值
    /// RAII订阅守卫。守卫存活期间处理器有效,守卫释放即退订。
    /// 调用方必须持有守卫,丢弃返回值等于立即退订。
    #[must_use = "丢弃订阅守卫会立即退订"]
    pub fn subscribe<F>(&self, topic: &str, handler: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = {
            let mut inner = self
                .inner
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            inner.next_id += 1;
            let id = inner.next_id;
            inner
                .topics
                .entry(topic.to_string())
                .or_default()
                .insert(id, Arc::new(handler));
            id
        };

        tracing::debug!(topic = %topic, subscription_id = id, "订阅主题");

        Subscription {
            bus: Arc::downgrade(&self.inner),
            topic: topic.to_string(),
            id,
        }
    }

    /// 发布通知
    ///
    /// 同步调用该主题下的所有存活处理器。无订阅者时是空操作。
    /// 处理器快照在锁外逐个调用,因此与发布并发的退订
    /// 不保证拦截住已在途的这一次通知。
    pub fn publish(&self, topic: &str) {
        let handlers: Vec<Handler> = {
            let inner = self
                .inner
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            inner
                .topics
                .get(topic)
                .map(|subs| subs.values().cloned().collect())
                .unwrap_or_default()
        };

        tracing::debug!(
            topic = %topic,
            subscribers = handlers.len(),
            "发布通知"
        );

        for handler in handlers {
            handler();
        }
    }

    /// 当前主题的存活订阅数
    pub fn subscriber_count(&self, topic: &str) -> usize {
        let inner = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        inner.topics.get(topic).map(|subs| subs.len()).unwrap_or(0)
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}

/// 订阅守卫
///
/// 释放时从注册表移除对应处理器;总线已先行销毁时静默跳过。
pub struct Subscription {
    bus: Weak<Mutex<BusInner>>,
    topic: String,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            let mut inner = inner
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(subs) = inner.topics.get_mut(&self.topic) {
                subs.remove(&self.id);
                if subs.is_empty() {
                    inner.topics.remove(&self.topic);
                }
            }
            tracing::debug!(topic = %self.topic, subscription_id = self.id, "退订主题");
        }
    }
}
