//! 发帖服务
//!
//! 用户提交新帖的完整管线: 校验 -> 构造 -> 落盘 -> 广播。
//!
//! 顺序约束: 先落盘后广播。订阅者收到通知后重读存储时,
//! 新帖必定已经可见。校验失败或落盘失败都不发广播,
//! 失败的提交对外不产生任何可观察副作用。

use std::sync::Arc;

use crate::data::baseline::session_user;
use crate::models::errors::{AppError, ValidationError};
use crate::models::post::Post;
use crate::services::notification_bus::{NotificationBus, TOPIC_POSTS_CHANGED};
use crate::services::post_store::PostStore;

/// 发帖服务
pub struct ComposerService {
    store: Arc<PostStore>,
    bus: Arc<NotificationBus>,
}

impl ComposerService {
    pub fn new(store: Arc<PostStore>, bus: Arc<NotificationBus>) -> Self {
        Self { store, bus }
    }

    /// 提交一条新帖子
    ///
    /// # 参数
    /// - `content`: 用户输入的原始内容,提交前修剪首尾空白
    ///
    /// # 返回值
    /// 持久化成功的帖子(含分配的UUID与固定时间标签)
    ///
    /// # 错误处理
    /// - 修剪后为空返回 ValidationError::EmptyContent,不落盘不广播
    /// - 落盘失败返回 StorageError,不广播
    pub fn submit(&self, content: &str) -> Result<Post, AppError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            tracing::debug!("提交内容为空,拒绝发布");
            return Err(ValidationError::EmptyContent.into());
        }

        let post = Post::composed(trimmed, session_user().clone());
        post.validate().map_err(ValidationError::InvalidPost)?;

        let count = self.store.append(&post)?;
        self.bus.publish(TOPIC_POSTS_CHANGED);

        tracing::info!(
            post_id = %post.id,
            author = %post.user.username,
            total = count,
            "新帖已发布"
        );

        Ok(post)
    }
}
