//! 会话互动服务
//!
//! 维护当前观看者对各帖子的点赞/转发切换状态,以帖子ID为键。
//! 状态只活在会话内: 不写回帖子,不落盘,应用重启即归零。
//! 切换互动也绝不触发通知总线: 互动不是"新内容"。

use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::interaction::ViewerInteraction;
use crate::models::post::Post;

/// 会话互动服务
pub struct InteractionService {
    /// 帖子ID -> 会话互动状态
    interactions: Mutex<HashMap<String, ViewerInteraction>>,
}

impl InteractionService {
    pub fn new() -> Self {
        Self {
            interactions: Mutex::new(HashMap::new()),
        }
    }

    /// 切换帖子的点赞状态
    ///
    /// 首次互动时从帖子的持久化计数与标记惰性初始化。
    ///
    /// # 返回值
    /// 切换后的互动状态快照
    pub fn toggle_like(&self, post: &Post) -> ViewerInteraction {
        let mut map = self
            .interactions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let entry = map
            .entry(post.id.clone())
            .or_insert_with(|| ViewerInteraction::from_post(post));
        entry.toggle_like();

        tracing::debug!(
            post_id = %post.id,
            liked = entry.liked,
            like_count = entry.like_count,
            "切换点赞状态"
        );

        entry.clone()
    }

    /// 切换帖子的转发状态
    pub fn toggle_repost(&self, post: &Post) -> ViewerInteraction {
        let mut map = self
            .interactions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let entry = map
            .entry(post.id.clone())
            .or_insert_with(|| ViewerInteraction::from_post(post));
        entry.toggle_repost();

        tracing::debug!(
            post_id = %post.id,
            reposted = entry.reposted,
            repost_count = entry.repost_count,
            "切换转发状态"
        );

        entry.clone()
    }

    /// 查询帖子的会话互动状态
    ///
    /// 本会话内尚未互动过的帖子返回 `None`,
    /// 前端此时直接使用帖子自带的持久化计数渲染。
    pub fn interaction_for(&self, post_id: &str) -> Option<ViewerInteraction> {
        let map = self
            .interactions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        map.get(post_id).cloned()
    }

    /// 本会话内互动过的帖子数量
    pub fn active_count(&self) -> usize {
        let map = self
            .interactions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        map.len()
    }

    /// 清空全部会话互动状态
    ///
    /// 对应页面重载语义,webview启动时调用一次。
    pub fn reset(&self) {
        let mut map = self
            .interactions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let cleared = map.len();
        map.clear();

        tracing::info!(cleared = cleared, "会话互动状态已重置");
    }
}

impl Default for InteractionService {
    fn default() -> Self {
        Self::new()
    }
}
