//! 会话内互动状态模型
//!
//! 记录当前观看者对单条帖子的点赞/转发切换状态与乐观计数。
//! 该状态以帖子ID为键保存在会话服务中,绝不写回帖子本体,
//! 也绝不持久化: 应用重启后一切互动状态归零。

use serde::{Deserialize, Serialize};

use crate::models::post::Post;

/// 观看者对单条帖子的互动状态
///
/// 首次互动时从帖子的持久化计数与标记惰性初始化,
/// 之后的所有切换只改动本结构,字段以camelCase对齐TypeScript端。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerInteraction {
    pub liked: bool,
    pub like_count: u64,
    pub reposted: bool,
    pub repost_count: u64,
}

impl ViewerInteraction {
    /// 从帖子的持久化状态初始化
    pub fn from_post(post: &Post) -> Self {
        Self {
            liked: post.is_liked,
            like_count: post.likes,
            reposted: post.is_reposted,
            repost_count: post.reposts,
        }
    }

    /// 切换点赞状态
    ///
    /// 未赞 -> 已赞: 计数加一; 已赞 -> 未赞: 计数减一。
    /// 计数下限为零: 持久化数据不自洽时(已赞但计数为零)饱和减法兜底。
    pub fn toggle_like(&mut self) {
        if self.liked {
            self.like_count = self.like_count.saturating_sub(1);
        } else {
            self.like_count += 1;
        }
        self.liked = !self.liked;
    }

    /// 切换转发状态,计数规则与点赞一致
    pub fn toggle_repost(&mut self) {
        if self.reposted {
            self.repost_count = self.repost_count.saturating_sub(1);
        } else {
            self.repost_count += 1;
        }
        self.reposted = !self.reposted;
    }
}
