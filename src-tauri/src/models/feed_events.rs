//! 信息流事件模型

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// 信息流刷新事件
///
/// 聚合器每次重新计算合并数据集后推送到webview,
/// 各UI区域收到后从命令层重新拉取数据。
/// 字段使用camelCase以对齐TypeScript端。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedUpdatedEvent {
    /// 重新计算后合并数据集的帖子总数
    pub post_count: usize,
    /// 触发本次刷新的通知主题
    pub source_topic: String,
    /// 事件产生时间 (RFC 3339)
    pub timestamp: String,
}

impl FeedUpdatedEvent {
    pub fn new(post_count: usize, source_topic: &str) -> Self {
        Self {
            post_count,
            source_topic: source_topic.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
