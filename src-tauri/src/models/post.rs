//! 信息流帖子模型
//!
//! 帖子是信息流的基本单元,分两类来源:
//! - 用户撰写的帖子: 经工厂方法构造,持久化到本地存储
//! - 基线数据集帖子: 编译期内置,不可变
//!
//! 两类帖子共用同一线格式,字段以camelCase对齐TypeScript端。

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user_profile::UserProfile;

/// 用户撰写帖子的固定时间标签
///
/// 原型产品不做相对时间计算,新帖一律显示该标签。
pub const COMPOSED_TIMESTAMP: &str = "Just now";

/// 帖子情绪倾向
///
/// 序列化为小写字符串,以对齐TypeScript端。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl Default for Sentiment {
    fn default() -> Self {
        Sentiment::Neutral
    }
}

/// 投票选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollOption {
    pub text: String,
    pub votes: u64,
}

/// 帖子附带的投票
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub options: Vec<PollOption>,
    pub total_votes: u64,
    pub ends_at: String,
}

/// 信息流帖子
///
/// `likes`/`comments`/`reposts` 是持久化计数,始终非负;
/// `is_liked`/`is_reposted` 是持久化标记,用户撰写的帖子初始为false。
/// 会话内的点赞/转发切换状态不写入本结构,见 `ViewerInteraction`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// 帖子唯一标识,在合并后的信息流中全局唯一
    pub id: String,
    pub content: String,
    pub user: UserProfile,
    /// 展示用时间字符串,用户撰写的帖子固定为 `"Just now"`
    pub timestamp: String,
    pub likes: u64,
    pub comments: u64,
    pub reposts: u64,
    pub is_liked: bool,
    pub is_reposted: bool,
    #[serde(default)]
    pub sentiment: Sentiment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,
}

impl Post {
    /// 构造一条用户撰写的新帖子
    ///
    /// 调用方必须先完成非空校验;本方法只做修剪。
    /// 新帖子: 全新UUID、零计数、未点赞未转发、中性情绪、无附加内容。
    pub fn composed(content: &str, author: UserProfile) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.trim().to_string(),
            user: author,
            timestamp: COMPOSED_TIMESTAMP.to_string(),
            likes: 0,
            comments: 0,
            reposts: 0,
            is_liked: false,
            is_reposted: false,
            sentiment: Sentiment::Neutral,
            tickers: None,
            image: None,
            poll: None,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("帖子ID不能为空".to_string());
        }

        if self.content.trim().is_empty() {
            return Err("帖子内容不能为空".to_string());
        }

        self.user.validate()?;

        Ok(())
    }

    /// 判断帖子内容是否命中给定分类标签
    ///
    /// 大小写不敏感的内容包含匹配,仅用于前端筛选展示,
    /// 不影响持久化数据与合并顺序。
    pub fn matches_category(&self, category: &str) -> bool {
        let needle = category.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.content.to_lowercase().contains(&needle)
    }
}
