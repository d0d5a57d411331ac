//! 市场侧栏数据模型

use serde::{Deserialize, Serialize};

use crate::models::post::Sentiment;

/// 热门话题条目
///
/// 字段使用camelCase以对齐TypeScript端。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingTopic {
    pub id: String,
    pub name: String,
    /// 话题下的讨论帖数量
    pub posts: u64,
    pub sentiment: Sentiment,
    /// 讨论量变化百分比,部分话题无该数据
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
}

/// 市场指数行情条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketIndex {
    pub index: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}
