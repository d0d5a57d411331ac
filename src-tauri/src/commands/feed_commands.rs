use crate::data::{session_user, MARKET_DATA, TRENDING_TOPICS};
use crate::models::{MarketIndex, Post, TrendingTopic, UserProfile};
use crate::state::AppState;
use serde::{Deserialize, Serialize};
use tauri::State;

/// 信息流响应
///
/// 前端渲染信息流所需的完整快照:
/// - posts: 聚合后的帖子列表 (用户帖子在前,基线数据在后)
/// - total: 帖子总数,用于空态判断
/// - category: 本次应用的分类筛选,回显给前端校验
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    /// 聚合后的帖子列表
    pub posts: Vec<Post>,

    /// 帖子总数
    pub total: usize,

    /// 应用的分类筛选 ("All" 表示未筛选)
    pub category: String,
}

/// 获取信息流命令
///
/// 每次调用都重新读取存储并合并基线数据,
/// 保证刚发布的帖子立即可见,无需前端管理缓存失效。
///
/// # 参数
/// - `category`: 可选分类筛选,None 或 "All" 返回全部
#[tauri::command]
pub async fn get_feed(
    category: Option<String>,
    state: State<'_, AppState>,
) -> Result<FeedResponse, String> {
    tracing::debug!(category = ?category, "get_feed command called");

    let posts = state.feed.filtered_feed(category.as_deref());
    let total = posts.len();

    Ok(FeedResponse {
        posts,
        total,
        category: category.unwrap_or_else(|| "All".to_string()),
    })
}

/// 获取分类词表命令
///
/// 返回固定的投资分类列表,前端用于渲染筛选栏。
#[tauri::command]
pub async fn get_categories(state: State<'_, AppState>) -> Result<Vec<String>, String> {
    Ok(state
        .feed
        .categories()
        .iter()
        .map(|c| c.to_string())
        .collect())
}

/// 获取会话用户命令
///
/// 返回发布器与个人主页使用的当前会话用户。
#[tauri::command]
pub async fn get_session_user() -> Result<UserProfile, String> {
    Ok(session_user().clone())
}

/// 获取用户帖子命令
///
/// 个人主页数据源: 在聚合信息流上按作者ID筛选,顺序保持不变,
/// 因此本次会话新发布的帖子同样出现在会话用户的主页上。
///
/// # 参数
/// - `user_id`: 作者的用户ID (前端以 userId 传入)
#[tauri::command]
pub async fn get_user_posts(
    user_id: String,
    state: State<'_, AppState>,
) -> Result<Vec<Post>, String> {
    tracing::debug!(user_id = %user_id, "get_user_posts command called");

    Ok(state.feed.posts_by(&user_id))
}

/// 获取市场指数命令
///
/// 侧栏市场概览的静态基线数据。
#[tauri::command]
pub async fn get_market_data() -> Result<Vec<MarketIndex>, String> {
    Ok(MARKET_DATA.clone())
}

/// 获取站内热议话题命令
///
/// 侧栏热议榜的静态基线数据,与外部行情趋势API互补。
#[tauri::command]
pub async fn get_trending_topics() -> Result<Vec<TrendingTopic>, String> {
    Ok(TRENDING_TOPICS.clone())
}
