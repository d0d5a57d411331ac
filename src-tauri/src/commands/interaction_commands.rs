use crate::models::{FeedError, ViewerInteraction};
use crate::state::AppState;
use serde::{Deserialize, Serialize};
use tauri::State;

/// 互动切换响应
///
/// 返回切换后的完整互动状态,前端据此渲染按钮与计数,
/// 不必自行推算加减。
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionResponse {
    /// 目标帖子ID
    pub post_id: String,

    /// 切换后的互动状态
    pub interaction: ViewerInteraction,
}

/// 切换点赞命令
///
/// 乐观更新: 不经过任何网络请求,立即返回新状态。
/// 状态仅存在于本次会话,不写入磁盘。
///
/// # 参数
/// - `post_id`: 目标帖子ID,必须存在于聚合信息流中
#[tauri::command]
pub async fn toggle_like(
    post_id: String,
    state: State<'_, AppState>,
) -> Result<InteractionResponse, String> {
    tracing::debug!(post_id = %post_id, "toggle_like command called");

    let post = state
        .feed
        .find_post(&post_id)
        .ok_or_else(|| FeedError::PostNotFound(post_id.clone()).to_string())?;

    let interaction = state.interactions.toggle_like(&post);

    Ok(InteractionResponse {
        post_id,
        interaction,
    })
}

/// 切换转发命令
///
/// 与点赞同构: 会话级乐观计数,底线为0。
#[tauri::command]
pub async fn toggle_repost(
    post_id: String,
    state: State<'_, AppState>,
) -> Result<InteractionResponse, String> {
    tracing::debug!(post_id = %post_id, "toggle_repost command called");

    let post = state
        .feed
        .find_post(&post_id)
        .ok_or_else(|| FeedError::PostNotFound(post_id.clone()).to_string())?;

    let interaction = state.interactions.toggle_repost(&post);

    Ok(InteractionResponse {
        post_id,
        interaction,
    })
}

/// 查询互动状态命令
///
/// 返回 None 表示本次会话未碰过该帖子,
/// 前端应回退到帖子自带的 isLiked/likes 字段。
#[tauri::command]
pub async fn get_interaction(
    post_id: String,
    state: State<'_, AppState>,
) -> Result<Option<ViewerInteraction>, String> {
    Ok(state.interactions.interaction_for(&post_id))
}

/// 重置互动状态命令
///
/// 前端页面装载时调用,丢弃上一会话的所有切换记录,
/// 对齐"互动不跨会话"的语义。
#[tauri::command]
pub async fn reset_interactions(state: State<'_, AppState>) -> Result<(), String> {
    tracing::info!("reset_interactions command called");
    state.interactions.reset();
    Ok(())
}
