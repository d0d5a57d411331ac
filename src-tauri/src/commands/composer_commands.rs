use crate::models::Post;
use crate::state::AppState;
use serde::{Deserialize, Serialize};
use tauri::State;

/// 发布帖子响应
///
/// 向前端反馈发布结果:
/// - success: 布尔值,最直接的结果
/// - post: 刚创建的帖子,前端可立即插入列表而不等事件
/// - message: 成功提示文案,发布器直接展示
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitPostResponse {
    pub success: bool,
    pub post: Post,
    pub message: String,
}

/// 发布帖子命令
///
/// 完整的发布流程: 校验 -> 持久化 -> 广播。
/// 命令返回时帖子已落盘,所有订阅区域已收到更新通知,
/// 前端无需关心存储与广播细节。
///
/// # 参数
/// - `content`: 帖子正文,纯空白内容会被拒绝
///
/// # 错误处理哲学
/// 将所有技术性错误转换为用户可理解的字符串,
/// 前端只需展示,无需解析复杂的错误类型。
#[tauri::command]
pub async fn submit_post(
    content: String,
    state: State<'_, AppState>,
) -> Result<SubmitPostResponse, String> {
    tracing::info!(length = content.len(), "submit_post command called");

    let post = state
        .composer
        .submit(&content)
        .map_err(|e| e.to_string())?;

    tracing::info!(post_id = %post.id, "Post submitted via command");

    Ok(SubmitPostResponse {
        success: true,
        post,
        message: "Post published successfully!".to_string(),
    })
}
