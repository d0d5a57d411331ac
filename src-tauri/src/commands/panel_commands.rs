use crate::services::{
    DocumentAnalysis, GoldRate, InvestmentAdviceRequest, SavingsScheme, SocialTrend,
};
use crate::state::AppState;
use std::collections::HashMap;
use std::path::Path;
use tauri::State;

/// 获取社区热议趋势命令
///
/// 调用外部行情API。未配置密钥时返回明确错误,
/// 前端据此保持趋势面板禁用而非报错弹窗。
#[tauri::command]
pub async fn fetch_social_trends(
    state: State<'_, AppState>,
) -> Result<Vec<SocialTrend>, String> {
    tracing::debug!("fetch_social_trends command called");

    state
        .panel_api
        .fetch_social_trends()
        .await
        .map_err(|e| e.to_string())
}

/// 获取城市金价命令
#[tauri::command]
pub async fn fetch_gold_rates(state: State<'_, AppState>) -> Result<Vec<GoldRate>, String> {
    tracing::debug!("fetch_gold_rates command called");

    state
        .panel_api
        .fetch_gold_rates()
        .await
        .map_err(|e| e.to_string())
}

/// 获取邮政储蓄方案命令
#[tauri::command]
pub async fn fetch_savings_schemes(
    state: State<'_, AppState>,
) -> Result<HashMap<String, Vec<SavingsScheme>>, String> {
    tracing::debug!("fetch_savings_schemes command called");

    state
        .panel_api
        .fetch_savings_schemes()
        .await
        .map_err(|e| e.to_string())
}

/// 获取投资建议命令
///
/// # 参数
/// - `request`: 年龄、期限类型、期限年数、投入方式与金额
#[tauri::command]
pub async fn fetch_investment_advice(
    request: InvestmentAdviceRequest,
    state: State<'_, AppState>,
) -> Result<Vec<String>, String> {
    tracing::debug!("fetch_investment_advice command called");

    state
        .panel_api
        .fetch_investment_advice(&request)
        .await
        .map_err(|e| e.to_string())
}

/// 分析财务文档命令
///
/// 前端通过文件对话框取得本地路径,后端读取并上传分析。
/// 大文件读取与上传都是异步的,不阻塞UI线程。
///
/// # 参数
/// - `file_path`: 文档的本地绝对路径
#[tauri::command]
pub async fn analyze_document(
    file_path: String,
    state: State<'_, AppState>,
) -> Result<DocumentAnalysis, String> {
    tracing::info!(file_path = %file_path, "analyze_document command called");

    let path = Path::new(&file_path);
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| format!("无效的文件路径: {}", file_path))?
        .to_string();

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("读取文件失败: {}", e))?;

    state
        .panel_api
        .analyze_document(&file_name, bytes)
        .await
        .map_err(|e| e.to_string())
}
