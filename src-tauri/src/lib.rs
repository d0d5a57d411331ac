//! CommunityX 投资社区信息流
//!
//! 桌面端的投资社区客户端,核心是一条可靠的本地信息流:
//! - 用户发布的帖子落盘持久化,重启后仍在
//! - 信息流聚合用户帖子与内置基线数据,用户内容恒在前
//! - 发布动作通过进程内总线广播,所有UI区域同步刷新
//! - 点赞/转发是会话级乐观计数,不污染持久化数据
//! - 侧栏面板从外部顾问服务与行情API拉取数据
//!
//! # 模块架构
//!
//! - `models`: 领域模型与错误类型
//! - `data`: 内置基线数据 (用户、帖子、话题、指数)
//! - `services`: 业务服务层 (存储、总线、发布、聚合、互动、面板)
//! - `commands`: Tauri命令,前端的唯一入口
//! - `state`: 应用全局状态装配
//! - `utils`: 日志等基础设施

pub mod commands;
pub mod data;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

use state::AppState;
use tauri::Manager;

/// 装配并启动Tauri应用
///
/// 启动流程:
/// 1. 注册shell插件 (外链跳转)
/// 2. setup阶段构建AppState并激活信息流订阅
/// 3. 注册所有前端命令
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            let state = AppState::new(app.handle().clone())?;
            app.manage(state);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::feed_commands::get_feed,
            commands::feed_commands::get_categories,
            commands::feed_commands::get_session_user,
            commands::feed_commands::get_user_posts,
            commands::feed_commands::get_market_data,
            commands::feed_commands::get_trending_topics,
            commands::composer_commands::submit_post,
            commands::interaction_commands::toggle_like,
            commands::interaction_commands::toggle_repost,
            commands::interaction_commands::get_interaction,
            commands::interaction_commands::reset_interactions,
            commands::panel_commands::fetch_social_trends,
            commands::panel_commands::fetch_gold_rates,
            commands::panel_commands::fetch_savings_schemes,
            commands::panel_commands::fetch_investment_advice,
            commands::panel_commands::analyze_document,
            commands::log_commands::log_frontend_event,
            commands::log_commands::log_frontend_batch,
        ])
        .run(tauri::generate_context!())
        .expect("启动Tauri应用时发生错误");
}
