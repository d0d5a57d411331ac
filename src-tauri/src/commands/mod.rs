/// Tauri命令模块
///
/// 包含所有前端可调用的命令:
/// - feed_commands: 信息流聚合、分类词表、用户主页、市场数据
/// - composer_commands: 发布帖子
/// - interaction_commands: 点赞/转发切换与会话重置
/// - panel_commands: 侧栏面板的行情与顾问数据
/// - log_commands: 前端日志传输
pub mod composer_commands;
pub mod feed_commands;
pub mod interaction_commands;
pub mod log_commands;
pub mod panel_commands;
