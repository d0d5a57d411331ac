use std::io;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 应用数据目录名,日志写入其下的logs子目录
const APP_DATA_DIR: &str = "communityx";

/// 初始化日志系统
///
/// 配置结构化日志输出,遵循"日志是思想的表达"原则:
/// - JSON格式: 便于机器解析和日志分析
/// - 按天轮转: 每天一个新文件,自动管理日志历史
/// - 双输出: 控制台(开发) + 文件(生产)
/// - 环境变量控制: RUST_LOG=debug 可调整日志级别
///
/// # 日志位置
/// - Windows: `C:\Users\<user>\AppData\Roaming\communityx\logs\`
/// - macOS: `~/Library/Application Support/communityx/logs/`
/// - Linux: `~/.local/share/communityx/logs/`
///
/// 系统数据目录不可用时回退到工作目录下的 ./logs。
///
/// # 示例日志
/// ```json
/// {
///   "timestamp": "2026-08-23T10:30:45.123Z",
///   "level": "INFO",
///   "target": "communityx::services::composer_service",
///   "fields": {
///     "post_id": "b3f1c2d4",
///     "author": "alexm_investor"
///   },
///   "message": "帖子已发布并广播"
/// }
/// ```
pub fn init() -> Result<(), io::Error> {
    let log_dir = dirs::data_dir()
        .map(|p| p.join(APP_DATA_DIR).join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"));
    std::fs::create_dir_all(&log_dir)?;

    // 按天轮转的文件写入器
    // 文件命名格式: communityx.2026-08-23.log
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("communityx")
        .filename_suffix("log")
        .build(&log_dir)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    // 环境变量过滤器
    // 默认: INFO级别
    // 可通过 RUST_LOG=debug 覆盖
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // 文件层: JSON格式,便于日志分析工具解析
    let file_layer = fmt::layer()
        .json()
        .with_writer(file_appender)
        .with_target(true) // 包含模块路径
        .with_thread_ids(false) // 不记录线程ID(减少噪音)
        .with_thread_names(false)
        .with_file(false) // 不记录文件名(target已足够)
        .with_line_number(false);

    // 控制台层: 人类可读格式,便于开发调试
    let console_layer = fmt::layer()
        .with_writer(io::stdout)
        .with_target(true)
        .with_level(true)
        .with_ansi(true); // 彩色输出

    // 组合订阅器
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(())
}

/// 日志宏辅助模块
///
/// 提供结构化日志的便捷宏
pub mod macros {
    /// 记录业务事件
    ///
    /// 使用示例:
    /// ```no_run
    /// use communityx::log_event;
    /// log_event!(
    ///     "PostPublished",
    ///     post_id = "b3f1c2d4",
    ///     author = "alexm_investor"
    /// );
    /// ```
    #[macro_export]
    macro_rules! log_event {
        ($event_type:expr, $($field:tt = $value:expr),* $(,)?) => {
            tracing::info!(
                event_type = $event_type,
                $($field = $value),*
            );
        };
    }

    /// 记录错误事件
    ///
    /// 使用示例:
    /// ```no_run
    /// use communityx::log_error;
    /// log_error!(
    ///     "StorageWriteFailed",
    ///     path = "user_posts.json",
    ///     error = "permission denied"
    /// );
    /// ```
    #[macro_export]
    macro_rules! log_error {
        ($event_type:expr, $($field:tt = $value:expr),* $(,)?) => {
            tracing::error!(
                event_type = $event_type,
                $($field = $value),*
            );
        };
    }
}
