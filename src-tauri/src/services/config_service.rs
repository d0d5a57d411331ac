use crate::models::{PanelConfig, PanelConfigError};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

/// .env 配置键: 顾问服务基地址
const KEY_PANEL_BASE_URL: &str = "COMMUNITYX_PANEL_BASE_URL";
/// .env 配置键: 行情趋势API密钥
const KEY_RAPIDAPI_KEY: &str = "COMMUNITYX_RAPIDAPI_KEY";

/// 配置服务
///
/// 管理面板配置的持久化,职责单一:
/// - 保存配置到 .env 文件
/// - 从 .env 文件加载配置
/// - 保持其他配置项不变,仅更新目标字段
pub struct ConfigService;

impl ConfigService {
    /// 获取 .env 文件路径
    ///
    /// 查找顺序:
    /// 1. 当前工作目录的 .env
    /// 2. src-tauri/ 的上层目录(项目根目录)
    fn env_file_path() -> Result<PathBuf, PanelConfigError> {
        let cwd = env::current_dir()
            .map_err(|e| PanelConfigError::IoError(format!("无法获取当前目录: {}", e)))?;

        // 尝试当前目录
        let env_path = cwd.join(".env");
        if env_path.exists() {
            return Ok(env_path);
        }

        // 尝试父目录(适用于 src-tauri/ 内执行的情况)
        if let Some(parent) = cwd.parent() {
            let parent_env = parent.join(".env");
            if parent_env.exists() {
                return Ok(parent_env);
            }
        }

        // 不存在则创建在当前目录
        Ok(env_path)
    }

    /// 解析 .env 文件内容为 HashMap
    ///
    /// 格式: KEY=VALUE
    /// 忽略空行和注释行(以 # 开头)
    fn parse_env_content(content: &str) -> HashMap<String, String> {
        content
            .lines()
            .filter_map(|line| {
                let trimmed = line.trim();
                // 忽略空行和注释
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    return None;
                }

                // 解析 KEY=VALUE
                trimmed
                    .split_once('=')
                    .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            })
            .collect()
    }

    /// 将 HashMap 序列化为 .env 文件内容
    ///
    /// 保留原有的注释和空行,仅更新指定的配置项
    fn serialize_env_content(
        original_content: &str,
        updated_vars: &HashMap<String, String>,
    ) -> String {
        let mut result = String::new();
        let mut updated_keys = updated_vars.keys().cloned().collect::<Vec<_>>();

        // 遍历原始内容,保留注释和空行,更新已存在的配置项
        for line in original_content.lines() {
            let trimmed = line.trim();

            // 保留空行和注释
            if trimmed.is_empty() || trimmed.starts_with('#') {
                result.push_str(line);
                result.push('\n');
                continue;
            }

            // 检查是否为配置行
            if let Some((key, _)) = trimmed.split_once('=') {
                let key = key.trim();
                if let Some(new_value) = updated_vars.get(key) {
                    // 更新已存在的配置项
                    result.push_str(&format!("{}={}\n", key, new_value));
                    // 标记为已处理
                    updated_keys.retain(|k| k != key);
                    continue;
                }
            }

            // 保留其他行
            result.push_str(line);
            result.push('\n');
        }

        // 追加新的配置项
        for key in updated_keys {
            if let Some(value) = updated_vars.get(&key) {
                result.push_str(&format!("{}={}\n", key, value));
            }
        }

        result
    }

    /// 从 .env 文件加载面板配置
    ///
    /// 读取环境变量:
    /// - COMMUNITYX_PANEL_BASE_URL: 顾问服务基地址 (默认: http://127.0.0.1:5000)
    /// - COMMUNITYX_RAPIDAPI_KEY: 行情趋势API密钥 (可选)
    ///
    /// 进程环境变量优先于 .env 文件内容,便于部署时覆盖。
    ///
    /// # 错误处理
    /// - 文件不存在时返回默认配置(不报错)
    /// - 文件读取失败时返回 IoError
    /// - 基地址格式错误时返回 InvalidBaseUrl
    pub fn load_panel_config() -> Result<PanelConfig, PanelConfigError> {
        let env_path = Self::env_file_path()?;

        let mut vars = if env_path.exists() {
            let content = fs::read_to_string(&env_path)?;
            Self::parse_env_content(&content)
        } else {
            tracing::info!(
                path = %env_path.display(),
                "配置文件不存在,使用默认面板配置"
            );
            HashMap::new()
        };

        // 进程环境变量覆盖文件内容
        for key in [KEY_PANEL_BASE_URL, KEY_RAPIDAPI_KEY] {
            if let Ok(value) = env::var(key) {
                if !value.trim().is_empty() {
                    vars.insert(key.to_string(), value.trim().to_string());
                }
            }
        }

        let base_url = vars
            .get(KEY_PANEL_BASE_URL)
            .cloned()
            .unwrap_or_else(|| PanelConfig::default().base_url);

        let config = PanelConfig::new(base_url);
        let config = match vars.get(KEY_RAPIDAPI_KEY) {
            Some(key) if !key.is_empty() => config.with_rapidapi_key(key.clone()),
            _ => config,
        };

        config.validate()?;

        tracing::info!(
            config = %config.summary_for_logging(),
            "已加载面板配置"
        );

        Ok(config)
    }

    /// 保存面板配置到 .env 文件
    ///
    /// 更新策略:
    /// - 保留文件中的注释和空行
    /// - 仅更新面板相关的配置项
    /// - 如果配置项不存在则追加到末尾
    /// - 密钥字段在日志中不显示明文
    ///
    /// # 参数
    /// - `config`: 待保存的面板配置
    ///
    /// # 错误处理
    /// - 基地址格式错误时返回 InvalidBaseUrl
    /// - 无法创建或写入文件时返回 IoError
    pub fn save_panel_config(config: &PanelConfig) -> Result<(), PanelConfigError> {
        config.validate()?;

        let env_path = Self::env_file_path()?;

        // 读取原有内容(如果文件存在)
        let original_content = if env_path.exists() {
            fs::read_to_string(&env_path)?
        } else {
            String::new()
        };

        // 准备更新的配置项
        let mut updated_vars = HashMap::new();
        updated_vars.insert(KEY_PANEL_BASE_URL.to_string(), config.base_url.clone());

        if let Some(ref key) = config.rapidapi_key {
            updated_vars.insert(KEY_RAPIDAPI_KEY.to_string(), key.clone());
        }

        // 序列化新内容
        let new_content = Self::serialize_env_content(&original_content, &updated_vars);

        // 写入文件
        fs::write(&env_path, new_content)?;

        tracing::info!(
            path = %env_path.display(),
            config = %config.summary_for_logging(),
            "已保存面板配置"
        );

        Ok(())
    }
}
