use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 发帖内容校验相关错误
///
/// 处理用户提交帖子时的校验失败场景。
/// 校验失败不产生任何可观察副作用: 不写存储,不发通知。
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum ValidationError {
    /// 帖子内容为空
    ///
    /// 提交内容经修剪后为空字符串(全空白输入同样命中)
    #[error("帖子内容不能为空")]
    EmptyContent,

    /// 帖子结构无效
    ///
    /// 帖子字段未通过模型层校验
    #[error("帖子校验失败: {0}")]
    InvalidPost(String),
}

/// 本地帖子存储相关错误
///
/// 处理文件存储读写过程中的失败场景。
/// 读取路径是容错的(损坏或缺失均回退为空数据集),
/// 因此这里的错误主要来自写入路径。
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum StorageError {
    /// 平台数据目录不可用
    ///
    /// 无法解析当前平台的用户数据目录
    #[error("数据目录不可用: {0}")]
    DataDirUnavailable(String),

    /// 存储文件写入失败
    ///
    /// 可能原因:
    /// - 磁盘空间不足
    /// - 目录权限不足
    /// - 临时文件替换失败
    #[error("存储文件写入失败: {0}")]
    WriteFailed(String),

    /// 序列化/反序列化失败
    ///
    /// 将帖子数据转换为JSON或从JSON解析失败
    #[error("存储数据序列化失败: {0}")]
    SerializationError(String),
}

/// 面板API调用相关错误
///
/// 处理与顾问服务及公开行情API交互时的失败场景。
/// 面板是尽力而为的外围能力,错误不得影响信息流核心。
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum ApiError {
    /// 网络请求失败
    ///
    /// 可能原因:
    /// - 网络连接中断
    /// - 顾问服务未启动
    /// - DNS解析失败
    #[error("网络请求失败: {0}")]
    NetworkFailed(String),

    /// HTTP状态码错误
    ///
    /// 服务端返回了非200状态码
    #[error("HTTP错误 {status}: {message}")]
    HttpStatusError { status: u16, message: String },

    /// JSON解析失败
    ///
    /// 服务端返回的数据格式不符合预期
    #[error("响应数据解析失败: {0}")]
    JsonParseFailed(String),

    /// 响应格式无效
    ///
    /// 响应结构缺少预期字段
    #[error("响应格式无效: {0}")]
    InvalidResponse(String),

    /// 服务端拒绝请求
    ///
    /// 响应体中携带了业务层error字段(如不支持的文件类型)
    #[error("服务端拒绝请求: {0}")]
    ServerRejected(String),

    /// API密钥未配置
    ///
    /// 行情趋势面板依赖的密钥缺失,该面板保持禁用
    #[error("API密钥未配置: {0}")]
    MissingApiKey(String),
}

/// 信息流聚合相关错误
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum FeedError {
    /// 指定ID的帖子未找到
    ///
    /// 合并后的信息流中不存在该帖子
    #[error("未找到帖子: {0}")]
    PostNotFound(String),
}

/// 应用级聚合错误
///
/// 汇聚各领域错误,供提交管线等跨层流程统一传播。
/// 命令层在边界处降级为字符串返回给前端。
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Feed(#[from] FeedError),
}

/// 实现从reqwest::Error到ApiError的转换
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::NetworkFailed("请求超时".to_string())
        } else if err.is_connect() {
            ApiError::NetworkFailed("无法连接到服务器".to_string())
        } else {
            ApiError::NetworkFailed(err.to_string())
        }
    }
}

/// 实现从serde_json::Error到相关错误的转换
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonParseFailed(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::SerializationError(err.to_string())
    }
}

/// 实现从std::io::Error到StorageError的转换
impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                StorageError::WriteFailed(format!("权限不足: {}", err))
            }
            std::io::ErrorKind::NotFound => {
                StorageError::WriteFailed(format!("文件或目录不存在: {}", err))
            }
            _ => StorageError::WriteFailed(format!("I/O错误: {}", err)),
        }
    }
}
