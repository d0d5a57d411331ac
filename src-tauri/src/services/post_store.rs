//! 帖子本地存储服务
//!
//! 用户撰写的帖子以JSON文件形式落盘,应用重启后依然可见。
//! 职责单一:
//! - 读取整个持久化数据集 (容错: 缺失或损坏一律回退为空)
//! - 追加新帖 (新帖置顶,读-改-写整体替换)
//! - 覆盖/清空数据集 (诊断与测试用)
//!
//! 写入路径遵循单写者契约: 同一时刻仅一个应用进程写入,
//! 进程内用互斥锁把并发命令的读-改-写串行化;
//! 文件替换采用临时文件加原子改名,避免半写状态。

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::models::errors::StorageError;
use crate::models::post::Post;

/// 存储文件名,对应前端约定的存储槽位
const STORAGE_FILE: &str = "user_posts.json";

/// 平台数据目录下的应用子目录
const APP_DATA_DIR: &str = "communityx";

/// 帖子存储
pub struct PostStore {
    /// 存储文件完整路径
    path: PathBuf,
    /// 写入互斥锁,串行化读-改-写
    write_lock: Mutex<()>,
}

impl PostStore {
    /// 在平台数据目录下构造存储
    ///
    /// 存储文件位于 `<数据目录>/communityx/user_posts.json`。
    ///
    /// # 错误处理
    /// - 当前平台无法解析用户数据目录时返回 DataDirUnavailable
    pub fn new() -> Result<Self, StorageError> {
        let base = dirs::data_dir().ok_or_else(|| {
            StorageError::DataDirUnavailable("无法解析平台用户数据目录".to_string())
        })?;

        Ok(Self::with_data_dir(base.join(APP_DATA_DIR)))
    }

    /// 在指定目录下构造存储
    ///
    /// 测试与诊断场景使用,生产路径走 `new()`。
    pub fn with_data_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(STORAGE_FILE),
            write_lock: Mutex::new(()),
        }
    }

    /// 存储文件路径
    pub fn storage_path(&self) -> &Path {
        &self.path
    }

    /// 读取持久化的帖子数据集
    ///
    /// 容错读取: 文件缺失、不可读或JSON损坏时记录警告并返回空数据集,
    /// 绝不让调用方因存储问题中断。正常情况下返回的顺序即写入顺序(新帖在前)。
    pub fn load(&self) -> Vec<Post> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.path.display(),
                    "存储文件不存在,返回空数据集"
                );
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "存储文件读取失败,回退为空数据集"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Post>>(&content) {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "存储文件内容损坏,回退为空数据集"
                );
                Vec::new()
            }
        }
    }

    /// 追加一条新帖子
    ///
    /// 读-改-写: 加载当前数据集,把新帖插入队首(新帖置顶),整体原子替换文件。
    ///
    /// # 参数
    /// - `post`: 待持久化的帖子
    ///
    /// # 返回值
    /// 写入后数据集的帖子总数
    ///
    /// # 错误处理
    /// - 序列化失败返回 SerializationError
    /// - 目录创建或文件替换失败返回 WriteFailed
    pub fn append(&self, post: &Post) -> Result<usize, StorageError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut posts = self.load();
        posts.insert(0, post.clone());
        self.write_atomic(&posts)?;

        tracing::info!(
            post_id = %post.id,
            count = posts.len(),
            "帖子已持久化"
        );

        Ok(posts.len())
    }

    /// 覆盖整个数据集
    pub fn overwrite(&self, posts: &[Post]) -> Result<(), StorageError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        self.write_atomic(posts)?;

        tracing::info!(count = posts.len(), "存储数据集已覆盖");
        Ok(())
    }

    /// 清空存储
    ///
    /// 删除存储文件,下次读取回到空数据集。文件本就不存在时视为成功。
    pub fn clear(&self) -> Result<(), StorageError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "存储已清空");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::from(e)),
        }
    }

    /// 原子写入数据集
    ///
    /// 先写同目录临时文件,再改名替换目标文件。
    /// 改名在同一文件系统内是原子的,读者要么看到旧版本要么看到新版本。
    fn write_atomic(&self, posts: &[Post]) -> Result<(), StorageError> {
        let parent = self.path.parent().ok_or_else(|| {
            StorageError::DataDirUnavailable("存储路径缺少父目录".to_string())
        })?;
        fs::create_dir_all(parent)?;

        let json = serde_json::to_string(posts)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}
