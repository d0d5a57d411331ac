//! 用户公开资料模型

use serde::{Deserialize, Serialize};

/// 投资者类型
///
/// 序列化为小写字符串,以对齐TypeScript端的联合类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestorType {
    Beginner,
    Intermediate,
    Expert,
    Verified,
}

/// 用户公开资料
///
/// 附着在每条帖子上的作者身份,字段与前端User类型一一对应。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub username: String,
    pub avatar: String,
    pub verified: bool,
    pub investor_type: InvestorType,
    pub followers: u64,
    pub following: u64,
    pub joined: String,
    pub reputation: u64,
    pub bio: String,
}

impl UserProfile {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("用户ID不能为空".to_string());
        }

        if self.username.trim().is_empty() {
            return Err("用户名不能为空".to_string());
        }

        Ok(())
    }
}
