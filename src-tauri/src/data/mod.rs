//! 内置基线数据集模块
//!
//! 编译期固化的不可变数据: 用户资料、基线帖子、分类词表、
//! 热门话题与市场行情。基线数据绝不写入本地存储,
//! 合并信息流时始终排在持久化帖子之后。

pub mod baseline;

pub use baseline::{
    session_user, BASELINE_POSTS, BASELINE_USERS, INVESTMENT_CATEGORIES, MARKET_DATA,
    TRENDING_TOPICS,
};
