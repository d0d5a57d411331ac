//! 基线数据单元测试
//!
//! 基线数据是信息流的保底内容,这里校验数据集自身的完整性:
//! - 规模与ID唯一性
//! - 每条记录都通过模型校验
//! - 投票与互动标记的自洽性

use std::collections::HashSet;

use communityx::data::{
    session_user, BASELINE_POSTS, BASELINE_USERS, INVESTMENT_CATEGORIES, MARKET_DATA,
    TRENDING_TOPICS,
};

#[test]
fn test_baseline_dataset_sizes() {
    assert_eq!(BASELINE_USERS.len(), 10);
    assert_eq!(BASELINE_POSTS.len(), 16);
    assert_eq!(TRENDING_TOPICS.len(), 5);
    assert_eq!(MARKET_DATA.len(), 4);
    assert_eq!(INVESTMENT_CATEGORIES.len(), 10);
}

#[test]
fn test_post_ids_are_unique() {
    let ids: HashSet<&str> = BASELINE_POSTS.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), BASELINE_POSTS.len());
}

#[test]
fn test_user_ids_and_usernames_are_unique() {
    let ids: HashSet<&str> = BASELINE_USERS.iter().map(|u| u.id.as_str()).collect();
    let usernames: HashSet<&str> = BASELINE_USERS.iter().map(|u| u.username.as_str()).collect();

    assert_eq!(ids.len(), BASELINE_USERS.len());
    assert_eq!(usernames.len(), BASELINE_USERS.len());
}

#[test]
fn test_all_users_validate() {
    for user in BASELINE_USERS.iter() {
        assert!(user.validate().is_ok(), "用户 {} 未通过校验", user.id);
    }
}

#[test]
fn test_all_posts_validate() {
    for post in BASELINE_POSTS.iter() {
        assert!(post.validate().is_ok(), "帖子 {} 未通过校验", post.id);
    }
}

#[test]
fn test_post_authors_come_from_baseline_users() {
    let user_ids: HashSet<&str> = BASELINE_USERS.iter().map(|u| u.id.as_str()).collect();

    for post in BASELINE_POSTS.iter() {
        assert!(
            user_ids.contains(post.user.id.as_str()),
            "帖子 {} 的作者 {} 不在基线用户中",
            post.id,
            post.user.id
        );
    }
}

#[test]
fn test_session_user_is_first_baseline_user() {
    let user = session_user();
    assert_eq!(user.id, BASELINE_USERS[0].id);
    assert_eq!(user.username, "alexm_investor");
}

#[test]
fn test_poll_votes_are_consistent() {
    let mut polls_seen = 0;
    for post in BASELINE_POSTS.iter() {
        if let Some(poll) = &post.poll {
            polls_seen += 1;
            let summed: u64 = poll.options.iter().map(|o| o.votes).sum();
            assert_eq!(
                summed, poll.total_votes,
                "帖子 {} 的投票总数与选项之和不一致",
                post.id
            );
            assert!(!poll.ends_at.is_empty());
        }
    }
    assert_eq!(polls_seen, 2);
}

#[test]
fn test_premarked_interactions_exist() {
    // 基线数据刻意带有已点赞/已转发的帖子,用于互动兜底场景
    assert!(BASELINE_POSTS.iter().any(|p| p.is_liked));
    assert!(BASELINE_POSTS.iter().any(|p| p.is_reposted));

    // 已点赞的帖子计数必须非零,取消点赞才有意义
    for post in BASELINE_POSTS.iter().filter(|p| p.is_liked) {
        assert!(post.likes > 0, "帖子 {} 已点赞但计数为零", post.id);
    }
}

#[test]
fn test_posts_have_display_timestamps() {
    for post in BASELINE_POSTS.iter() {
        assert!(!post.timestamp.is_empty(), "帖子 {} 缺少展示时间", post.id);
    }
}

#[test]
fn test_category_vocabulary() {
    assert_eq!(INVESTMENT_CATEGORIES[0], "Stocks");
    assert!(INVESTMENT_CATEGORIES.contains(&"Crypto"));
    assert!(INVESTMENT_CATEGORIES.contains(&"Retirement"));

    let unique: HashSet<&str> = INVESTMENT_CATEGORIES.iter().copied().collect();
    assert_eq!(unique.len(), INVESTMENT_CATEGORIES.len());
}

#[test]
fn test_market_indexes_have_prices() {
    for index in MARKET_DATA.iter() {
        assert!(!index.index.is_empty());
        assert!(index.price > 0.0);
    }
}

#[test]
fn test_trending_topics_have_volume() {
    for topic in TRENDING_TOPICS.iter() {
        assert!(!topic.name.is_empty());
        assert!(topic.posts > 0);
    }
}
