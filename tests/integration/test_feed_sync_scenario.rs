//! 集成测试 - 场景: 信息流同步全流程
//!
//! 验证目标:
//! - 发布 -> 持久化 -> 广播 -> 聚合的端到端链路
//! - 应用重启后已发布帖子仍排在基线帖子之前
//! - 互动状态只存活于当前会话,绝不写入持久化存储
//!
//! 测试覆盖:
//! 1. 成功路径: 发布一条帖子,所有订阅区域收到且仅收到一次通知
//! 2. 重启路径: 以同一数据目录重建存储与聚合器,验证合并顺序
//! 3. 会话路径: 点赞/转发切换的乐观计数与会话隔离
//! 4. 完整生命周期: 发布、互动、重置、重启的连续流程

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use communityx::data::BASELINE_POSTS;
use communityx::services::{
    ComposerService, FeedService, InteractionService, NotificationBus, PostStore, Subscription,
    TOPIC_POSTS_CHANGED,
};
use tempfile::TempDir;

/// 测试辅助: 在指定数据目录上装配完整服务栈
fn build_stack(dir: &TempDir) -> (Arc<PostStore>, Arc<NotificationBus>, ComposerService, Arc<FeedService>) {
    let store = Arc::new(PostStore::with_data_dir(dir.path()));
    let bus = Arc::new(NotificationBus::new());
    let composer = ComposerService::new(Arc::clone(&store), Arc::clone(&bus));
    let feed = Arc::new(FeedService::new(Arc::clone(&store), Arc::clone(&bus)));
    (store, bus, composer, feed)
}

/// 测试辅助: 模拟一个UI区域订阅帖子变更通知,返回订阅凭据与命中计数
fn counting_region(bus: &NotificationBus) -> (Subscription, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_in_handler = Arc::clone(&hits);
    let subscription = bus.subscribe(TOPIC_POSTS_CHANGED, move || {
        hits_in_handler.fetch_add(1, Ordering::SeqCst);
    });
    (subscription, hits)
}

#[test]
fn test_compose_notifies_every_region_exactly_once() {
    let dir = tempfile::tempdir().expect("无法创建临时目录");
    let (_store, bus, composer, feed) = build_stack(&dir);
    feed.activate();

    // 准备: 信息流之外再挂两个区域 (侧栏与个人主页)
    let (_sidebar_guard, sidebar_hits) = counting_region(&bus);
    let (_profile_guard, profile_hits) = counting_region(&bus);
    let recomputes_before = feed.recompute_count();

    // 发布一条帖子
    let post = composer
        .submit("Fed minutes tomorrow, keeping some dry powder")
        .unwrap();

    // 验证: 每个区域收到且仅收到一次通知
    assert_eq!(sidebar_hits.load(Ordering::SeqCst), 1, "侧栏应收到一次通知");
    assert_eq!(profile_hits.load(Ordering::SeqCst), 1, "个人主页应收到一次通知");
    assert_eq!(
        feed.recompute_count(),
        recomputes_before + 1,
        "聚合器应重新聚合一次"
    );

    // 验证: 新帖立即置顶,基线帖子紧随其后
    let merged = feed.current_feed();
    assert_eq!(merged[0].id, post.id, "新帖应排在合并信息流首位");
    assert_eq!(merged.len(), BASELINE_POSTS.len() + 1);
    assert_eq!(merged[1].id, BASELINE_POSTS[0].id, "基线首帖应紧随新帖");
}

#[test]
fn test_composed_posts_survive_restart_and_precede_baseline() {
    let dir = tempfile::tempdir().expect("无法创建临时目录");

    // 第一次会话: 先后发布两条帖子
    let (first_id, second_id) = {
        let (_store, _bus, composer, _feed) = build_stack(&dir);
        let first = composer.submit("Started a small bond ladder today").unwrap();
        let second = composer.submit("Adding $VOO on the dip").unwrap();
        (first.id, second.id)
    };

    // 模拟重启: 在同一数据目录上重建全部服务
    let (_store, _bus, _composer, feed) = build_stack(&dir);
    feed.activate();

    let merged = feed.merged_feed();
    assert_eq!(merged.len(), BASELINE_POSTS.len() + 2);

    // 验证: 后发布的帖子在前,两条都排在基线帖子之前
    assert_eq!(merged[0].id, second_id, "最新发布的帖子应在首位");
    assert_eq!(merged[1].id, first_id, "较早发布的帖子应在次位");
    assert_eq!(merged[2].id, BASELINE_POSTS[0].id, "基线帖子整体后移");
}

#[test]
fn test_like_toggle_is_optimistic_and_session_scoped() {
    let dir = tempfile::tempdir().expect("无法创建临时目录");
    let (store, _bus, _composer, feed) = build_stack(&dir);
    feed.activate();
    let interactions = InteractionService::new();

    // 准备: 选一条未点赞的基线帖子
    let target = BASELINE_POSTS
        .iter()
        .find(|p| !p.is_liked && p.likes > 0)
        .expect("基线数据应包含未点赞帖子");
    let original_likes = target.likes;

    // 第一次切换: 点赞,计数加一
    let liked = interactions.toggle_like(target);
    assert!(liked.liked);
    assert_eq!(liked.like_count, original_likes + 1);

    // 第二次切换: 取消点赞,计数回到初始值
    let unliked = interactions.toggle_like(target);
    assert!(!unliked.liked);
    assert_eq!(unliked.like_count, original_likes);

    // 验证: 互动从未触及持久化存储与合并信息流
    assert!(store.load().is_empty(), "互动不应写入帖子存储");
    let in_feed = feed.find_post(&target.id).unwrap();
    assert_eq!(in_feed.likes, original_likes, "信息流中的帖子计数应保持不变");
    assert!(!in_feed.is_liked, "信息流中的帖子标记应保持不变");
}

#[test]
fn test_interactions_reset_on_restart_but_posts_remain() {
    let dir = tempfile::tempdir().expect("无法创建临时目录");

    // 第一次会话: 发布并点赞自己的帖子
    let post_id = {
        let (_store, _bus, composer, _feed) = build_stack(&dir);
        let interactions = InteractionService::new();

        let post = composer.submit("Rebalanced into 60/40 this morning").unwrap();
        let state = interactions.toggle_like(&post);
        assert!(state.liked);
        assert_eq!(state.like_count, 1);
        assert!(interactions.interaction_for(&post.id).is_some());
        post.id
    };

    // 模拟重启: 新的互动服务,同一数据目录
    let (store, _bus, _composer, feed) = build_stack(&dir);
    feed.activate();
    let interactions = InteractionService::new();

    // 验证: 帖子还在,互动状态已归零
    let reloaded = feed.find_post(&post_id).expect("重启后帖子应仍在信息流中");
    assert_eq!(reloaded.likes, 0, "点赞计数从未写入持久化记录");
    assert!(!reloaded.is_liked);
    assert!(
        interactions.interaction_for(&post_id).is_none(),
        "重启后不应存在任何互动状态"
    );
    assert_eq!(store.load().len(), 1, "持久化存储只保留帖子本体");
}

#[test]
fn test_full_session_lifecycle() {
    let dir = tempfile::tempdir().expect("无法创建临时目录");
    let (store, bus, composer, feed) = build_stack(&dir);
    feed.activate();
    let interactions = InteractionService::new();

    let (sidebar_guard, sidebar_hits) = counting_region(&bus);

    // 发布两条帖子
    let first = composer.submit("Long $AAPL into the product event").unwrap();
    let second = composer.submit("Trimmed my crypto exposure by half").unwrap();
    assert_eq!(sidebar_hits.load(Ordering::SeqCst), 2);

    // 对基线帖子点赞,对自己的帖子转发
    let baseline_target = &BASELINE_POSTS[0];
    interactions.toggle_like(baseline_target);
    let reposted = interactions.toggle_repost(&second);
    assert!(reposted.reposted);
    assert_eq!(reposted.repost_count, 1);
    assert_eq!(interactions.active_count(), 2, "应存在两条互动记录");

    // 重置互动: 状态清空,帖子与信息流不受影响
    interactions.reset();
    assert_eq!(interactions.active_count(), 0);
    assert!(interactions.interaction_for(&baseline_target.id).is_none());
    assert!(interactions.interaction_for(&second.id).is_none());
    assert_eq!(feed.current_feed().len(), BASELINE_POSTS.len() + 2);

    // 区域退出: 释放订阅凭据后不再计数
    drop(sidebar_guard);
    let hits_after_drop = sidebar_hits.load(Ordering::SeqCst);
    composer.submit("One more idea before close").unwrap();
    assert_eq!(
        sidebar_hits.load(Ordering::SeqCst),
        hits_after_drop,
        "退订区域不应再收到通知"
    );

    // 验证: 存储中只有发布过的三条帖子,顺序为倒序
    let persisted = store.load();
    assert_eq!(persisted.len(), 3);
    assert_eq!(persisted[1].id, second.id);
    assert_eq!(persisted[2].id, first.id);
}
