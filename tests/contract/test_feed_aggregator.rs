//! 契约测试: 信息流聚合器
//!
//! 聚合器订阅总线并维护合并快照的契约:
//! - 激活即完成首次聚合
//! - 每次通知触发且仅触发一次重新聚合,与订阅区域数量无关
//! - 停用后不再响应通知

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use communityx::data::BASELINE_POSTS;
use communityx::services::{
    ComposerService, FeedService, NotificationBus, PostStore, TOPIC_POSTS_CHANGED,
};
use tempfile::TempDir;

struct AggregatorStack {
    _dir: TempDir,
    bus: Arc<NotificationBus>,
    composer: ComposerService,
    feed: Arc<FeedService>,
}

/// 装配并激活聚合器
fn activated_stack() -> AggregatorStack {
    let dir = tempfile::tempdir().expect("无法创建临时目录");
    let store = Arc::new(PostStore::with_data_dir(dir.path()));
    let bus = Arc::new(NotificationBus::new());
    let composer = ComposerService::new(Arc::clone(&store), Arc::clone(&bus));
    let feed = Arc::new(FeedService::new(store, Arc::clone(&bus)));
    feed.activate();

    AggregatorStack {
        _dir: dir,
        bus,
        composer,
        feed,
    }
}

#[test]
fn test_activation_primes_current_feed() {
    let stack = activated_stack();

    assert_eq!(stack.feed.recompute_count(), 1);
    assert_eq!(stack.feed.current_feed().len(), BASELINE_POSTS.len());
    assert_eq!(stack.bus.subscriber_count(TOPIC_POSTS_CHANGED), 1);
}

#[test]
fn test_each_submit_triggers_single_recompute() {
    let stack = activated_stack();
    let after_activation = stack.feed.recompute_count();

    stack.composer.submit("recompute once").unwrap();
    assert_eq!(stack.feed.recompute_count(), after_activation + 1);

    stack.composer.submit("and once more").unwrap();
    assert_eq!(stack.feed.recompute_count(), after_activation + 2);
}

#[test]
fn test_submit_refreshes_snapshot_with_new_post_first() {
    let stack = activated_stack();

    let post = stack.composer.submit("snapshot check").unwrap();

    let snapshot = stack.feed.current_feed();
    assert_eq!(snapshot.len(), 1 + BASELINE_POSTS.len());
    assert_eq!(snapshot[0].id, post.id);
}

#[test]
fn test_extra_regions_do_not_multiply_recomputes() {
    let stack = activated_stack();
    let after_activation = stack.feed.recompute_count();

    // 两个额外的UI区域订阅同一主题
    let region_hits = Arc::new(AtomicUsize::new(0));
    let h1 = Arc::clone(&region_hits);
    let _profile = stack.bus.subscribe(TOPIC_POSTS_CHANGED, move || {
        h1.fetch_add(1, Ordering::SeqCst);
    });
    let h2 = Arc::clone(&region_hits);
    let _sidebar = stack.bus.subscribe(TOPIC_POSTS_CHANGED, move || {
        h2.fetch_add(1, Ordering::SeqCst);
    });

    stack.composer.submit("fan out").unwrap();

    // 每个区域各收到一次通知,但聚合只发生一次
    assert_eq!(region_hits.load(Ordering::SeqCst), 2);
    assert_eq!(stack.feed.recompute_count(), after_activation + 1);
}

#[test]
fn test_bare_notification_recomputes_without_data_change() {
    let stack = activated_stack();
    let after_activation = stack.feed.recompute_count();

    // 通知本身不带载荷,数据没变也照样重读
    stack.bus.publish(TOPIC_POSTS_CHANGED);

    assert_eq!(stack.feed.recompute_count(), after_activation + 1);
    assert_eq!(stack.feed.current_feed().len(), BASELINE_POSTS.len());
}

#[test]
fn test_deactivate_stops_responding() {
    let stack = activated_stack();

    stack.feed.deactivate();
    assert_eq!(stack.bus.subscriber_count(TOPIC_POSTS_CHANGED), 0);

    let before = stack.feed.recompute_count();
    stack.composer.submit("nobody listening").unwrap();

    assert_eq!(stack.feed.recompute_count(), before);
    // 数据本身照常落盘,直接读取仍然可见
    assert_eq!(stack.feed.merged_feed().len(), 1 + BASELINE_POSTS.len());
}

#[test]
fn test_reactivation_resumes_updates() {
    let stack = activated_stack();

    stack.feed.deactivate();
    stack.feed.activate();

    let before = stack.feed.recompute_count();
    stack.composer.submit("listening again").unwrap();

    assert_eq!(stack.feed.recompute_count(), before + 1);
    assert_eq!(stack.feed.current_feed().len(), 1 + BASELINE_POSTS.len());
}
