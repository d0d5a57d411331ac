//! 契约测试: submit_post
//!
//! 发布管线的完整契约: 校验 -> 持久化 -> 广播。
//! 测试直接驱动服务层,存储落在临时目录。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use communityx::data::session_user;
use communityx::models::COMPOSED_TIMESTAMP;
use communityx::services::{ComposerService, NotificationBus, PostStore, TOPIC_POSTS_CHANGED};
use tempfile::TempDir;

/// 在临时目录上装配发布管线
fn composer_stack() -> (TempDir, Arc<PostStore>, Arc<NotificationBus>, ComposerService) {
    let dir = tempfile::tempdir().expect("无法创建临时目录");
    let store = Arc::new(PostStore::with_data_dir(dir.path()));
    let bus = Arc::new(NotificationBus::new());
    let composer = ComposerService::new(Arc::clone(&store), Arc::clone(&bus));
    (dir, store, bus, composer)
}

#[test]
fn test_submit_creates_session_user_post() {
    let (_dir, _store, _bus, composer) = composer_stack();

    let post = composer.submit("Adding to my $NVDA position before earnings").unwrap();

    assert_eq!(post.content, "Adding to my $NVDA position before earnings");
    assert_eq!(post.user.id, session_user().id);
    assert_eq!(post.timestamp, COMPOSED_TIMESTAMP);
    assert_eq!(post.likes, 0);
    assert_eq!(post.comments, 0);
    assert_eq!(post.reposts, 0);
    assert!(!post.is_liked);
    assert!(!post.is_reposted);
}

#[test]
fn test_submit_trims_surrounding_whitespace() {
    let (_dir, store, _bus, composer) = composer_stack();

    let post = composer.submit("   spaced out   ").unwrap();

    assert_eq!(post.content, "spaced out");
    // 落盘的内容同样是修剪后的
    assert_eq!(store.load()[0].content, "spaced out");
}

#[test]
fn test_submit_persists_before_returning() {
    let (dir, _store, _bus, composer) = composer_stack();

    let post = composer.submit("durable post").unwrap();

    // 命令返回时另一个存储实例已能读到
    let fresh_store = PostStore::with_data_dir(dir.path());
    let persisted = fresh_store.load();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].id, post.id);
}

#[test]
fn test_submit_publishes_exactly_once() {
    let (_dir, _store, bus, composer) = composer_stack();

    let hits = Arc::new(AtomicUsize::new(0));
    let hits_clone = Arc::clone(&hits);
    let _sub = bus.subscribe(TOPIC_POSTS_CHANGED, move || {
        hits_clone.fetch_add(1, Ordering::SeqCst);
    });

    composer.submit("one publish per submit").unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_submit_rejects_empty_content() {
    let (_dir, store, bus, composer) = composer_stack();

    let hits = Arc::new(AtomicUsize::new(0));
    let hits_clone = Arc::clone(&hits);
    let _sub = bus.subscribe(TOPIC_POSTS_CHANGED, move || {
        hits_clone.fetch_add(1, Ordering::SeqCst);
    });

    assert!(composer.submit("").is_err());
    assert!(composer.submit("   ").is_err());
    assert!(composer.submit("\n\t  \n").is_err());

    // 拒绝意味着零副作用: 不落盘也不广播
    assert!(store.load().is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn test_submit_preserves_unicode_content() {
    let (_dir, store, _bus, composer) = composer_stack();

    let content = "看好新能源板块 🚀 $TSLA to the moon";
    let post = composer.submit(content).unwrap();

    assert_eq!(post.content, content);
    assert_eq!(store.load()[0].content, content);
}

#[test]
fn test_successive_submits_prepend() {
    let (_dir, store, _bus, composer) = composer_stack();

    let first = composer.submit("first thought").unwrap();
    let second = composer.submit("second thought").unwrap();

    let posts = store.load();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, second.id);
    assert_eq!(posts[1].id, first.id);
    assert_ne!(first.id, second.id);
}
