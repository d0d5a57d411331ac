//! 帖子存储单元测试
//!
//! 覆盖:
//! - 持久化的跨实例可见性 (重启语义)
//! - 字段保真: 落盘再读出不丢失任何字段
//! - 容错读取与清空/覆盖操作
//! - 并发追加的串行化

use std::sync::Arc;
use std::thread;

use communityx::models::Sentiment;
use communityx::services::PostStore;

#[path = "../common/mod.rs"]
mod common;
use common::sample_post;

// ============================================================
// 1. 跨实例持久化 (重启语义)
// ============================================================

#[test]
fn test_posts_survive_store_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = PostStore::with_data_dir(dir.path());
        store.append(&sample_post("p-old", "yesterday's take")).unwrap();
        store.append(&sample_post("p-new", "today's take")).unwrap();
    }

    // 新实例模拟应用重启
    let reopened = PostStore::with_data_dir(dir.path());
    let posts = reopened.load();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, "p-new");
    assert_eq!(posts[1].id, "p-old");
}

#[test]
fn test_reload_preserves_all_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = PostStore::with_data_dir(dir.path());

    let mut post = sample_post("p-full", "Full fidelity check $AAPL");
    post.tickers = Some(vec!["AAPL".to_string()]);
    post.sentiment = Sentiment::Bullish;
    post.likes = 7;
    store.append(&post).unwrap();

    let restored = &PostStore::with_data_dir(dir.path()).load()[0];

    assert_eq!(restored.id, post.id);
    assert_eq!(restored.content, post.content);
    assert_eq!(restored.user.username, post.user.username);
    assert_eq!(restored.timestamp, post.timestamp);
    assert_eq!(restored.tickers, post.tickers);
    assert_eq!(restored.sentiment, Sentiment::Bullish);
    assert_eq!(restored.likes, 7);
    assert!(!restored.is_liked);
}

// ============================================================
// 2. 覆盖与清空
// ============================================================

#[test]
fn test_overwrite_replaces_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let store = PostStore::with_data_dir(dir.path());

    store.append(&sample_post("p-1", "one")).unwrap();
    store.append(&sample_post("p-2", "two")).unwrap();

    let replacement = vec![sample_post("p-3", "three")];
    store.overwrite(&replacement).unwrap();

    let posts = store.load();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, "p-3");
}

#[test]
fn test_clear_removes_storage_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = PostStore::with_data_dir(dir.path());

    store.append(&sample_post("p-1", "gone soon")).unwrap();
    store.clear().unwrap();

    assert!(!store.storage_path().exists());
    assert!(store.load().is_empty());
}

#[test]
fn test_clear_on_missing_file_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let store = PostStore::with_data_dir(dir.path());

    assert!(store.clear().is_ok());
}

// ============================================================
// 3. 容错读取
// ============================================================

#[test]
fn test_load_tolerates_unreadable_storage() {
    let dir = tempfile::tempdir().unwrap();
    let store = PostStore::with_data_dir(dir.path());

    // 在存储文件的位置放一个目录,读取必然失败
    std::fs::create_dir_all(store.storage_path()).unwrap();

    assert!(store.load().is_empty());
}

#[test]
fn test_load_tolerates_wrong_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    let store = PostStore::with_data_dir(dir.path());

    // 合法JSON但不是帖子数组
    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(store.storage_path(), r#"{"posts": []}"#).unwrap();

    assert!(store.load().is_empty());
}

#[test]
fn test_append_recovers_after_corruption() {
    let dir = tempfile::tempdir().unwrap();
    let store = PostStore::with_data_dir(dir.path());

    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(store.storage_path(), "corrupted {{{").unwrap();

    // 损坏数据视为空数据集,追加从头开始
    let count = store.append(&sample_post("p-fresh", "fresh start")).unwrap();
    assert_eq!(count, 1);

    let posts = store.load();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, "p-fresh");
}

// ============================================================
// 4. 并发追加
// ============================================================

#[test]
fn test_concurrent_appends_are_serialized() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(PostStore::with_data_dir(dir.path()));

    let mut handles = Vec::new();
    for t in 0..4 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            for i in 0..5 {
                let id = format!("p-{}-{}", t, i);
                store.append(&sample_post(&id, "concurrent")).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let posts = store.load();
    assert_eq!(posts.len(), 20);

    // 没有丢失任何一条
    let mut ids: Vec<String> = posts.iter().map(|p| p.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}
