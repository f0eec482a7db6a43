use attic::config::StaticFilesConfig;
use attic::files::resolve;
use std::path::PathBuf;

fn docroot(name: &str) -> StaticFilesConfig {
    let dir = std::env::temp_dir().join(format!("attic-files-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    StaticFilesConfig { doc_root: dir, index_file: "index.html".to_string() }
}

#[tokio::test]
async fn test_resolve_existing_file() {
    let docs = docroot("existing");
    std::fs::write(docs.doc_root.join("hello.txt"), b"hello").unwrap();

    let file = resolve(&docs, "/hello.txt").await.unwrap();

    assert_eq!(file.path, docs.doc_root.join("hello.txt"));
    assert_eq!(file.len, 5);
}

#[tokio::test]
async fn test_resolve_directory_appends_index_file() {
    let docs = docroot("dir-index");
    std::fs::write(docs.doc_root.join("index.html"), b"<html></html>").unwrap();

    let via_dir = resolve(&docs, "/").await.unwrap();
    let direct = resolve(&docs, "/index.html").await.unwrap();

    assert_eq!(via_dir.path, direct.path);
    assert_eq!(via_dir.len, direct.len);
}

#[tokio::test]
async fn test_resolve_nested_directory() {
    let docs = docroot("nested");
    std::fs::create_dir_all(docs.doc_root.join("sub")).unwrap();
    std::fs::write(docs.doc_root.join("sub/index.html"), b"nested").unwrap();

    let file = resolve(&docs, "/sub").await.unwrap();

    assert_eq!(file.path, docs.doc_root.join("sub").join("index.html"));
    assert_eq!(file.len, 6);
}

#[tokio::test]
async fn test_resolve_missing_file_is_absent() {
    let docs = docroot("missing");

    assert!(resolve(&docs, "/nope.html").await.is_none());
}

#[tokio::test]
async fn test_resolve_directory_without_index_is_absent() {
    let docs = docroot("no-index");
    std::fs::create_dir_all(docs.doc_root.join("empty")).unwrap();

    assert!(resolve(&docs, "/empty").await.is_none());
}

#[tokio::test]
async fn test_resolve_custom_index_file() {
    let dir = std::env::temp_dir().join(format!("attic-files-custom-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("default.htm"), b"custom").unwrap();
    let docs = StaticFilesConfig {
        doc_root: PathBuf::from(&dir),
        index_file: "default.htm".to_string(),
    };

    let file = resolve(&docs, "/").await.unwrap();

    assert_eq!(file.path, dir.join("default.htm"));
}

#[tokio::test]
async fn test_resolve_modified_time_matches_filesystem() {
    let docs = docroot("mtime");
    let path = docs.doc_root.join("a.txt");
    std::fs::write(&path, b"x").unwrap();
    let expected = std::fs::metadata(&path).unwrap().modified().unwrap();

    let file = resolve(&docs, "/a.txt").await.unwrap();

    assert_eq!(file.modified, expected);
}
