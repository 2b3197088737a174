use postlint_core::{FsPostStore, PostSource, StoreError};
use std::fs;
use std::path::Path;

fn write_post(dir: &Path, name: &str, title: &str) {
    let source = format!("---\nlayout: post\ntitle: {title}\nauthor: a\n---\nbody\n");
    fs::write(dir.join(name), source).unwrap();
}

#[test]
fn list_slugs_is_sorted_and_markdown_only() {
    let dir = tempfile::tempdir().unwrap();
    write_post(dir.path(), "zeta.md", "Z");
    write_post(dir.path(), "alpha.markdown", "A");
    fs::write(dir.path().join("notes.txt"), "not a post").unwrap();
    fs::create_dir(dir.path().join("drafts")).unwrap();

    let store = FsPostStore::open(dir.path()).unwrap();
    assert_eq!(store.list_slugs().unwrap(), vec!["alpha", "zeta"]);
}

#[test]
fn load_resolves_both_extensions() {
    let dir = tempfile::tempdir().unwrap();
    write_post(dir.path(), "first.md", "First");
    write_post(dir.path(), "second.markdown", "Second");

    let store = FsPostStore::open(dir.path()).unwrap();
    assert_eq!(store.load("first").unwrap().front_matter.title, "First");
    assert_eq!(store.load("second").unwrap().front_matter.title, "Second");
}

#[test]
fn unknown_slug_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsPostStore::open(dir.path()).unwrap();
    assert!(matches!(
        store.load("ghost"),
        Err(StoreError::NotFound(slug)) if slug == "ghost"
    ));
}

#[test]
fn opening_a_missing_root_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(matches!(
        FsPostStore::open(&missing),
        Err(StoreError::NotADirectory(_))
    ));
}

#[test]
fn path_like_slugs_cannot_leave_the_store_root() {
    let dir = tempfile::tempdir().unwrap();
    let posts = dir.path().join("posts");
    fs::create_dir(&posts).unwrap();
    write_post(dir.path(), "secret.md", "Outside");
    write_post(&posts, "inside.md", "Inside");

    let store = FsPostStore::open(&posts).unwrap();
    assert!(matches!(
        store.load("../secret"),
        Err(StoreError::NotFound(slug)) if slug == "../secret"
    ));
    assert!(matches!(
        store.load(".."),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn broken_file_surfaces_as_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.md"), "no front matter here\n").unwrap();

    let store = FsPostStore::open(dir.path()).unwrap();
    assert!(matches!(
        store.load("broken"),
        Err(StoreError::Parse { slug, .. }) if slug == "broken"
    ));
}

#[test]
fn load_file_uses_the_file_stem_as_slug() {
    let dir = tempfile::tempdir().unwrap();
    write_post(dir.path(), "standalone.md", "Standalone");

    let post = FsPostStore::load_file(&dir.path().join("standalone.md")).unwrap();
    assert_eq!(post.slug, "standalone");
}
