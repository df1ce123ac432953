//! Tests for content file collection.

use super::*;
use std::fs;
use tempfile::TempDir;

fn patterns(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn create_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    for file in [
        "index.html",
        "cmd/server/main.go",
        "internal/views/layout.templ",
        "internal/views/layout_templ.go",
        "node_modules/pkg/index.html",
        ".git/hooks/pre-commit.go",
        "README.md",
    ] {
        let path = root.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "<div class=\"bg-gray-800\"></div>").unwrap();
    }

    temp_dir
}

fn relative_paths(files: &[ContentFile]) -> Vec<&str> {
    files.iter().map(|f| f.relative.as_str()).collect()
}

#[test]
fn test_collects_matching_files_sorted() {
    let project = create_project();
    let matcher = ContentMatcher::new(&patterns(&["./**/*.templ", "./**/*.go"])).unwrap();

    let files = matcher.collect_files(project.path()).unwrap();

    assert_eq!(
        relative_paths(&files),
        vec![
            "cmd/server/main.go",
            "internal/views/layout.templ",
            "internal/views/layout_templ.go",
        ]
    );
    assert_eq!(files[0].matched_by, vec![1]);
    assert_eq!(files[1].matched_by, vec![0]);
}

#[test]
fn test_skips_git_and_node_modules() {
    let project = create_project();
    let matcher = ContentMatcher::new(&patterns(&["**/*.html", "**/*.go"])).unwrap();

    let files = matcher.collect_files(project.path()).unwrap();
    let paths = relative_paths(&files);

    assert!(paths.contains(&"index.html"));
    assert!(!paths.iter().any(|p| p.starts_with("node_modules/")));
    assert!(!paths.iter().any(|p| p.starts_with(".git/")));
}

#[test]
fn test_absolute_patterns_match_full_paths() {
    let project = create_project();
    let matcher = ContentMatcher::new(&patterns(&["/**/*.html"])).unwrap();

    let files = matcher.collect_files(project.path()).unwrap();
    assert_eq!(relative_paths(&files), vec!["index.html"]);
}

#[test]
fn test_unmatched_patterns_are_reported() {
    let project = create_project();
    let matcher = ContentMatcher::new(&patterns(&["./**/*.go", "src/**/*.tsx"])).unwrap();

    let files = matcher.collect_files(project.path()).unwrap();
    assert_eq!(matcher.unmatched_patterns(&files), vec!["src/**/*.tsx"]);
}

#[test]
fn test_file_matched_by_several_patterns() {
    let matcher = ContentMatcher::new(&patterns(&["**/*.go", "cmd/**"])).unwrap();

    let hits = matcher.matching_patterns("cmd/server/main.go", Path::new("/p/cmd/server/main.go"));
    assert_eq!(hits, vec![0, 1]);
    assert!(
        matcher
            .matching_patterns("README.md", Path::new("/p/README.md"))
            .is_empty()
    );
}

#[test]
fn test_invalid_pattern_names_entry() {
    let err = ContentMatcher::new(&patterns(&["**/*.go", "[oops"])).unwrap_err();
    assert!(matches!(
        err,
        StyleError::ValidationError { ref path, .. } if path == "content[1]"
    ));
}

#[test]
fn test_missing_root_is_user_error() {
    let project = TempDir::new().unwrap();
    let matcher = ContentMatcher::new(&patterns(&["**/*.go"])).unwrap();

    let err = matcher
        .collect_files(&project.path().join("does-not-exist"))
        .unwrap_err();
    assert!(matches!(err, StyleError::UserError(_)));
}

#[test]
fn test_single_star_stays_in_directory() {
    let project = TempDir::new().unwrap();
    for file in ["src/top.html", "src/deep/nested.html"] {
        let path = project.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
    }

    let matcher = ContentMatcher::new(&patterns(&["src/*.html"])).unwrap();
    let files = matcher.collect_files(project.path()).unwrap();
    assert_eq!(relative_paths(&files), vec!["src/top.html"]);

    let matcher = ContentMatcher::new(&patterns(&["src/**/*.html"])).unwrap();
    let files = matcher.collect_files(project.path()).unwrap();
    assert_eq!(
        relative_paths(&files),
        vec!["src/deep/nested.html", "src/top.html"]
    );
}

#[test]
fn test_negated_patterns_exclude_files() {
    let project = create_project();
    let matcher =
        ContentMatcher::new(&patterns(&["./**/*.go", "!./internal/**", "./**/*.templ"])).unwrap();

    let files = matcher.collect_files(project.path()).unwrap();
    assert_eq!(relative_paths(&files), vec!["cmd/server/main.go"]);

    // Exclusions are never reported as unmatched
    assert_eq!(matcher.unmatched_patterns(&files), vec!["./**/*.templ"]);
}

#[test]
fn test_collected_paths_are_absolute() {
    let project = create_project();
    let matcher = ContentMatcher::new(&patterns(&["**/*.html"])).unwrap();

    let files = matcher.collect_files(project.path()).unwrap();
    let root = project.path().canonicalize().unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].absolute.is_absolute());
    assert_eq!(files[0].absolute, root.join("index.html"));
}
