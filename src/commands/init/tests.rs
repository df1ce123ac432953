//! Tests for the init command.

use super::*;
use crate::config::{DocumentFormat, Shade, StyleConfig};
use crate::error::StyleError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use super::scaffolding::*;

fn init_args(format: DocumentFormat, force: bool) -> InitArgs {
    InitArgs { format, force }
}

#[test]
fn test_starter_yaml_is_valid() {
    let loaded = StyleConfig::from_yaml(STARTER_YAML).unwrap();

    assert!(loaded.warnings.is_empty());
    assert_eq!(
        loaded.config.content,
        vec!["/**/*.html", "./**/*.templ", "./**/*.go"]
    );
    assert_eq!(
        loaded.config.colors["gray"][&Shade(800)].as_str(),
        "#1f2937"
    );
    assert_eq!(
        loaded.config.colors["blue"][&Shade(400)].as_str(),
        "#60a5fa"
    );
}

#[test]
fn test_starter_json_matches_yaml() {
    let json = starter_document(DocumentFormat::Json).unwrap();

    let from_json = StyleConfig::from_json(&json).unwrap().config;
    let from_yaml = StyleConfig::from_yaml(STARTER_YAML).unwrap().config;
    assert_eq!(from_json, from_yaml);
}

#[test]
fn test_init_creates_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::new(temp_dir.path(), None);

    cmd_init(&ctx, init_args(DocumentFormat::Yaml, false)).unwrap();

    let path = temp_dir.path().join("stylecfg.yaml");
    assert_eq!(fs::read_to_string(&path).unwrap(), STARTER_YAML);

    // The created file is discoverable and valid
    let loaded = ctx.load().unwrap();
    assert_eq!(loaded.source, Some(path));
}

#[test]
fn test_init_creates_json_config() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::new(temp_dir.path(), None);

    cmd_init(&ctx, init_args(DocumentFormat::Json, false)).unwrap();

    assert!(temp_dir.path().join("stylecfg.json").is_file());
    assert!(!temp_dir.path().join("stylecfg.yaml").exists());
    assert_eq!(ctx.load().unwrap().config.colors.len(), 2);
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("stylecfg.yaml");
    fs::write(&path, "content: ['custom/**']\n").unwrap();
    let ctx = ProjectContext::new(temp_dir.path(), None);

    let err = cmd_init(&ctx, init_args(DocumentFormat::Yaml, false)).unwrap_err();
    assert!(matches!(err, StyleError::UserError(ref m) if m.contains("--force")));
    assert_eq!(fs::read_to_string(&path).unwrap(), "content: ['custom/**']\n");
}

#[test]
fn test_init_refuses_when_other_format_exists() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("stylecfg.json"), "{\"content\": []}").unwrap();
    let ctx = ProjectContext::new(temp_dir.path(), None);

    let err = cmd_init(&ctx, init_args(DocumentFormat::Yaml, false)).unwrap_err();
    assert!(matches!(err, StyleError::UserError(_)));
    assert!(!temp_dir.path().join("stylecfg.yaml").exists());
}

#[test]
fn test_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("stylecfg.yaml");
    fs::write(&path, "content: ['custom/**']\n").unwrap();
    let ctx = ProjectContext::new(temp_dir.path(), None);

    cmd_init(&ctx, init_args(DocumentFormat::Yaml, true)).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), STARTER_YAML);
}

#[test]
fn test_init_honors_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::new(temp_dir.path(), Some(PathBuf::from("config/style.yaml")));

    cmd_init(&ctx, init_args(DocumentFormat::Yaml, false)).unwrap();

    assert!(temp_dir.path().join("config/style.yaml").is_file());
    assert!(ctx.load().is_ok());
}
