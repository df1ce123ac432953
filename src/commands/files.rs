//! Implementation of the `stylecfg files` command.

use crate::cli::FilesArgs;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::scan::{ContentFile, ContentMatcher};

/// Execute the `stylecfg files` command.
///
/// Lists every file under the project root selected by the content globs.
/// Globs that select nothing are logged as warnings.
pub fn cmd_files(ctx: &ProjectContext, args: FilesArgs) -> Result<()> {
    let loaded = ctx.load()?;
    loaded.log_warnings();

    let matcher = ContentMatcher::new(&loaded.config.content)?;
    let files = matcher.collect_files(ctx.root())?;

    for pattern in matcher.unmatched_patterns(&files) {
        tracing::warn!(pattern, "content glob matched no files");
    }

    print!("{}", render_files(&files, args.absolute));
    Ok(())
}

/// One path per line, root-relative or absolute.
pub(super) fn render_files(files: &[ContentFile], absolute: bool) -> String {
    files
        .iter()
        .map(|file| {
            if absolute {
                format!("{}\n", file.absolute.display())
            } else {
                format!("{}\n", file.relative)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn project_files() -> (TempDir, Vec<ContentFile>) {
        let temp_dir = TempDir::new().unwrap();
        for file in ["views/index.html", "main.go", "notes.md"] {
            let path = temp_dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "").unwrap();
        }

        let matcher =
            ContentMatcher::new(&["./**/*.html".to_string(), "./**/*.go".to_string()]).unwrap();
        let files = matcher.collect_files(temp_dir.path()).unwrap();
        (temp_dir, files)
    }

    #[test]
    fn renders_relative_paths() {
        let (_temp_dir, files) = project_files();

        assert_eq!(render_files(&files, false), "main.go\nviews/index.html\n");
    }

    #[test]
    fn renders_absolute_paths() {
        let (temp_dir, files) = project_files();
        let root = temp_dir.path().canonicalize().unwrap();

        let out = render_files(&files, true);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| Path::new(line).is_absolute()));
        assert_eq!(lines[0], root.join("main.go").display().to_string());
        assert_eq!(lines[1], root.join("views/index.html").display().to_string());
    }

    #[test]
    fn absolute_paths_are_canonical() {
        let (temp_dir, _) = project_files();
        let matcher = ContentMatcher::new(&["**/*.go".to_string()]).unwrap();

        // A non-canonical root still yields clean absolute output
        let files = matcher.collect_files(&temp_dir.path().join(".")).unwrap();
        let out = render_files(&files, true);

        assert!(Path::new(out.trim_end()).is_absolute());
        assert!(!out.contains("/./"));
    }
}
