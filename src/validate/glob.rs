//! Content glob validation.
//!
//! Content entries follow the consuming compiler's glob dialect:
//! - `*` and `?` never cross a `/`; only `**` spans directories
//! - A leading `!` marks an exclusion
//! - A leading `./` is the project root; a leading `/` is an absolute path

use crate::error::{Result, StyleError};
use globset::{Glob, GlobBuilder};

/// A compiled content entry.
#[derive(Debug, Clone)]
pub struct ContentGlob {
    /// Entry started with `!`: matching files are excluded.
    pub negated: bool,
    /// Glob is matched against absolute paths rather than root-relative ones.
    pub absolute: bool,
    pub glob: Glob,
}

/// Validate a single content glob pattern.
///
/// `path` is the document location of the pattern (e.g. `content[2]`) and is
/// used to name the offending entry in the error.
///
/// # Returns
///
/// * `Ok(ContentGlob)` - The compiled entry
/// * `Err(StyleError::ValidationError)` - Blank pattern or invalid glob syntax
pub fn validate_glob(path: &str, pattern: &str) -> Result<ContentGlob> {
    if pattern.trim().is_empty() {
        return Err(StyleError::validation(path, "glob pattern must be non-empty"));
    }

    let (negated, body) = match pattern.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, pattern),
    };
    if body.trim().is_empty() {
        return Err(StyleError::validation(
            path,
            format!("exclusion '{}' has no pattern after '!'", pattern),
        ));
    }

    let absolute = body.starts_with('/');
    let body = if absolute {
        body
    } else {
        body.strip_prefix("./").unwrap_or(body)
    };

    check_brackets(body).map_err(|reason| {
        StyleError::validation(path, format!("invalid glob pattern '{}': {}", pattern, reason))
    })?;

    let glob = GlobBuilder::new(body)
        .literal_separator(true)
        .build()
        .map_err(|e| {
            StyleError::validation(
                path,
                format!("invalid glob pattern '{}': {}", pattern, e.kind()),
            )
        })?;

    Ok(ContentGlob {
        negated,
        absolute,
        glob,
    })
}

/// Reject a `]` that does not close a character class.
///
/// Inside a class a `]` right after `[` (or `[!` / `[^`) is a literal member,
/// so `[]]` is valid. Unclosed classes are left to the glob compiler.
fn check_brackets(body: &str) -> std::result::Result<(), &'static str> {
    let mut chars = body.chars();
    let mut in_class = false;
    let mut class_len = 0usize;

    while let Some(c) = chars.next() {
        if in_class {
            match c {
                '!' | '^' if class_len == 0 => {}
                ']' if class_len == 0 => class_len += 1,
                ']' => in_class = false,
                _ => class_len += 1,
            }
            continue;
        }

        match c {
            '\\' => {
                chars.next();
            }
            '[' => {
                in_class = true;
                class_len = 0;
            }
            ']' => return Err("unmatched ']'"),
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_content_globs() {
        for pattern in ["./**/*.templ", "./**/*.go", "/**/*.html", "src/**/*.{js,ts}"] {
            assert!(validate_glob("content[0]", pattern).is_ok(), "{pattern}");
        }
    }

    #[test]
    fn rejects_empty_pattern() {
        let err = validate_glob("content[1]", "").unwrap_err();
        assert_eq!(
            err,
            StyleError::validation("content[1]", "glob pattern must be non-empty")
        );

        assert!(validate_glob("content[1]", "   ").is_err());
        assert!(validate_glob("content[1]", "!").is_err());
    }

    #[test]
    fn rejects_unclosed_character_class() {
        let err = validate_glob("content[3]", "src/[abc.html").unwrap_err();
        match err {
            StyleError::ValidationError { path, message } => {
                assert_eq!(path, "content[3]");
                assert!(message.contains("src/[abc.html"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_stray_closing_bracket() {
        let err = validate_glob("content[0]", "src/foo].html").unwrap_err();
        assert_eq!(
            err,
            StyleError::validation(
                "content[0]",
                "invalid glob pattern 'src/foo].html': unmatched ']'"
            )
        );

        assert!(validate_glob("content[0]", "src/[a-z]].html").is_err());
    }

    #[test]
    fn accepts_bracket_as_class_member() {
        assert!(validate_glob("content[0]", "src/[]]x.html").is_ok());
        assert!(validate_glob("content[0]", "src/[!]]x.html").is_ok());
        assert!(validate_glob("content[0]", "src/[ab].html").is_ok());
        assert!(validate_glob("content[0]", r"src/foo\].html").is_ok());
    }

    #[test]
    fn rejects_unclosed_alternates() {
        assert!(validate_glob("content[0]", "src/*.{js,ts").is_err());
    }

    #[test]
    fn star_does_not_cross_directories() {
        let matcher = validate_glob("content[0]", "src/*.html").unwrap().glob.compile_matcher();
        assert!(matcher.is_match("src/top.html"));
        assert!(!matcher.is_match("src/deep/nested.html"));

        let matcher = validate_glob("content[0]", "src/**/*.html").unwrap().glob.compile_matcher();
        assert!(matcher.is_match("src/deep/nested.html"));
    }

    #[test]
    fn splits_negation_and_root_prefixes() {
        let entry = validate_glob("content[0]", "!./node_modules/**").unwrap();
        assert!(entry.negated);
        assert!(!entry.absolute);
        assert_eq!(entry.glob.glob(), "node_modules/**");

        let entry = validate_glob("content[0]", "/**/*.html").unwrap();
        assert!(!entry.negated);
        assert!(entry.absolute);
    }
}
