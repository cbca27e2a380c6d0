//! In-place patching of previously generated files.
//!
//! Optional features are retrofitted into an already generated project by
//! splicing text at an anchor point. The edits are purely textual; nothing
//! here understands the grammar of the file being patched.

use std::path::{Path, PathBuf};

use crate::{Error, Result, find_nth_occurrence};

/// Where an insertion goes in the existing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Append after a newline at the end of the text
    AppendAtEnd,
    /// Insert before a newline at the start of the text
    Prepend,
    /// Replace the last occurrence of the character and everything after it
    BeforeLast(char),
    /// Replace the nth (1-based) occurrence of the character and everything after it
    BeforeNth(char, usize),
}

/// Append a declaration on its own line at the end of `existing`.
///
/// If `existing` does not end with a newline the declaration is still joined
/// with a single `\n`; no attempt is made to repair the line join.
pub fn append_declaration(existing: &str, declaration: &str) -> String {
    format!("{}\n{}", existing, declaration)
}

/// Insert a declaration on its own line at the start of `existing`.
pub fn prepend_declaration(existing: &str, declaration: &str) -> String {
    format!("{}\n{}", declaration, existing)
}

/// Truncate `existing` at the last `anchor` (dropping it and everything after)
/// and append `insertion` in its place.
///
/// # Examples
///
/// ```
/// use hatch_core::splice_before_last_anchor;
///
/// let patched = splice_before_last_anchor("cfg.service(a);", ';', "\n.service(b);").unwrap();
/// assert_eq!(patched, "cfg.service(a)\n.service(b);");
/// ```
pub fn splice_before_last_anchor(existing: &str, anchor: char, insertion: &str) -> Result<String> {
    let idx = existing
        .rfind(anchor)
        .ok_or_else(|| Error::missing_anchor(anchor))?;
    Ok(splice_at(existing, idx, insertion))
}

/// Like [`splice_before_last_anchor`], anchored on the nth occurrence instead.
pub fn splice_before_nth_anchor(
    existing: &str,
    anchor: char,
    n: usize,
    insertion: &str,
) -> Result<String> {
    let idx = find_nth_occurrence(existing, anchor, n)?
        .ok_or_else(|| Error::missing_anchor(anchor))?;
    Ok(splice_at(existing, idx, insertion))
}

fn splice_at(existing: &str, idx: usize, insertion: &str) -> String {
    let mut out = String::with_capacity(idx + insertion.len());
    out.push_str(&existing[..idx]);
    out.push_str(insertion);
    out
}

/// Text to insert plus where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchRequest {
    pub anchor: Anchor,
    pub insertion: String,
}

impl PatchRequest {
    pub fn new(anchor: Anchor, insertion: impl Into<String>) -> Self {
        Self {
            anchor,
            insertion: insertion.into(),
        }
    }

    pub fn append(insertion: impl Into<String>) -> Self {
        Self::new(Anchor::AppendAtEnd, insertion)
    }

    pub fn prepend(insertion: impl Into<String>) -> Self {
        Self::new(Anchor::Prepend, insertion)
    }

    pub fn before_last(anchor: char, insertion: impl Into<String>) -> Self {
        Self::new(Anchor::BeforeLast(anchor), insertion)
    }

    /// Compute the patched text. `existing` is never modified.
    pub fn apply(&self, existing: &str) -> Result<String> {
        match self.anchor {
            Anchor::AppendAtEnd => Ok(append_declaration(existing, &self.insertion)),
            Anchor::Prepend => Ok(prepend_declaration(existing, &self.insertion)),
            Anchor::BeforeLast(c) => splice_before_last_anchor(existing, c, &self.insertion),
            Anchor::BeforeNth(c, n) => splice_before_nth_anchor(existing, c, n, &self.insertion),
        }
    }
}

/// A patch bound to a file on disk.
#[derive(Debug, Clone)]
pub struct PatchFile {
    path: PathBuf,
    request: PatchRequest,
}

impl PatchFile {
    pub fn new(path: impl Into<PathBuf>, request: PatchRequest) -> Self {
        Self {
            path: path.into(),
            request,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file, apply the patch and write the result back.
    ///
    /// The file is only rewritten once the patched text has been computed,
    /// so a missing anchor leaves it untouched.
    pub fn apply(&self) -> Result<()> {
        let existing =
            std::fs::read_to_string(&self.path).map_err(|e| Error::read(&self.path, e))?;
        let patched = self
            .request
            .apply(&existing)
            .map_err(|e| e.at_path(&self.path))?;
        std::fs::write(&self.path, patched).map_err(|e| Error::write(&self.path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_append_declaration() {
        assert_eq!(
            append_declaration("pub mod example;\n", "pub mod web;"),
            "pub mod example;\n\npub mod web;"
        );
        // no repair of a missing trailing newline beyond the single join
        assert_eq!(append_declaration("a", "b"), "a\nb");
        assert_eq!(append_declaration("", "b"), "\nb");
    }

    #[test]
    fn test_prepend_declaration() {
        assert_eq!(
            prepend_declaration("body {}\n", "@import \"tailwindcss\";"),
            "@import \"tailwindcss\";\nbody {}\n"
        );
    }

    #[test]
    fn test_splice_before_last_anchor() {
        let patched = splice_before_last_anchor("cfg.service(a);", ';', "\n.service(b);").unwrap();
        assert_eq!(patched, "cfg.service(a)\n.service(b);");
    }

    #[test]
    fn test_splice_uses_last_occurrence() {
        let patched = splice_before_last_anchor("a;b;c;\n}\n", ';', "!").unwrap();
        assert_eq!(patched, "a;b;c!");
    }

    #[test]
    fn test_splice_missing_anchor() {
        let input = "no anchor here";
        let err = splice_before_last_anchor(input, ';', "x").unwrap_err();
        assert!(matches!(
            *err,
            Error::MissingAnchor {
                anchor: ';',
                path: None
            }
        ));
        assert_eq!(input, "no anchor here");
    }

    #[test]
    fn test_splice_before_nth_anchor() {
        assert_eq!(
            splice_before_nth_anchor("a;b;c;", ';', 2, "|").unwrap(),
            "a;b|"
        );
        let err = splice_before_nth_anchor("a;b", ';', 3, "|").unwrap_err();
        assert!(matches!(*err, Error::MissingAnchor { .. }));
        let err = splice_before_nth_anchor("a;b", ';', 0, "|").unwrap_err();
        assert!(matches!(*err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_patch_request_dispatch() {
        assert_eq!(PatchRequest::append("b").apply("a").unwrap(), "a\nb");
        assert_eq!(PatchRequest::prepend("a").apply("b").unwrap(), "a\nb");
        assert_eq!(
            PatchRequest::before_last(';', ";\n}").apply("x;y;").unwrap(),
            "x;y;\n}"
        );
        assert_eq!(
            PatchRequest::new(Anchor::BeforeNth(',', 1), ".").apply("a,b,c").unwrap(),
            "a."
        );
    }

    #[test]
    fn test_patch_file_rewrites_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mod.rs");
        fs::write(&path, "pub mod example;\npub mod config;\n").unwrap();

        PatchFile::new(&path, PatchRequest::append("pub mod web;\n"))
            .apply()
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "pub mod example;\npub mod config;\n\npub mod web;\n"
        );
    }

    #[test]
    fn test_patch_file_missing_anchor_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.rs");
        fs::write(&path, "no anchor here").unwrap();

        let err = PatchFile::new(&path, PatchRequest::before_last(';', "x"))
            .apply()
            .unwrap_err();

        match *err {
            Error::MissingAnchor { anchor, path: at } => {
                assert_eq!(anchor, ';');
                assert_eq!(at.as_deref(), Some(path.as_path()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "no anchor here");
    }

    #[test]
    fn test_patch_file_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = PatchFile::new(temp.path().join("absent.rs"), PatchRequest::append("x"))
            .apply()
            .unwrap_err();
        assert!(matches!(*err, Error::Read { .. }));
    }
}
