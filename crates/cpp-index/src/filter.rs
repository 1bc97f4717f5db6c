/// Path substrings that mark a file as out-of-scope even under the source
/// root: third-party code, test code, and the vendored graphics library.
pub const DEFAULT_EXCLUDES: &[&str] = &["/third_party/", "/tests/", "/skia/"];

/// Decides whether a definition's source file is in scope for indexing.
///
/// A file is in scope iff its normalized absolute path starts with the source
/// root (exact prefix match) and contains none of the excluded substrings.
/// Plain substring search only, no glob or regex semantics.
#[derive(Debug, Clone)]
pub struct PathFilter {
    root: String,
    excludes: Vec<String>,
}

impl PathFilter {
    pub fn new(root: impl Into<String>) -> Self {
        Self::with_excludes(root, DEFAULT_EXCLUDES.iter().map(|s| (*s).to_owned()).collect())
    }

    pub fn with_excludes(
        root: impl Into<String>,
        excludes: Vec<String>,
    ) -> Self {
        Self {
            root: root.into(),
            excludes,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn in_scope(
        &self,
        file: &str,
    ) -> bool {
        file.starts_with(&self.root) && !self.excludes.iter().any(|e| file.contains(e.as_str()))
    }
}

#[cfg(test)]
#[path = "../tests/src/filter_tests.rs"]
mod tests;
