use clang_ast::BareSourceLocation;
use serde::{Deserialize, Serialize};

/// A normalized source position: file plus 1-based line/column and byte offset.
///
/// The file is absolute as reported by Clang until [`SourceLocation::strip_root`]
/// rewrites it to a root-relative path for the reports. Formatting is a pure
/// function of the value; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl SourceLocation {
    /// Render the position without the file, as the reports carry it.
    pub fn line_col_offset(&self) -> String {
        format!("{}:{}:{}", self.line, self.column, self.offset)
    }

    /// Drop the source-root prefix (and a following separator) from the file.
    pub fn strip_root(&mut self, root: &str) {
        if let Some(rest) = self.file.strip_prefix(root) {
            self.file = rest.strip_prefix('/').unwrap_or(rest).to_owned();
        }
    }
}

/// Extract the best concrete source location from a [`clang_ast::SourceLocation`].
///
/// Prefers the expansion location (where a macro was invoked, the position
/// the user sees in their source file) over the spelling location (inside the
/// macro definition).
pub fn resolve_loc(loc: &clang_ast::SourceLocation) -> Option<&BareSourceLocation> {
    loc.expansion_loc.as_ref().or(loc.spelling_loc.as_ref())
}

/// Resolve a node's expansion location to a [`SourceLocation`] with a real file.
///
/// Returns `None` for synthetic locations: built-in declarations, command-line
/// scratch buffers, and anything without a resolvable file.
pub fn expansion_file_loc(loc: Option<&clang_ast::SourceLocation>) -> Option<SourceLocation> {
    let bare = loc.and_then(resolve_loc)?;
    if bare.line == 0 || bare.file.is_empty() || bare.file.starts_with('<') {
        return None;
    }
    Some(SourceLocation {
        file: bare.file.to_string(),
        line: bare.line as u32,
        column: bare.col as u32,
        offset: bare.offset as u32,
    })
}

#[cfg(test)]
#[path = "../tests/src/location_tests.rs"]
mod tests;
