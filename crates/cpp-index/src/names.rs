//! Fully-qualified name resolution.
//!
//! The JSON AST dump nests declarations lexically, so qualification is
//! tracked with an explicit scope stack during descent plus a decl-context
//! table keyed by node id. Out-of-line definitions carry
//! `parentDeclContextId` and resolve their qualifier through the table
//! instead of the stack.

use std::collections::HashMap;

/// Placeholder qualifier segment for an unnamed namespace.
pub const ANONYMOUS_NAMESPACE: &str = "<anonymous namespace>";

/// Stack of fully-qualified scope prefixes, one frame per entered scope.
///
/// The translation-unit root is the empty prefix.
#[derive(Debug, Default)]
pub struct ScopeStack {
    frames: Vec<String>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The innermost scope prefix, empty at translation-unit scope.
    pub fn prefix(&self) -> &str {
        self.frames.last().map_or("", String::as_str)
    }

    /// Join the current prefix and a spelling with `::`.
    pub fn qualify(&self, spelling: &str) -> String {
        join(self.prefix(), spelling)
    }

    pub fn push(&mut self, fqn: String) {
        self.frames.push(fqn);
    }

    pub fn pop(&mut self) {
        self.frames.pop();
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Join a qualifier prefix and a spelling with `::`, eliding an empty prefix.
pub fn join(prefix: &str, spelling: &str) -> String {
    if prefix.is_empty() {
        spelling.to_owned()
    } else {
        format!("{prefix}::{spelling}")
    }
}

/// The qualifier prefix of a fully-qualified name, empty when unqualified.
pub fn namespace_of(fqn: &str) -> &str {
    fqn.rsplit_once("::").map_or("", |(prefix, _)| prefix)
}

/// The trailing unqualified spelling of a fully-qualified name.
pub fn unqualified(fqn: &str) -> &str {
    fqn.rsplit_once("::").map_or(fqn, |(_, name)| name)
}

/// Map from declaration-context node id to its fully-qualified name.
///
/// Node ids are only meaningful within one translation unit, so the table
/// lives and dies with the per-unit visitor.
#[derive(Debug, Default)]
pub struct DeclContexts {
    by_id: HashMap<String, String>,
}

impl DeclContexts {
    pub fn record(&mut self, id: String, fqn: &str) {
        self.by_id.insert(id, fqn.to_owned());
    }

    pub fn lookup(&self, id: &str) -> Option<&str> {
        self.by_id.get(id).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "../tests/src/names_tests.rs"]
mod tests;
