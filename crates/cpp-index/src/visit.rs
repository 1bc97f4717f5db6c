//! The traversal driver: one pre-order walk per translation unit.
//!
//! The walk is an explicit worklist rather than recursion or a parser
//! callback; each visited node yields a [`Action`] deciding whether its
//! children are pushed, and scope frames are popped by sentinel entries.

use std::collections::HashSet;

use clang_ast::Id;
use tracing::debug;

use crate::{
    clang::nodes::{Clang, FunctionData, Node, RecordData},
    extract,
    filter::PathFilter,
    location::{self, SourceLocation},
    names::{self, DeclContexts, ScopeStack},
    store::DefinitionStore,
};

/// Traversal decision for one visited node.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    /// Skip the node's children, continue with its siblings.
    Continue,
    /// Visit the node's children in order.
    Recurse,
    /// Visit the node's children inside the named scope.
    RecurseScoped(String),
}

enum WorkItem<'n> {
    Visit(&'n Node),
    LeaveScope,
}

/// Walks one translation unit's AST, feeding extracted definitions into the
/// shared [`DefinitionStore`].
///
/// A visitor is built fresh per translation unit: the decl-context table and
/// recorded storage classes are keyed by node ids, which are only meaningful
/// within one unit. The store outlives the visitor as a mutable borrow.
pub struct TreeVisitor<'a> {
    filter: &'a PathFilter,
    store: &'a mut DefinitionStore,
    scopes: ScopeStack,
    contexts: DeclContexts,
    static_decls: HashSet<String>,
}

impl<'a> TreeVisitor<'a> {
    pub fn new(
        filter: &'a PathFilter,
        store: &'a mut DefinitionStore,
    ) -> Self {
        Self {
            filter,
            store,
            scopes: ScopeStack::new(),
            contexts: DeclContexts::default(),
            static_decls: HashSet::new(),
        }
    }

    /// Pre-order walk from the translation-unit root.
    pub fn visit_translation_unit(
        &mut self,
        root: &Node,
    ) {
        let mut work = vec![WorkItem::Visit(root)];
        while let Some(item) = work.pop() {
            match item {
                WorkItem::LeaveScope => self.scopes.pop(),
                WorkItem::Visit(node) => match self.visit_node(node) {
                    Action::Continue => {}
                    Action::Recurse => {
                        work.extend(node.inner.iter().rev().map(WorkItem::Visit));
                    }
                    Action::RecurseScoped(fqn) => {
                        self.scopes.push(fqn);
                        work.push(WorkItem::LeaveScope);
                        work.extend(node.inner.iter().rev().map(WorkItem::Visit));
                    }
                },
            }
        }
        debug_assert!(self.scopes.is_empty());
    }

    fn visit_node(
        &mut self,
        node: &Node,
    ) -> Action {
        match &node.kind {
            Clang::NamespaceDecl(data) => {
                let spelling =
                    data.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(names::ANONYMOUS_NAMESPACE);
                let fqn = self.scopes.qualify(spelling);
                self.contexts.record(node.id.to_string(), &fqn);
                Action::RecurseScoped(fqn)
            }
            Clang::CXXRecordDecl(data) | Clang::ClassTemplateSpecializationDecl(data) => {
                self.visit_record(node, data)
            }
            Clang::FunctionDecl(data) | Clang::CXXMethodDecl(data) => self.visit_function(node, data),
            // Template and linkage-spec wrappers scope nothing themselves;
            // the templated declaration inside carries the name.
            _ => Action::Recurse,
        }
    }

    fn visit_record(
        &mut self,
        node: &Node,
        data: &RecordData,
    ) -> Action {
        if data.is_implicit {
            return Action::Continue;
        }
        let Some(name) = data.name.as_deref().filter(|n| !n.is_empty()) else {
            // Anonymous record: nothing to index, but nested declarations may
            // still be reachable.
            return Action::Recurse;
        };

        let fqn = self.qualified_name(data.parent_decl_context_id.as_ref(), name);
        self.contexts.record(node.id.to_string(), &fqn);

        if !data.complete_definition {
            // Forward declaration: nothing useful follows without a body.
            return Action::Continue;
        }
        let Some(location) = location::expansion_file_loc(data.loc.as_ref()) else {
            return Action::Continue;
        };
        if !self.filter.in_scope(&location.file) {
            return Action::Continue;
        }

        let def = extract::extract_class(node, data, fqn.clone(), self.rooted(location));
        debug!("class {} at {}:{}", def.fqn, def.location.file, def.location.line);
        self.store.merge_class(def);
        Action::RecurseScoped(fqn)
    }

    fn visit_function(
        &mut self,
        node: &Node,
        data: &FunctionData,
    ) -> Action {
        if data.is_implicit {
            return Action::Continue;
        }
        let id = node.id.to_string();
        if data.has_static_storage() {
            self.static_decls.insert(id.clone());
        }
        let Some(name) = data.name.as_deref().filter(|n| !n.is_empty()) else {
            return Action::Continue;
        };
        if !extract::has_body(node) {
            // Declaration only; its storage class was recorded above for any
            // out-of-line definition that follows.
            return Action::Continue;
        }

        let is_static = data.has_static_storage()
            || data
                .previous_decl
                .as_ref()
                .is_some_and(|prev| self.static_decls.contains(&prev.to_string()));
        if is_static {
            self.static_decls.insert(id);
        }

        let Some(location) = location::expansion_file_loc(data.loc.as_ref()) else {
            return Action::Continue;
        };
        if !self.filter.in_scope(&location.file) {
            return Action::Continue;
        }

        let fqn = self.qualified_name(data.parent_decl_context_id.as_ref(), name);
        let def = extract::extract_function(node, data, fqn.clone(), self.rooted(location), is_static);
        debug!("function {} at {}:{}", def.fqn, def.location.file, def.location.line);
        self.store.merge_function(def);
        Action::RecurseScoped(fqn)
    }

    /// Qualify a spelling against the semantic decl context when the node
    /// names one (out-of-line definitions), otherwise the lexical scope.
    fn qualified_name(
        &self,
        parent_context: Option<&Id>,
        spelling: &str,
    ) -> String {
        if let Some(id) = parent_context
            && let Some(prefix) = self.contexts.lookup(&id.to_string())
        {
            return names::join(prefix, spelling);
        }
        self.scopes.qualify(spelling)
    }

    /// Strip the source-root prefix before the location enters the store.
    fn rooted(
        &self,
        mut location: SourceLocation,
    ) -> SourceLocation {
        location.strip_root(self.filter.root());
        location
    }
}
