//! Definition records and their extraction from AST nodes.

use serde::{Deserialize, Serialize};

use crate::{
    clang::nodes::{Clang, FunctionData, Node, ParamData, RecordData},
    layout,
    location::SourceLocation,
    names,
};

/// A class or struct definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDef {
    /// Unqualified spelling.
    pub name: String,
    /// Namespace-qualified name, `::`-joined.
    pub fqn: String,
    /// Qualifier prefix, possibly empty.
    pub namespace: String,
    /// Root-relative definition location.
    pub location: SourceLocation,
    /// Estimated byte size; `<= 0` means unknown or incomplete.
    pub size: i64,
    /// Direct base classes, declaration order, as Clang spells them.
    pub base_classes: Vec<String>,
}

/// A function or method definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDef {
    /// Namespace-qualified name, `::`-joined.
    pub fqn: String,
    /// Qualifier prefix, possibly empty.
    pub namespace: String,
    /// Root-relative definition location.
    pub location: SourceLocation,
    pub is_static: bool,
    /// `"type name"` strings, declaration order.
    pub parameters: Vec<String>,
    pub return_type: String,
}

impl FunctionDef {
    /// The full derived signature, `"<return_type> <fqn>(<params>)"`.
    pub fn signature(&self) -> String {
        format!("{} {}({})", self.return_type, self.fqn, self.parameters.join(", "))
    }
}

/// Build a [`ClassDef`] from a record node whose name and location already
/// resolved.
pub fn extract_class(
    node: &Node,
    data: &RecordData,
    fqn: String,
    location: SourceLocation,
) -> ClassDef {
    let base_classes: Vec<String> = data.bases.iter().filter_map(|b| b.ty.qual_type.clone()).collect();
    let size = class_size(node, data);
    ClassDef {
        name: names::unqualified(&fqn).to_owned(),
        namespace: names::namespace_of(&fqn).to_owned(),
        fqn,
        location,
        size,
        base_classes,
    }
}

/// Build a [`FunctionDef`] from a function-like node whose name, location and
/// static-ness already resolved.
pub fn extract_function(
    node: &Node,
    data: &FunctionData,
    fqn: String,
    location: SourceLocation,
    is_static: bool,
) -> FunctionDef {
    let parameters: Vec<String> = node
        .inner
        .iter()
        .filter_map(|child| match &child.kind {
            Clang::ParmVarDecl(param) => Some(param_spelling(param)),
            _ => None,
        })
        .collect();
    let return_type = data.qual_type().map(return_type_of).unwrap_or_default();
    FunctionDef {
        namespace: names::namespace_of(&fqn).to_owned(),
        fqn,
        location,
        is_static,
        parameters,
        return_type,
    }
}

/// Whether a function-like node carries a body, i.e. is a definition.
pub fn has_body(node: &Node) -> bool {
    node.inner.iter().any(|child| matches!(child.kind, Clang::CompoundStmt(_)))
}

/// Estimated record byte size from immediate field spellings.
///
/// Records with bases or with any field the layout table cannot resolve
/// report `0`, the "unknown/incomplete" sentinel the merge policy keys on.
fn class_size(
    node: &Node,
    data: &RecordData,
) -> i64 {
    if !data.bases.is_empty() {
        return 0;
    }
    let mut fields = Vec::new();
    for child in &node.inner {
        if let Clang::FieldDecl(field) = &child.kind {
            if field.is_implicit {
                continue;
            }
            match field.qual_type() {
                Some(spelling) => fields.push(spelling),
                None => return 0,
            }
        }
    }
    layout::record_size(&fields).map_or(0, |size| size as i64)
}

/// Render one parameter as `"type name"`, or just the type when unnamed.
fn param_spelling(param: &ParamData) -> String {
    let ty = param.qual_type().unwrap_or_default();
    match param.name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) if ty.is_empty() => name.to_owned(),
        Some(name) => format!("{ty} {name}"),
        None => ty.to_owned(),
    }
}

/// The return type portion of a function `qualType` spelling.
///
/// Clang prints function types as `"ret (params)"`, or `"ret *(params)"`
/// for pointer returns, so everything before the first `(` is the return
/// type. Functions returning function pointers lose the pointee part of the
/// spelling; type resolution beyond spelling is out of scope.
fn return_type_of(qual_type: &str) -> String {
    match qual_type.find('(') {
        Some(idx) => qual_type[..idx].trim_end().to_owned(),
        None => qual_type.to_owned(),
    }
}

#[cfg(test)]
#[path = "../tests/src/extract_tests.rs"]
mod tests;
