use clang_ast::{Id, SourceLocation, SourceRange};
use serde::Deserialize;

pub type Node = clang_ast::Node<Clang>;

/// Typed representation of Clang AST node kinds relevant to the indexer.
///
/// Each variant corresponds to a Clang AST node `"kind"` value.
/// The `Other` fallback efficiently skips all unrecognized node kinds.
#[derive(Deserialize)]
pub enum Clang {
    // --- Scopes and class-like declarations ---
    NamespaceDecl(NamespaceData),
    CXXRecordDecl(RecordData),
    ClassTemplateSpecializationDecl(RecordData),
    ClassTemplateDecl(ContainerData),
    LinkageSpecDecl(ContainerData),

    // --- Function-like declarations ---
    FunctionDecl(FunctionData),
    CXXMethodDecl(FunctionData),
    FunctionTemplateDecl(ContainerData),

    // --- Constituents consumed by extraction ---
    ParmVarDecl(ParamData),
    FieldDecl(FieldData),
    CompoundStmt(StmtData),

    // --- Catch-all ---
    // The `loc` and `range` fields MUST be deserialized even for unrecognized
    // node kinds. The `clang-ast` crate tracks "current file" state across the
    // deserialization stream via `SourceLocation`; if we skip locations for
    // nodes that set the file path, all subsequent nodes inherit an empty file.
    #[allow(dead_code)]
    Other {
        #[serde(default)]
        loc: Option<SourceLocation>,
        #[serde(default)]
        range: Option<SourceRange>,
    },
}

/// Namespace declaration data. A missing or empty `name` marks an anonymous
/// namespace.
#[derive(Deserialize, Debug)]
pub struct NamespaceData {
    pub name: Option<String>,
    #[serde(default)]
    pub loc: Option<SourceLocation>,
    #[serde(default)]
    pub range: Option<SourceRange>,
}

/// Class/struct declaration data.
///
/// `completeDefinition` is only printed on the defining declaration; forward
/// declarations leave it absent. `bases` holds the direct base-class
/// specifiers in declaration order.
#[derive(Deserialize, Debug)]
pub struct RecordData {
    pub name: Option<String>,
    #[serde(default)]
    pub loc: Option<SourceLocation>,
    #[serde(default)]
    pub range: Option<SourceRange>,
    #[serde(rename = "tagUsed")]
    pub tag_used: Option<String>,
    #[serde(rename = "completeDefinition", default)]
    pub complete_definition: bool,
    #[serde(rename = "isImplicit", default)]
    pub is_implicit: bool,
    #[serde(default)]
    pub bases: Vec<BaseSpecifier>,
    #[serde(rename = "parentDeclContextId")]
    pub parent_decl_context_id: Option<Id>,
}

/// One direct base-class specifier of a record.
#[derive(Deserialize, Debug)]
pub struct BaseSpecifier {
    #[serde(rename = "type")]
    pub ty: QualType,
    pub access: Option<String>,
}

/// Function or method declaration data.
///
/// The `type.qualType` spelling carries the full signature type, e.g.
/// `"int (int)"`. `storageClass` is only printed where written, so an
/// out-of-line definition of a static member points at the in-class
/// declaration through `previousDecl` instead.
#[derive(Deserialize, Debug)]
pub struct FunctionData {
    pub name: Option<String>,
    #[serde(default)]
    pub loc: Option<SourceLocation>,
    #[serde(default)]
    pub range: Option<SourceRange>,
    #[serde(rename = "type")]
    pub ty: Option<QualType>,
    #[serde(rename = "storageClass")]
    pub storage_class: Option<String>,
    #[serde(rename = "isImplicit", default)]
    pub is_implicit: bool,
    #[serde(rename = "previousDecl")]
    pub previous_decl: Option<Id>,
    #[serde(rename = "parentDeclContextId")]
    pub parent_decl_context_id: Option<Id>,
}

/// Function parameter declaration data.
#[derive(Deserialize, Debug)]
pub struct ParamData {
    pub name: Option<String>,
    #[serde(default)]
    pub loc: Option<SourceLocation>,
    #[serde(default)]
    pub range: Option<SourceRange>,
    #[serde(rename = "type")]
    pub ty: Option<QualType>,
}

/// Field declaration data, consumed by the record size estimate.
#[derive(Deserialize, Debug)]
pub struct FieldData {
    pub name: Option<String>,
    #[serde(default)]
    pub loc: Option<SourceLocation>,
    #[serde(default)]
    pub range: Option<SourceRange>,
    #[serde(rename = "type")]
    pub ty: Option<QualType>,
    #[serde(rename = "isImplicit", default)]
    pub is_implicit: bool,
}

/// Statement data; only kept as a body marker for function definitions.
#[derive(Deserialize, Debug)]
pub struct StmtData {
    #[serde(default)]
    pub loc: Option<SourceLocation>,
    #[serde(default)]
    pub range: Option<SourceRange>,
}

/// Container data for nodes that scope other declarations but are not
/// themselves extracted (templates, linkage specs).
#[derive(Deserialize, Debug)]
pub struct ContainerData {
    pub name: Option<String>,
    #[serde(default)]
    pub loc: Option<SourceLocation>,
    #[serde(default)]
    pub range: Option<SourceRange>,
}

/// Clang's qualified type representation.
#[derive(Deserialize, Debug)]
pub struct QualType {
    #[serde(rename = "qualType")]
    pub qual_type: Option<String>,
}

impl FunctionData {
    pub fn qual_type(&self) -> Option<&str> {
        self.ty.as_ref().and_then(|t| t.qual_type.as_deref())
    }

    /// Whether this declaration spells the `static` storage class itself.
    pub fn has_static_storage(&self) -> bool {
        self.storage_class.as_deref() == Some("static")
    }
}

impl FieldData {
    pub fn qual_type(&self) -> Option<&str> {
        self.ty.as_ref().and_then(|t| t.qual_type.as_deref())
    }
}

impl ParamData {
    pub fn qual_type(&self) -> Option<&str> {
        self.ty.as_ref().and_then(|t| t.qual_type.as_deref())
    }
}
