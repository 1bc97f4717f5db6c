#![allow(dead_code)]

use cpp_index::{DefinitionStore, PathFilter, TreeVisitor, clang::Node};

/// Source root used by all fixture translation units.
pub const ROOT: &str = "/work/src";

/// JSON AST of one translation unit compiled from, conceptually:
///
/// ```cpp
/// namespace ns {
/// struct Foo {
///     int x;
///     static int bar(int y);
/// };
/// int Foo::bar(int y) { return y; }
/// }
/// ```
///
/// The `<FILE>` marker is substituted with the header path so the same tree
/// can be replayed from different files.
const NS_FOO_TU: &str = r#"{
  "id": "0x10", "kind": "TranslationUnitDecl",
  "inner": [
    {
      "id": "0x11", "kind": "NamespaceDecl",
      "loc": {"offset": 10, "file": "<FILE>", "line": 1, "col": 11, "tokLen": 2},
      "name": "ns",
      "inner": [
        {
          "id": "0x12", "kind": "CXXRecordDecl",
          "loc": {"offset": 22, "line": 2, "col": 8, "tokLen": 3},
          "name": "Foo", "tagUsed": "struct", "completeDefinition": true,
          "inner": [
            {"id": "0x13", "kind": "CXXRecordDecl",
             "loc": {"offset": 22, "line": 2, "col": 8, "tokLen": 3},
             "name": "Foo", "tagUsed": "struct", "isImplicit": true},
            {"id": "0x14", "kind": "FieldDecl",
             "loc": {"offset": 36, "line": 3, "col": 9, "tokLen": 1},
             "name": "x", "type": {"qualType": "int"}},
            {"id": "0x15", "kind": "CXXMethodDecl",
             "loc": {"offset": 55, "line": 4, "col": 16, "tokLen": 3},
             "name": "bar", "type": {"qualType": "int (int)"}, "storageClass": "static",
             "inner": [
               {"id": "0x16", "kind": "ParmVarDecl",
                "loc": {"offset": 63, "line": 4, "col": 24, "tokLen": 1},
                "name": "y", "type": {"qualType": "int"}}
             ]}
          ]
        },
        {
          "id": "0x17", "kind": "CXXMethodDecl",
          "loc": {"offset": 80, "line": 6, "col": 10, "tokLen": 3},
          "name": "bar", "type": {"qualType": "int (int)"},
          "parentDeclContextId": "0x12", "previousDecl": "0x15",
          "inner": [
            {"id": "0x18", "kind": "ParmVarDecl",
             "loc": {"offset": 88, "line": 6, "col": 18, "tokLen": 1},
             "name": "y", "type": {"qualType": "int"}},
            {"id": "0x19", "kind": "CompoundStmt",
             "range": {"begin": {"offset": 91, "line": 6, "col": 21, "tokLen": 1},
                       "end": {"offset": 104, "line": 6, "col": 34, "tokLen": 1}}}
          ]
        }
      ]
    }
  ]
}"#;

pub fn ns_foo_tu(file: &str) -> String {
    NS_FOO_TU.replace("<FILE>", file)
}

pub fn parse(json: &str) -> Node {
    serde_json::from_str(json).expect("valid AST JSON")
}

/// Replay one translation unit into the store under the fixture root.
pub fn visit(
    json: &str,
    store: &mut DefinitionStore,
) {
    let filter = PathFilter::new(ROOT);
    visit_with(&filter, json, store);
}

pub fn visit_with(
    filter: &PathFilter,
    json: &str,
    store: &mut DefinitionStore,
) {
    let root = parse(json);
    TreeVisitor::new(filter, store).visit_translation_unit(&root);
}
