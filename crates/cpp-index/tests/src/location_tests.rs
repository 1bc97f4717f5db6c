use super::*;
use crate::clang::{Clang, Node};

fn namespace_loc(node: &Node) -> Option<&clang_ast::SourceLocation> {
    match &node.kind {
        Clang::NamespaceDecl(data) => data.loc.as_ref(),
        _ => None,
    }
}

#[test]
fn line_col_offset_renders_all_three_fields() {
    let loc = SourceLocation {
        file: "src/foo.h".into(),
        line: 12,
        column: 7,
        offset: 240,
    };
    assert_eq!(loc.line_col_offset(), "12:7:240");
}

#[test]
fn strip_root_removes_prefix_and_separator() {
    let mut loc = SourceLocation {
        file: "/work/src/nested/foo.h".into(),
        line: 1,
        column: 1,
        offset: 0,
    };
    loc.strip_root("/work/src");
    assert_eq!(loc.file, "nested/foo.h");
}

#[test]
fn strip_root_leaves_unrelated_paths_alone() {
    let mut loc = SourceLocation {
        file: "/elsewhere/foo.h".into(),
        line: 1,
        column: 1,
        offset: 0,
    };
    loc.strip_root("/work/src");
    assert_eq!(loc.file, "/elsewhere/foo.h");
}

#[test]
fn expansion_file_loc_resolves_a_real_location() {
    let json = r#"{
        "id": "0x1",
        "kind": "NamespaceDecl",
        "loc": {"offset": 10, "file": "/work/src/foo.h", "line": 3, "col": 11, "tokLen": 2},
        "name": "ns"
    }"#;
    let node: Node = serde_json::from_str(json).expect("valid node");
    let loc = expansion_file_loc(namespace_loc(&node)).expect("resolvable location");
    assert_eq!(loc.file, "/work/src/foo.h");
    assert_eq!(loc.line, 3);
    assert_eq!(loc.column, 11);
    assert_eq!(loc.offset, 10);
}

#[test]
fn expansion_file_loc_rejects_synthetic_locations() {
    // Built-in declarations come with an empty loc object.
    let json = r#"{
        "id": "0x1",
        "kind": "NamespaceDecl",
        "loc": {},
        "name": "ns"
    }"#;
    let node: Node = serde_json::from_str(json).expect("valid node");
    assert!(expansion_file_loc(namespace_loc(&node)).is_none());
}

#[test]
fn expansion_file_loc_rejects_missing_loc() {
    assert!(expansion_file_loc(None).is_none());
}
